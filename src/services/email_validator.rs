use crate::domain::{error::ServiceResult, services::email_validator::EmailValidator};

use validator::ValidateEmail;

const MIN_EMAIL_LENGTH: usize = 3;
const MAX_EMAIL_LENGTH: usize = 255;

/// Email format check backed by the `validator` crate.
#[derive(Default)]
pub struct EmailValidatorAdapter;

impl EmailValidatorAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> ServiceResult<bool> {
        if email.len() < MIN_EMAIL_LENGTH || email.len() > MAX_EMAIL_LENGTH {
            return Ok(false);
        }

        Ok(email.validate_email())
    }
}
