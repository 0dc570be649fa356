use crate::domain::{error::ServiceResult, services::encrypter::Encrypter};

use actix_web::web;

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, Result, SaltString, rand_core::OsRng},
};

use async_trait::async_trait;

#[derive(Default)]
pub struct Argon2Encrypter;

impl Argon2Encrypter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, value: &str) -> ServiceResult<String> {
        let value = value.to_owned();

        Ok(web::block(move || encrypt_password(&value)).await??)
    }
}

pub fn encrypt_password(password: &str) -> Result<String> {
    let argon2 = Argon2::default();
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;
    use crate::domain::error::ServiceError;

    pub static HASHED_PASSWORD: &str = "hashed_password";

    /// Records every value it is asked to encrypt and answers with
    /// [`HASHED_PASSWORD`], or with `failure` when set.
    #[derive(Default)]
    pub struct EncrypterImpl {
        pub calls: Mutex<Vec<String>>,
        pub failure: Option<String>,
    }

    impl EncrypterImpl {
        pub fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::default(),
                failure: Some(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl Encrypter for EncrypterImpl {
        async fn encrypt(&self, value: &str) -> ServiceResult<String> {
            self.calls.lock().await.push(value.to_string());

            match &self.failure {
                Some(message) => Err(ServiceError::Unexpected(message.clone())),
                None => Ok(HASHED_PASSWORD.to_string()),
            }
        }
    }
}
