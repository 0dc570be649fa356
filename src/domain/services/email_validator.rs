use crate::domain::error::ServiceResult;

pub trait EmailValidator: 'static + Sync + Send {
    fn is_valid(&self, email: &str) -> ServiceResult<bool>;
}
