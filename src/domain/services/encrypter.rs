use async_trait::async_trait;

use crate::domain::error::ServiceResult;

#[async_trait]
pub trait Encrypter: 'static + Sync + Send {
    async fn encrypt(&self, value: &str) -> ServiceResult<String>;
}
