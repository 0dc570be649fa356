use std::sync::Arc;

use crate::domain::{
    error::ServiceResult,
    models::account::{Account, AccountInput},
    repositories::account::AddAccountRepository,
    services::{account::AddAccount, encrypter::Encrypter},
};

use async_trait::async_trait;

pub struct AddAccountImpl {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl AddAccountImpl {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for AddAccountImpl {
    async fn add(&self, account: AccountInput) -> ServiceResult<Account> {
        let password = self.encrypter.encrypt(&account.password).await?;

        Ok(self
            .repository
            .add(AccountInput {
                password,
                ..account
            })
            .await?)
    }
}
