use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::models::account::{Account, AccountInput};
use crate::domain::repositories::account::AddAccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountCreate};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Client>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Client>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";

#[async_trait]
impl AddAccountRepository for AccountRepositoryImpl {
    async fn add(&self, account: AccountInput) -> RepositoryResult<Account> {
        let record: Option<SurrealAccount> = self
            .db
            .create(ACCOUNT)
            .content(SurrealAccountCreate::from(account))
            .await?;

        let account: Account = record.ok_or(RepositoryError::NotCreated(ACCOUNT))?.into();

        tracing::debug!(id = %account.id, "account record created");

        Ok(account)
    }
}
