use async_trait::async_trait;

use crate::domain::models::account::{Account, AccountInput};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Persists `account` as given and returns it with its assigned id.
    async fn add(&self, account: AccountInput) -> RepositoryResult<Account>;
}
