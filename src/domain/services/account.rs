use async_trait::async_trait;

use crate::domain::error::ServiceResult;
use crate::domain::models::account::{Account, AccountInput};

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, account: AccountInput) -> ServiceResult<Account>;
}
