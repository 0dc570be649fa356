use serde::{Deserialize, Serialize};
use surrealdb::sql::Thing;

use crate::domain::models::account::{Account, AccountInput};

#[derive(Debug, Deserialize)]
pub struct SurrealAccount {
    id: Thing,
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Serialize)]
pub struct SurrealAccountCreate {
    name: String,
    email: String,
    password: String,
}

impl From<AccountInput> for SurrealAccountCreate {
    fn from(account: AccountInput) -> Self {
        SurrealAccountCreate {
            name: account.name,
            email: account.email,
            password: account.password,
        }
    }
}

impl From<SurrealAccount> for Account {
    fn from(record: SurrealAccount) -> Self {
        Account {
            id: record.id.id.to_string(),
            name: record.name,
            email: record.email,
            password: record.password,
        }
    }
}
