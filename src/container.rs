use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::Client;

use crate::domain::repositories::account::AddAccountRepository;
use crate::domain::services::account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;
use crate::domain::services::encrypter::Encrypter;

use crate::services::account::AddAccountImpl;
use crate::services::email_validator::EmailValidatorAdapter;
use crate::services::encrypter::Argon2Encrypter;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

use crate::api::controllers::signup::SignUpController;

pub struct Container {
    pub signup_controller: Arc<SignUpController>,
}

impl Container {
    pub fn new(conn: Surreal<Client>) -> Self {
        let db = Arc::new(conn);

        Container {
            signup_controller: signup_controller(add_account(db)),
        }
    }
}

fn add_account(db: Arc<Surreal<Client>>) -> Arc<dyn AddAccount> {
    let encrypter: Arc<dyn Encrypter> = Arc::new(Argon2Encrypter::new());
    let repository: Arc<dyn AddAccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(AddAccountImpl::new(encrypter, repository))
}

fn signup_controller(add_account: Arc<dyn AddAccount>) -> Arc<SignUpController> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter::new());

    Arc::new(SignUpController::new(email_validator, add_account))
}
