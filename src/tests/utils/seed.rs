use crate::domain::models::account::Account;
use ::surrealdb::{Surreal, engine::remote::ws::Client, sql::Thing};

pub async fn seed_account(conn: &Surreal<Client>) -> Account {
    let account = Account {
        id: String::new(),
        name: "Test Account".to_string(),
        email: "test_account@email.com".to_string(),
        password: "stR0ngP4ssw0rd!".to_string(),
    };

    let thing: Option<Thing> = conn
        .query(
            "RETURN (CREATE ONLY account CONTENT {
                name: $name,
                email: $email,
                password: crypto::argon2::generate($password)
            }).id",
        )
        .bind(("name", account.name.clone()))
        .bind(("email", account.email.clone()))
        .bind(("password", account.password.clone()))
        .await
        .unwrap()
        .take(0)
        .unwrap();

    Account {
        id: thing.unwrap().id.to_string(),
        ..account
    }
}

pub async fn stored_password(conn: &Surreal<Client>, email: &str) -> Option<String> {
    conn.query("SELECT VALUE password FROM account WHERE email = $email")
        .bind(("email", email.to_owned()))
        .await
        .unwrap()
        .take(0)
        .unwrap()
}

pub async fn account_count(conn: &Surreal<Client>) -> usize {
    let ids: Vec<Thing> = conn
        .query("SELECT VALUE id FROM account")
        .await
        .unwrap()
        .take(0)
        .unwrap();

    ids.len()
}
