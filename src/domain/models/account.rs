#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account data accepted by the sign up use case. `password` holds the
/// plaintext until the use case swaps it for its hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}
