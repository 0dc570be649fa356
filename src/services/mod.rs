pub mod account;
pub mod email_validator;
pub mod encrypter;
