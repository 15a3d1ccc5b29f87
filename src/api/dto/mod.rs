pub mod account;
pub mod credentials;
mod validation;
