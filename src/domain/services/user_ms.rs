use actix_web::HttpRequest;
use async_trait::async_trait;
use thiserror::Error;

use crate::domain::models::account::{Account, Credentials, Email, NewAccount, Password};
use crate::domain::models::profile::UserProfile;
use crate::domain::models::token::Token;

pub type UserMsResult<T> = core::result::Result<T, UserMsError>;

#[derive(Error, Debug)]
pub enum UserMsError {
    #[error("No authorization header was provided")]
    Unauthenticated,
    #[error("{message}")]
    Upstream { status: u16, message: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Client for the user microservice, scoped to a single inbound request.
///
/// The bearer token captured by [`UserMsService::set_token_from_request`] is
/// attached to every call made afterwards through the same instance.
#[async_trait]
pub trait UserMsService: Send + Sync {
    fn set_token_from_request(&mut self, request: &HttpRequest) -> UserMsResult<()>;

    fn to_user_profile(&self, account: &Account) -> UserProfile {
        UserProfile::from(account)
    }

    async fn sign_up(&self, new_account: NewAccount) -> UserMsResult<Account>;
    async fn login(&self, credentials: Credentials) -> UserMsResult<Token>;
    async fn who_am_i(&self) -> UserMsResult<Account>;
    async fn request_email_verification(&self) -> UserMsResult<Account>;
    async fn verify_email(&self) -> UserMsResult<Account>;
    async fn request_password_recovery(&self, email: Email) -> UserMsResult<()>;
    async fn update_password(&self, password: Password) -> UserMsResult<()>;
}

/// Builds a fresh [`UserMsService`] for every inbound request.
pub trait UserMsServiceFactory: 'static + Sync + Send {
    fn create(&self) -> Box<dyn UserMsService>;
}
