use crate::api::dto::validation::{is_email, is_password, is_username};
use crate::domain::models::account::{Account, Credentials, NewAccount};
use crate::domain::models::token::Token;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, ToSchema)]
pub struct AccountDTO {
    #[schema(examples("6650f0c2a1b4e3d2c1f0a9b8"))]
    id: String,
    #[schema(examples("your_name"))]
    username: String,
    #[schema(examples("your@email.com"))]
    email: String,
}

#[derive(Debug, Validate, Deserialize, ToSchema)]
pub struct NewAccountDTO {
    #[validate(custom(function = "is_username"))]
    #[schema(examples("your_name"))]
    pub username: String,

    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct CredentialsDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,

    #[validate(custom(function = "is_password"))]
    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenDTO {
    #[schema(examples("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9"))]
    pub token: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            username: val.username,
            email: val.email,
        }
    }
}

impl From<Token> for TokenDTO {
    fn from(val: Token) -> Self {
        TokenDTO { token: val.token }
    }
}

impl From<NewAccountDTO> for NewAccount {
    fn from(new_account: NewAccountDTO) -> Self {
        NewAccount {
            username: new_account.username,
            email: new_account.email,
            password: new_account.password,
        }
    }
}

impl From<CredentialsDTO> for Credentials {
    fn from(credentials: CredentialsDTO) -> Self {
        Credentials {
            email: credentials.email,
            password: credentials.password,
        }
    }
}
