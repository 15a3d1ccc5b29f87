use crate::api::dto::validation::{is_email, is_password};
use crate::domain::models::account::{Email, Password};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct EmailDTO {
    #[validate(custom(function = "is_email"))]
    #[schema(examples("your@email.com"))]
    pub email: String,
}

#[derive(Debug, Deserialize, ToSchema, Validate)]
pub struct PasswordDTO {
    #[validate(custom(function = "is_password"))]
    #[schema(examples("n3wStR0ngP4ssw0rd!"))]
    pub password: String,
}

impl From<EmailDTO> for Email {
    fn from(email: EmailDTO) -> Self {
        Email { email: email.email }
    }
}

impl From<PasswordDTO> for Password {
    fn from(password: PasswordDTO) -> Self {
        Password {
            password: password.password,
        }
    }
}
