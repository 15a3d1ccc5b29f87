use crate::api::dto::account::AccountDTO;
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::RequireUserProfile;
use crate::domain::error::AppError;

use actix_web::{HttpResponse, patch, post};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(request_email_verification).service(verify_email);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Verification email requested"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
#[post("/account/request-email-verification")]
pub async fn request_email_verification(auth: RequireUserProfile) -> ApiResult {
    let account = auth.user_ms.request_email_verification().await?;

    tracing::info!(user_id = %auth.profile.security_id, "Email verification requested");

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Email verified"),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("bearer" = [])),
    tag = "Account"
)]
#[patch("/account/verify-email")]
pub async fn verify_email(auth: RequireUserProfile) -> ApiResult {
    let account = auth.user_ms.verify_email().await?;

    tracing::info!(user_id = %auth.profile.security_id, "Email verified");

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}
