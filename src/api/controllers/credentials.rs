use crate::api::dto::credentials::{EmailDTO, PasswordDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::{RequireUserProfile, UserMs};
use crate::api::middlewares::validate::ValidJson;
use crate::domain::error::AppError;

use actix_web::{HttpResponse, patch, post};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(request_password_recovery)
        .service(update_password);
}

#[utoipa::path(
    responses(
        (status = 204, description = "Recovery email requested"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = EmailDTO,
    tag = "Credentials"
)]
#[post("/credentials/request-password-recovery")]
pub async fn request_password_recovery(
    payload: ValidJson<EmailDTO>,
    user_ms: UserMs,
) -> ApiResult {
    user_ms
        .request_password_recovery(payload.into_inner().into())
        .await?;

    Ok(HttpResponse::NoContent().finish())
}

#[utoipa::path(
    responses(
        (status = 204, description = "Password updated"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = PasswordDTO,
    security(("bearer" = [])),
    tag = "Credentials"
)]
#[patch("/credentials/update-password")]
pub async fn update_password(payload: ValidJson<PasswordDTO>, auth: RequireUserProfile) -> ApiResult {
    auth.user_ms
        .update_password(payload.into_inner().into())
        .await?;

    tracing::info!(user_id = %auth.profile.security_id, "Password updated");

    Ok(HttpResponse::NoContent().finish())
}
