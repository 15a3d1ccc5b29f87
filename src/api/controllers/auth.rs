use crate::api::dto::account::{AccountDTO, CredentialsDTO, NewAccountDTO, TokenDTO};
use crate::api::error::ApiResult;
use crate::api::middlewares::auth::{BearerUserMs, UserMs};
use crate::api::middlewares::validate::ValidJson;
use crate::domain::error::AppError;

use actix_web::{HttpResponse, get, post};

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(sign_up).service(login).service(who_am_i);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 409, body = AppError, example = json!(AppError::example_409())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = NewAccountDTO,
    tag = "Auth",
)]
#[post("/auth/sign-up")]
pub async fn sign_up(payload: ValidJson<NewAccountDTO>, user_ms: UserMs) -> ApiResult {
    let account = user_ms.sign_up(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}

#[utoipa::path(
    responses(
        (status = 200, body = TokenDTO),
        (status = 400, body = AppError, example = json!(AppError::example_400())),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 422, body = AppError, example = json!(AppError::example_422())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    request_body = CredentialsDTO,
    tag = "Auth"
)]
#[post("/auth/login")]
pub async fn login(payload: ValidJson<CredentialsDTO>, user_ms: UserMs) -> ApiResult {
    let token = user_ms.login(payload.into_inner().into()).await?;

    Ok(HttpResponse::Ok().json(TokenDTO::from(token)))
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO),
        (status = 401, body = AppError, example = json!(AppError::example_401())),
        (status = 502, body = AppError, example = json!(AppError::example_502()))
    ),
    security(("bearer" = [])),
    tag = "Auth"
)]
#[get("/auth/who-am-i")]
pub async fn who_am_i(user_ms: BearerUserMs) -> ApiResult {
    let account = user_ms.who_am_i().await?;

    Ok(HttpResponse::Ok().json(AccountDTO::from(account)))
}
