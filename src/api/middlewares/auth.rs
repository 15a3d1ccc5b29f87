use crate::domain::error::AppError;
use crate::domain::models::profile::UserProfile;
use crate::domain::services::user_ms::{UserMsService, UserMsServiceFactory};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, web};
use futures::future::{FutureExt, LocalBoxFuture, Ready, ready};
use std::ops::Deref;
use std::sync::Arc;

/// Fresh, anonymous user-ms client for the current inbound request.
pub struct UserMs(Box<dyn UserMsService>);

/// Fresh user-ms client carrying the caller's bearer token.
pub struct BearerUserMs(Box<dyn UserMsService>);

/// Caller resolved through `who-am-i`, together with the authenticated client.
pub struct RequireUserProfile {
    pub profile: UserProfile,
    pub user_ms: Box<dyn UserMsService>,
}

fn create_user_ms(req: &HttpRequest) -> Result<Box<dyn UserMsService>, AppError> {
    req.app_data::<web::Data<Arc<dyn UserMsServiceFactory>>>()
        .map(|factory| factory.create())
        .ok_or_else(|| AppError::InternalError().trace("UserMsServiceFactory is not defined"))
}

fn create_bearer_user_ms(req: &HttpRequest) -> Result<Box<dyn UserMsService>, AppError> {
    let mut user_ms = create_user_ms(req)?;
    user_ms.set_token_from_request(req)?;
    Ok(user_ms)
}

impl Deref for UserMs {
    type Target = dyn UserMsService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Deref for BearerUserMs {
    type Target = dyn UserMsService;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl FromRequest for UserMs {
    type Error = AppError;
    type Future = Ready<Result<UserMs, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(create_user_ms(req).map(UserMs))
    }
}

impl FromRequest for BearerUserMs {
    type Error = AppError;
    type Future = Ready<Result<BearerUserMs, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(create_bearer_user_ms(req).map(BearerUserMs))
    }
}

impl FromRequest for RequireUserProfile {
    type Error = AppError;
    type Future = LocalBoxFuture<'static, Result<RequireUserProfile, AppError>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let user_ms = create_bearer_user_ms(req);

        async move {
            let user_ms = user_ms?;
            let account = user_ms.who_am_i().await?;
            let profile = user_ms.to_user_profile(&account);

            tracing::debug!(
                user_id = %profile.security_id,
                username = %profile.username,
                email = %profile.email,
                "Resolved caller profile"
            );

            Ok(RequireUserProfile { profile, user_ms })
        }
        .boxed_local()
    }
}

#[cfg(test)]
mod tests {

    use actix_web::{
        App, HttpResponse, Responder,
        http::StatusCode,
        test::{self, TestRequest},
        web,
    };
    use httpmock::prelude::*;
    use serde::Deserialize;
    use serde_json::json;

    use crate::services::user_ms::UserMsServiceFactoryImpl;

    use super::*;

    #[derive(Debug, Deserialize)]
    struct Error {
        code: u16,
        message: String,
    }

    async fn bearer(_: BearerUserMs) -> impl Responder {
        HttpResponse::new(StatusCode::OK)
    }

    async fn profile(auth: RequireUserProfile) -> impl Responder {
        HttpResponse::Ok().json(json!({
            "securityId": auth.profile.security_id,
            "username": auth.profile.username,
        }))
    }

    fn factory(server: &MockServer) -> Arc<dyn UserMsServiceFactory> {
        Arc::new(UserMsServiceFactoryImpl::new(
            reqwest::Client::new(),
            server.base_url(),
        ))
    }

    async fn send_req(
        server: &MockServer,
        uri: &str,
        authorization: Option<&str>,
    ) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .route("/bearer", web::get().to(bearer))
                .route("/profile", web::get().to(profile))
                .app_data(web::Data::new(factory(server))),
        )
        .await;

        let mut req = TestRequest::get().uri(uri);

        if let Some(authorization) = authorization {
            req = req.insert_header(("Authorization", authorization));
        }

        req.send_request(&app).await
    }

    #[actix_web::test]
    async fn test_missing_header_makes_no_upstream_call() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.any_request();
            then.status(200);
        });

        for uri in ["/bearer", "/profile"] {
            let res = send_req(&server, uri, None).await;

            assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

            let err: Error = test::read_body_json(res).await;
            assert_eq!(err.code, 401);
            assert_eq!(err.message, "No authorization header was provided");
        }

        assert_eq!(mock.calls(), 0);
    }

    #[actix_web::test]
    async fn test_bearer_header() {
        let server = MockServer::start();

        let res = send_req(&server, "/bearer", Some("Bearer abc123")).await;

        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_profile_resolved_through_who_am_i() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(Method::GET)
                .path("/auth/who-am-i")
                .header("authorization", "Bearer abc123");
            then.status(200)
                .json_body(json!({ "id": "u1", "username": "alice", "email": "a@x.com" }));
        });

        let res = send_req(&server, "/profile", Some("Bearer abc123")).await;

        assert_eq!(res.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(res).await;
        assert_eq!(body, json!({ "securityId": "u1", "username": "alice" }));
        mock.assert();
    }

    #[actix_web::test]
    async fn test_profile_rejected_upstream() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(Method::GET).path("/auth/who-am-i");
            then.status(401)
                .json_body(json!({ "error": { "statusCode": 401, "message": "Invalid token" } }));
        });

        let res = send_req(&server, "/profile", Some("Bearer expired")).await;

        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

        let err: Error = test::read_body_json(res).await;
        assert_eq!(err.message, "Invalid token");
    }

    #[actix_web::test]
    async fn test_missing_factory() {
        let app = test::init_service(App::new().route("/bearer", web::get().to(bearer))).await;

        let res = TestRequest::get()
            .uri("/bearer")
            .insert_header(("Authorization", "Bearer abc123"))
            .send_request(&app)
            .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
