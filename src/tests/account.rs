use actix_web::http::StatusCode;
use actix_web::test;
use actix_web::test::TestRequest;
use httpmock::prelude::*;
use rstest::*;
use serde_json::{Value, json};

use crate::app;
use crate::tests::{Error, TestContext, account_json, context};

#[rstest]
#[actix_web::test]
async fn test_request_email_verification(context: TestContext) {
    let who_am_i = context.user_ms.mock(|when, then| {
        when.method(Method::GET)
            .path("/auth/who-am-i")
            .header("authorization", "Bearer abc123");
        then.status(200).json_body(account_json());
    });
    let request = context.user_ms.mock(|when, then| {
        when.method(Method::POST)
            .path("/account/request-email-verification")
            .header("authorization", "Bearer abc123");
        then.status(200).json_body(account_json());
    });

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/account/request-email-verification")
        .insert_header(("Authorization", "Bearer abc123"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = test::read_body_json(res).await;

    assert_eq!(body, account_json());
    who_am_i.assert();
    request.assert();
}

#[rstest]
#[actix_web::test]
async fn test_verify_email(context: TestContext) {
    context.user_ms.mock(|when, then| {
        when.method(Method::GET).path("/auth/who-am-i");
        then.status(200).json_body(account_json());
    });
    let verify = context.user_ms.mock(|when, then| {
        when.method(Method::PATCH)
            .path("/account/verify-email")
            .header("authorization", "Bearer v3r1fy");
        then.status(200).json_body(account_json());
    });

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::patch()
        .uri("/api/v1/account/verify-email")
        .insert_header(("Authorization", "Bearer v3r1fy"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::OK);
    verify.assert();
}

#[rstest]
#[actix_web::test]
async fn test_verify_email_expired_link(context: TestContext) {
    context.user_ms.mock(|when, then| {
        when.method(Method::GET).path("/auth/who-am-i");
        then.status(200).json_body(account_json());
    });
    context.user_ms.mock(|when, then| {
        when.method(Method::PATCH).path("/account/verify-email");
        then.status(410)
            .json_body(json!({ "error": { "statusCode": 410, "message": "Verification link expired" } }));
    });

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::patch()
        .uri("/api/v1/account/verify-email")
        .insert_header(("Authorization", "Bearer v3r1fy"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::GONE);

    let err: Error = test::read_body_json(res).await;
    assert_eq!(err.code, 410);
    assert_eq!(err.message, "Verification link expired");
}

#[rstest]
#[actix_web::test]
async fn test_unknown_caller_is_rejected_before_forwarding(context: TestContext) {
    context.user_ms.mock(|when, then| {
        when.method(Method::GET).path("/auth/who-am-i");
        then.status(401).json_body(json!({ "message": "Invalid token" }));
    });
    let request = context.user_ms.mock(|when, then| {
        when.method(Method::POST)
            .path("/account/request-email-verification");
        then.status(200).json_body(account_json());
    });

    let app = test::init_service(app::create(context.container)).await;

    let res = TestRequest::post()
        .uri("/api/v1/account/request-email-verification")
        .insert_header(("Authorization", "Bearer forged"))
        .send_request(&app)
        .await;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(request.calls(), 0);
}
