//! Integration tests for the session endpoints

mod common;

use actix_web::{http::header::LOCATION, test};
use serde_json::json;

use common::StubGateway;
use gig_api::app::create_app;
use gig_core::Role;

#[actix_web::test]
async fn test_login_persists_session_and_points_to_profile() {
    let (state, store) = common::state(StubGateway::granting("abc", "company", "c1"), None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/login")
        .set_json(json!({ "email": "acme@example.com", "password": "secret", "role": "company" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["identity"]["is_logged_in"], true);
    assert_eq!(body["identity"]["role"], "company");
    assert_eq!(body["redirect"], "/company/c1");

    let stored = store.load().unwrap();
    assert_eq!(stored.token(), "abc");
    assert_eq!(stored.role(), Role::Company);
    assert_eq!(stored.user_id(), "c1");
}

#[actix_web::test]
async fn test_rejected_login_leaves_visitor_anonymous() {
    let (state, store) = common::state(StubGateway::Reject, None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/login")
        .set_json(json!({ "email": "dev@example.com", "password": "wrong" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_CREDENTIALS");
    assert!(store.load().is_none());
}

#[actix_web::test]
async fn test_blank_password_is_a_validation_error() {
    let (state, _) = common::state(StubGateway::granting("abc", "freelancer", "f1"), None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/login")
        .set_json(json!({ "email": "dev@example.com", "password": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);
}

#[actix_web::test]
async fn test_backend_outage_is_bad_gateway() {
    let (state, _) = common::state(StubGateway::Unavailable, None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/login")
        .set_json(json!({ "email": "dev@example.com", "password": "secret" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "UPSTREAM_ERROR");
}

#[actix_web::test]
async fn test_verify_otp_logs_new_freelancer_in() {
    let (state, store) = common::state(StubGateway::granting("t9", "freelancer", "f9"), None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/verify-otp")
        .set_json(json!({ "email": "new@example.com", "otp": "123456" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["redirect"], "/freelancer/f9");
    assert_eq!(store.load().unwrap().user_id(), "f9");
}

#[actix_web::test]
async fn test_rejected_otp() {
    let (state, _) = common::state(StubGateway::Reject, None);
    let app = test::init_service(create_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/session/verify-otp")
        .set_json(json!({ "email": "new@example.com", "otp": "000000" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "INVALID_OTP");
}

#[actix_web::test]
async fn test_logout_clears_session_and_is_idempotent() {
    let session = gig_core::Session::new("abc", Role::Freelancer, "f1").unwrap();
    let (state, store) = common::state(StubGateway::Reject, Some(session));
    let app = test::init_service(create_app(state)).await;

    for _ in 0..2 {
        let req = test::TestRequest::post().uri("/session/logout").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["redirect"], "/login");
    }
    assert!(store.load().is_none());

    let req = test::TestRequest::get().uri("/wallet").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn test_current_identity() {
    let app = test::init_service(create_app(common::anonymous())).await;
    let req = test::TestRequest::get().uri("/session").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["is_logged_in"], false);
    assert_eq!(body["role"], "freelancer");
    assert!(body.get("user_id").is_none());

    let app = test::init_service(create_app(common::logged_in_as(Role::Company, "c1"))).await;
    let req = test::TestRequest::get().uri("/session").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["is_logged_in"], true);
    assert_eq!(body["role"], "company");
    assert_eq!(body["user_id"], "c1");
}

#[actix_web::test]
async fn test_health_check() {
    let app = test::init_service(create_app(common::anonymous())).await;
    let req = test::TestRequest::get().uri("/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["service"], "gig-api");
}
