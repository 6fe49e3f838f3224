mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use common::{TestApp, body_json, form, get};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn profile_of_caller() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(get("/api/usuario", Some(2)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"id": 2, "email": "bob@example.com"})
    );
}

#[tokio::test]
async fn profile_for_deleted_user_is_404() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(get("/api/usuario", Some(42)))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn preferences_report_each_outcome() {
    let app = TestApp::new();

    let response = app
        .router
        .clone()
        .oneshot(form(
            "POST",
            "/api/preferencias",
            1,
            "email=bob%40example.com&password=abc",
        ))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({"notices": [
            {"category": "danger", "message": "That email is already in use."},
            {"category": "warning", "message": "Password must be at least 6 characters."}
        ]})
    );

    let profile = body_json(
        app.router
            .oneshot(get("/api/usuario", Some(1)))
            .await
            .expect("response"),
    )
    .await;
    assert_eq!(profile["email"], "alice@example.com");
}

#[tokio::test]
async fn preferences_update_email_and_password() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(form(
            "POST",
            "/api/preferencias",
            1,
            "email=alice%40new.org&password=longenough",
        ))
        .await
        .expect("response");

    assert_eq!(
        body_json(response).await,
        json!({"notices": [
            {"category": "success", "message": "Email updated."},
            {"category": "success", "message": "Password updated."}
        ]})
    );
}

#[tokio::test]
async fn preferences_require_a_token() {
    let app = TestApp::new();

    let response = app
        .router
        .oneshot(get("/api/usuario", None))
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn preferences_reject_non_form_body_as_json() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/api/preferencias")
        .header(
            header::AUTHORIZATION,
            format!("Bearer {}", common::token_for(1)),
        )
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("email=x"))
        .expect("request");

    let response = app.router.oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], "error");
}
