mod common;

use actix_web::{test, web, App, HttpResponse};
use pretty_assertions::assert_eq;
use serde_json::json;

use taskdesk::auth::RequireAuth;

#[actix_rt::test]
async fn test_register_returns_token_and_user_without_password() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "alice");
    assert!(body["user"]["id"].as_i64().unwrap() > 0);
    // The password hash must never leave the server.
    assert!(body["user"].get("password").is_none());
}

#[actix_rt::test]
async fn test_duplicate_email_and_username_are_conflicts() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;
    common::register_user(&app, "alice", "alice@example.com", "password123").await;

    // Same email, different username.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice2",
            "email": "alice@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "username or email already exists");

    // Same username, different email.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_register_validates_input() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;

    // Invalid email.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "password123"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    // Short password.
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "short"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_malformed_json_is_rejected_with_fixed_message() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid request payload");
}

#[actix_rt::test]
async fn test_login_with_username_or_email() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;
    common::register_user(&app, "alice", "alice@example.com", "password123").await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "alice", "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"email": "alice@example.com", "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "alice");
}

#[actix_rt::test]
async fn test_login_failures() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;
    common::register_user(&app, "alice", "alice@example.com", "password123").await;

    // Wrong password and unknown user both yield the same 401.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "alice", "password": "wrong-password"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let wrong_password: serde_json::Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"username": "nobody", "password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);
    let unknown_user: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(wrong_password["error"], unknown_user["error"]);

    // Neither username nor email supplied.
    let req = test::TestRequest::post()
        .uri("/api/auth/login")
        .set_json(json!({"password": "password123"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}

#[actix_rt::test]
async fn test_require_auth_guard() {
    let pool = common::test_pool().await;
    let auth = common::auth_service(&pool);

    // Mount a protected probe route; no production route uses RequireAuth
    // but the guard must keep working for endpoints that opt in.
    let app = test::init_service(
        App::new().service(
            web::scope("/protected")
                .wrap(RequireAuth::new(auth.clone()))
                .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
        ),
    )
    .await;

    // Missing header.
    let req = test::TestRequest::get().uri("/protected").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Malformed header.
    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Token abc"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Garbage token.
    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", "Bearer not.a.token"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 401);

    // Valid token passes.
    let full_app = common::init_app(pool).await;
    let user = common::register_user(&full_app, "alice", "alice@example.com", "password123").await;
    let req = test::TestRequest::get()
        .uri("/protected")
        .insert_header(("Authorization", format!("Bearer {}", user.token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
}

#[actix_rt::test]
async fn test_health_endpoint() {
    let pool = common::test_pool().await;
    let app = common::init_app(pool).await;

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["environment"], "test");
    assert!(body["time"].is_string());
}
