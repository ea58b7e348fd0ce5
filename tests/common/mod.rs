#![allow(dead_code)]

use actix_http::Request;
use actix_web::body::MessageBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use serde_json::json;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

use taskdesk::config::Config;
use taskdesk::db::{self, ContactRepository, TaskRepository, UserRepository};
use taskdesk::error::AppError;
use taskdesk::routes;
use taskdesk::services::{AuthService, ContactService, TaskService};

pub const TEST_SECRET: &str = "test-secret";

/// Fresh in-memory database, migrated. `max_connections(1)` keeps every
/// statement on the single connection that owns the in-memory schema.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory sqlite");
    db::migrate(&pool).await.expect("migrations failed");
    pool
}

pub fn test_config() -> Config {
    Config {
        port: 0,
        static_dir: std::env::temp_dir(),
        log_level: "info".to_string(),
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        environment: "test".to_string(),
    }
}

pub fn auth_service(pool: &SqlitePool) -> AuthService {
    AuthService::new(UserRepository::new(pool.clone()), TEST_SECRET.to_string())
}

/// The full application as mounted in `main.rs`, minus the static-file
/// fallback, against the given pool.
pub async fn init_app(
    pool: SqlitePool,
) -> impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error> {
    let auth = auth_service(&pool);
    let tasks = TaskService::new(TaskRepository::new(pool.clone()));
    let contacts = ContactService::new(ContactRepository::new(pool));

    test::init_service(
        App::new()
            .app_data(web::Data::new(test_config()))
            .app_data(web::Data::new(auth.clone()))
            .app_data(web::Data::new(tasks))
            .app_data(web::Data::new(contacts))
            .app_data(web::JsonConfig::default().error_handler(|_, _| {
                AppError::BadRequest("Invalid request payload".into()).into()
            }))
            .service(web::scope("/api").configure(move |cfg| routes::configure(cfg, auth))),
    )
    .await
}

pub struct TestUser {
    pub id: i64,
    pub token: String,
}

/// Registers a user through the API and returns its id and token.
pub async fn register_user<S, B>(app: &S, username: &str, email: &str, password: &str) -> TestUser
where
    S: Service<Request, Response = ServiceResponse<B>, Error = Error>,
    B: MessageBody,
{
    let req = test::TestRequest::post()
        .uri("/api/auth/register")
        .set_json(json!({
            "username": username,
            "email": email,
            "password": password,
        }))
        .to_request();
    let resp = test::call_service(app, req).await;
    let status = resp.status();
    let body = test::read_body(resp).await;
    assert!(
        status.is_success(),
        "registration failed: {} {}",
        status,
        String::from_utf8_lossy(&body)
    );

    let auth: taskdesk::auth::AuthResponse =
        serde_json::from_slice(&body).expect("failed to parse registration response");
    TestUser {
        id: auth.user.id,
        token: auth.token,
    }
}
