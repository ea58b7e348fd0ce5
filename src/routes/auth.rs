use actix_web::{post, web, HttpResponse, Responder};
use validator::Validate;

use crate::auth::{AuthResponse, LoginRequest, RegisterRequest};
use crate::error::AppError;
use crate::services::AuthService;

/// Register a new user
///
/// Creates the account and returns a signed token alongside the user record.
/// Duplicate usernames or emails come back as 400.
#[post("/register")]
pub async fn register(
    auth: web::Data<AuthService>,
    body: web::Json<RegisterRequest>,
) -> Result<impl Responder, AppError> {
    body.validate()?;

    let user = auth.register(&body).await?;
    let token = auth.generate_token(&user)?;

    Ok(HttpResponse::Created().json(AuthResponse { token, user }))
}

/// Login
///
/// Authenticates by username or email and returns a fresh token. Bad
/// credentials are 401 without revealing whether the account exists.
#[post("/login")]
pub async fn login(
    auth: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<impl Responder, AppError> {
    if body.password.is_empty() || (body.username.is_empty() && body.email.is_empty()) {
        return Err(AppError::BadRequest(
            "Username or email and password are required".into(),
        ));
    }

    let user = auth.login(&body).await?;
    let token = auth.generate_token(&user)?;

    Ok(HttpResponse::Ok().json(AuthResponse { token, user }))
}
