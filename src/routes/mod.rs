pub mod auth;
pub mod contact;
pub mod health;
pub mod tasks;

use actix_web::web;

use crate::auth::OptionalAuth;
use crate::error::AppError;
use crate::services::AuthService;

/// Mounts every handler under the caller's scope (`/api` in production).
///
/// Task routes sit behind `OptionalAuth`: a valid bearer token scopes them to
/// the token's user, anything else runs anonymously. The auth and contact
/// routes are public.
pub fn configure(cfg: &mut web::ServiceConfig, auth_service: AuthService) {
    cfg.service(health::health)
        .service(
            web::scope("/auth")
                .service(auth::register)
                .service(auth::login),
        )
        .service(
            web::scope("/tasks")
                .wrap(OptionalAuth::new(auth_service))
                .app_data(web::PathConfig::default().error_handler(|_, _| {
                    AppError::BadRequest("Invalid task ID".into()).into()
                }))
                .service(tasks::get_tasks)
                .service(tasks::create_task)
                .service(tasks::get_task)
                .service(tasks::update_task)
                .service(tasks::delete_task),
        )
        .service(contact::submit_contact);
}
