use actix_web::{get, web, HttpResponse, Responder};
use chrono::Utc;
use serde_json::json;

use crate::config::Config;

/// Health check endpoint
///
/// Returns the current status of the API, server time and environment name.
#[get("/health")]
pub async fn health(config: web::Data<Config>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "time": Utc::now().to_rfc3339(),
        "environment": config.environment,
    }))
}
