use actix_web::{post, web, HttpResponse, Responder};
use serde_json::json;

use crate::error::AppError;
use crate::models::ContactInput;
use crate::services::ContactService;

/// Contact form submission
///
/// The handler rejects outright-empty payloads; the service applies the
/// ordered field rules (presence, email syntax, message length).
#[post("/contact")]
pub async fn submit_contact(
    service: web::Data<ContactService>,
    body: web::Json<ContactInput>,
) -> Result<impl Responder, AppError> {
    if body.name.is_empty() || body.email.is_empty() || body.message.is_empty() {
        return Err(AppError::BadRequest("All fields are required".into()));
    }

    let contact = service.submit(&body).await?;

    Ok(HttpResponse::Created().json(json!({
        "message": "Thank you for your message! We'll get back to you soon.",
        "contact": contact,
    })))
}
