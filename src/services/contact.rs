use crate::db::ContactRepository;
use crate::error::AppError;
use crate::models::{Contact, ContactInput};

/// Minimum message length, counted in characters after trimming.
const MIN_MESSAGE_CHARS: usize = 10;

/// Validates and stores contact-form submissions.
#[derive(Clone)]
pub struct ContactService {
    contacts: ContactRepository,
}

impl ContactService {
    pub fn new(contacts: ContactRepository) -> Self {
        Self { contacts }
    }

    pub async fn submit(&self, input: &ContactInput) -> Result<Contact, AppError> {
        validate_contact_input(input)?;

        Ok(self
            .contacts
            .create(&input.name, &input.email, &input.message)
            .await?)
    }
}

/// Checks run in a fixed order and the first broken rule wins, so the client
/// always gets one specific message per failure.
fn validate_contact_input(input: &ContactInput) -> Result<(), AppError> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("name is required".into()));
    }
    if input.email.trim().is_empty() {
        return Err(AppError::BadRequest("email is required".into()));
    }
    if input.message.trim().is_empty() {
        return Err(AppError::BadRequest("message is required".into()));
    }
    if !validator::validate_email(input.email.trim()) {
        return Err(AppError::BadRequest("invalid email format".into()));
    }
    if input.message.trim().chars().count() < MIN_MESSAGE_CHARS {
        return Err(AppError::BadRequest(
            "message must be at least 10 characters long".into(),
        ));
    }
    Ok(())
}
