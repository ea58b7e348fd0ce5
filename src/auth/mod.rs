pub mod extractors;
pub mod middleware;
pub mod password;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::User;

// Re-export necessary items
pub use middleware::{OptionalAuth, RequireAuth};
pub use password::{hash_password, verify_password};

lazy_static! {
    // Regex for username validation: alphanumeric, underscores, hyphens
    static ref USERNAME_REGEX: regex::Regex = regex::Regex::new(r"^[a-zA-Z0-9_-]+$").unwrap();
}

/// The identity a request is running under.
///
/// Auth middleware attaches `Caller::User` to request extensions when a valid
/// bearer token is present; everything else is `Anonymous`. This replaces any
/// "user id 0 means nobody" convention with an explicit variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Caller {
    Anonymous,
    User(i64),
}

impl Caller {
    /// The owner filter this caller implies: `Some(id)` for authenticated
    /// users, `None` (unscoped) for anonymous requests.
    pub fn user_id(self) -> Option<i64> {
        match self {
            Caller::Anonymous => None,
            Caller::User(id) => Some(id),
        }
    }
}

/// Payload for a new user registration request.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Between 3 and 32 characters; alphanumeric, underscores, hyphens.
    #[validate(
        length(min = 3, max = 32),
        regex(
            path = "USERNAME_REGEX",
            message = "Username must be alphanumeric, underscores, or hyphens"
        )
    )]
    pub username: String,
    #[validate(email)]
    pub email: String,
    /// At least 6 characters.
    #[validate(length(min = 6))]
    pub password: String,
}

/// Payload for a login request. Either `username` or `email` identifies the
/// account; the handler rejects requests where both are empty.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Response after successful registration or login: the signed token plus the
/// user record (password skipped during serialization).
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}
