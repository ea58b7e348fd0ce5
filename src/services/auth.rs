use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::auth::{hash_password, verify_password, LoginRequest, RegisterRequest};
use crate::db::UserRepository;
use crate::error::AppError;
use crate::models::User;

/// Claims encoded in an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub user_id: i64,
    pub username: String,
    /// Expiration, unix seconds.
    pub exp: i64,
}

/// Registration, login and token issuance/validation.
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(users: UserRepository, jwt_secret: String) -> Self {
        Self { users, jwt_secret }
    }

    /// Creates a new account.
    ///
    /// The existence pre-check gives a friendly error for the common case;
    /// the UNIQUE constraints on username and email are the authoritative
    /// signal, so a concurrent registration losing the race still comes back
    /// as a conflict rather than a plain database error.
    pub async fn register(&self, input: &RegisterRequest) -> Result<User, AppError> {
        if self.users.exists(&input.username, &input.email).await? {
            return Err(AppError::Conflict("username or email already exists".into()));
        }

        let password_hash = hash_password(&input.password)?;

        let user = self
            .users
            .create(&input.username, &input.email, &password_hash)
            .await
            .map_err(|err| match &err {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    AppError::Conflict("username or email already exists".into())
                }
                _ => AppError::from(err),
            })?;

        Ok(user)
    }

    /// Authenticates by username or email. Failures never reveal whether the
    /// account exists.
    pub async fn login(&self, input: &LoginRequest) -> Result<User, AppError> {
        let user = self
            .users
            .find_by_username_or_email(&input.username, &input.email)
            .await?;

        match user {
            Some(user) => {
                if verify_password(&input.password, &user.password)? {
                    Ok(user)
                } else {
                    Err(AppError::Unauthorized("invalid username or password".into()))
                }
            }
            None => Err(AppError::Unauthorized("invalid username or password".into())),
        }
    }

    /// Issues an HS256 token carrying the user's id and username, expiring
    /// 24 hours from now.
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let expiration = Utc::now() + chrono::Duration::hours(24);
        let claims = Claims {
            user_id: user.id,
            username: user.username.clone(),
            exp: expiration.timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("failed to generate token: {}", e)))
    }

    /// Verifies signature, signing algorithm and expiry, and returns the
    /// user id claim. Expired tokens are distinguishable from malformed ones
    /// internally; callers map both onto 401.
    pub fn validate_token(&self, token: &str) -> Result<i64, AppError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                AppError::Unauthorized("token expired".into())
            }
            _ => AppError::Unauthorized("invalid token".into()),
        })?;

        Ok(data.claims.user_id)
    }
}
