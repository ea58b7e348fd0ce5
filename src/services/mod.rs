//!
//! # Service Layer
//!
//! Per-entity business logic. Services validate business rules, hash
//! passwords, issue and validate tokens, and apply ownership scoping; the
//! actual SQL lives in `crate::db`. Each service is a cheap `Clone` handle
//! shared across workers via `web::Data`.

pub mod auth;
pub mod contact;
pub mod tasks;

pub use auth::{AuthService, Claims};
pub use contact::ContactService;
pub use tasks::TaskService;
