//! The `taskdesk` library crate.
//!
//! Contains the domain models, repository and service layers, authentication
//! mechanisms, route handlers and error handling for the taskdesk backend.
//! The binary (`main.rs`) wires these together: configuration → database →
//! repositories → services → HTTP server.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
