//! HTTP server module
//!
//! This module handles HTTP request routing and handling:
//! - Axum router with the three video endpoints
//! - Request handlers and error-to-status mapping
//! - API docs, health, and version endpoints
//! - CORS middleware

pub mod handlers;
pub mod routes;

pub use routes::create_router;
