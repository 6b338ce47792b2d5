//! Middleware Module
//!
//! Request-processing middleware for the backend server.

/// JWT authentication middleware
pub mod auth;

pub use auth::{auth_middleware, AuthUser, AuthenticatedUser};
