//! Authentication Handlers Module
//!
//! This module contains all HTTP handlers for the authentication
//! endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - Credential authentication
//! - **`me`** - GET /api/auth/me - Session read with role enrichment
//! - **`github_authorize`** - GET /api/auth/github - OAuth entry point
//! - **`github_callback`** - GET /api/auth/github/callback - OAuth completion
//! - **`list_users`** - GET /api/admin/users - Permission-guarded listing

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Session read handler
pub mod me;

/// GitHub OAuth handlers
pub mod github;

/// Admin handlers
pub mod admin;

pub use types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

pub use admin::list_users;
pub use github::{github_authorize, github_callback};
pub use login::login;
pub use me::me;
pub use register::register;
