//! Backend Module
//!
//! This module contains all server-side code for the MoxMail auth service.
//! It provides an Axum HTTP server that handles registration, credential
//! login, the GitHub OAuth flow, JWT sessions, and role management backed
//! by PostgreSQL.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Server initialization, application state, configuration
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Users, roles, JWT sessions, OAuth, request handlers
//! - **`middleware`** - JWT authentication middleware
//! - **`error`** - Backend-specific error types
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── main.rs         - Server binary entry point
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── auth/           - Users, roles, sessions, OAuth, handlers
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # State Management
//!
//! The backend uses shared state (`AppState`) holding the optional
//! database pool and the optional GitHub OAuth configuration. Services
//! that fail to initialize are `None` and their endpoints degrade to 503
//! instead of preventing startup.
//!
//! # Error Handling
//!
//! Handlers return `BackendError`, which converts to a JSON `{error}`
//! response with the appropriate HTTP status code.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication, roles, and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

pub use error::BackendError;
pub use server::init::create_app;
