//! Authentication Module
//!
//! This module handles user registration, credential verification, the
//! GitHub OAuth flow, JWT session management, and role assignment.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── roles.rs        - Role assignment and permission checks
//! ├── sessions.rs     - JWT token management
//! ├── validation.rs   - Username/password validation rules
//! ├── oauth.rs        - GitHub OAuth flow
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Credential login handler
//!     ├── me.rs       - Session read handler
//!     ├── github.rs   - OAuth entry point and callback
//!     └── admin.rs    - Permission-guarded user listing
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → validated → user row created
//! 2. **Login**: credentials verified → sign-in role hook → JWT returned
//! 3. **OAuth**: GitHub redirect → callback upserts user → role hook → JWT
//! 4. **Session read**: JWT verified → roles loaded (assigned inline if
//!    missing) → user info with role names returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Invalid credentials return one generic 401 message (no enumeration)
//! - JWT tokens expire after 30 days
//! - Role-assignment failures are logged and never block sign-in

/// User data model and database operations
pub mod users;

/// Role assignment and permission checks
pub mod roles;

/// JWT token generation and validation
pub mod sessions;

/// Username and password validation rules
pub mod validation;

/// GitHub OAuth flow
pub mod oauth;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::types::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
pub use handlers::{github_authorize, github_callback, list_users, login, me, register};
pub use roles::check_permission;
