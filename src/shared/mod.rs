//! Shared Types Module
//!
//! Types used by both the backend server and the egui client:
//! role and permission definitions, and common error types.

/// Roles and the permission lookup table
pub mod roles;

/// Shared error types
pub mod error;

pub use error::SharedError;
pub use roles::{has_permission, Permission, Role};
