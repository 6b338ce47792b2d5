//! Routes Module
//!
//! HTTP route configuration for the backend server.

/// Main router assembly
pub mod router;

/// API endpoint routes
pub mod api_routes;

pub use router::create_router;
