//! Server Module
//!
//! Server initialization, configuration loading, and application state.

/// Configuration loading (database pool, OAuth settings)
pub mod config;

/// Server initialization
pub mod init;

/// Application state
pub mod state;

pub use init::create_app;
pub use state::AppState;
