//! egui Native Desktop App Module
//!
//! This module provides a native desktop application using egui/eframe
//! that connects to the Axum backend for authentication.
//!
//! # Architecture
//!
//! The egui_app module is organized into focused submodules:
//!
//! - **`config`** - Configuration management (server URL, token storage)
//! - **`auth`** - Authentication state and HTTP client functions
//! - **`types`** - Shared types and app view enum
//! - **`state`** - Central application state
//! - **`theme`** - Color constants
//! - **`views`** - UI rendering (auth form, user menu, mailbox)
//! - **`main`** - Main application entry point (binary)
//!
//! # Module Structure
//!
//! ```text
//! egui_app/
//! ├── mod.rs       - Module exports and documentation
//! ├── main.rs      - Main application entry point
//! ├── config.rs    - Configuration management
//! ├── auth.rs      - Authentication state and functions
//! ├── types.rs     - Shared types
//! ├── state.rs     - Central application state
//! ├── theme/       - Color constants
//! └── views/       - Auth form, user menu, mailbox view
//! ```

pub mod auth;
pub mod config;
pub mod state;
pub mod theme;
pub mod types;
pub mod views;

// Re-export commonly used types
pub use auth::{get_me, login, register, AuthState};
pub use config::Config;
pub use state::AppState;
pub use types::{AppView, UserInfo};
