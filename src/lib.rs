//! MoxMail - Main Library
//!
//! MoxMail is a web mail application. This crate contains its
//! authentication stack: an Axum HTTP backend that registers users,
//! verifies credentials, drives the GitHub OAuth flow, issues JWT
//! sessions, and manages roles and permissions, plus a native egui
//! desktop client with the login/register form and user menu.
//!
//! # Module Structure
//!
//! The library is organized into three main modules:
//!
//! - **`shared`** - Types shared between the client and the backend
//!   - Role and permission definitions
//!   - Error types
//!
//! - **`backend`** - Server-side code (only compiled with the `ssr` feature)
//!   - Axum HTTP server with authentication handlers
//!   - Credential verification (bcrypt) and JWT session management
//!   - GitHub OAuth flow
//!   - Role assignment and permission checks backed by PostgreSQL
//!
//! - **`egui_app`** - Native desktop client (egui/eframe)
//!   - Login/register form
//!   - User menu with profile view and sign-out
//!   - HTTP client helpers for the auth endpoints
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and their
//!   server-only dependencies (axum, bcrypt, jsonwebtoken, oauth2).
//!
//! # Usage
//!
//! ## Server
//!
//! ```rust,no_run
//! use moxmail::backend::server::init::create_app;
//!
//! # async fn example() {
//! let app = create_app().await;
//! // Use app with an Axum server
//! # }
//! ```
//!
//! ## Desktop client
//!
//! ```text
//! cargo run --bin moxmail_app
//! ```

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;

/// egui native desktop app
pub mod egui_app;
