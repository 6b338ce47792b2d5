//! Backend Error Types
//!
//! Error types used by the HTTP handlers, plus their conversion to HTTP
//! responses.

/// Error type definitions
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::BackendError;
