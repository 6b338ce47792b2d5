//! Theme Module
//!
//! Color constants for the desktop client UI.

pub mod colors;
