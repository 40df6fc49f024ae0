//! # Email Verify Shared
//!
//! Cross-cutting types for the email verification service: configuration
//! structures, common API response shapes, and input validation helpers
//! used by the core, infrastructure, and API layers.

pub mod config;
pub mod types;
pub mod utils;
