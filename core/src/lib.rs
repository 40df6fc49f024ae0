//! # Email Verify Core
//!
//! Core domain layer for the email verification service. This crate
//! contains the verification code entity, the registry service that
//! issues, validates, and sweeps one-time codes, the notifier and clock
//! abstractions, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
