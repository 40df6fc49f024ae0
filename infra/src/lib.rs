//! # Email Verify Infrastructure
//!
//! Infrastructure layer for the email verification service: concrete
//! `EmailNotifier` implementations (SMTP via lettre, console mock) and
//! their configuration.

pub mod email;

use thiserror::Error;

/// Infrastructure-level errors
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Email delivery error: {0}")]
    Email(String),
}
