//! Domain-specific error types for the verification code registry.
//!
//! Every variant here is an expected, client-reportable outcome; none
//! should ever be fatal to the process. HTTP status mapping lives in
//! the API layer.

use thiserror::Error;

/// Errors returned by the verification code registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerificationError {
    /// The submitted address does not look like `local@domain.tld`
    #[error("Invalid email address")]
    InvalidEmail,

    /// A code was issued less than the cooldown window ago
    #[error("Please wait {remaining_seconds} seconds before requesting a new code")]
    Cooldown { remaining_seconds: i64 },

    /// No active code for this address
    #[error("No active verification code for this address; request a new one")]
    CodeNotFound,

    /// The code's validity window has passed
    #[error("Verification code has expired; request a new one")]
    CodeExpired,

    /// The attempt ceiling was reached on an earlier call
    #[error("Too many failed attempts; request a new code")]
    AttemptsExceeded,

    /// The submitted code did not match
    #[error("Incorrect verification code; {remaining_attempts} attempt(s) remaining")]
    CodeMismatch { remaining_attempts: i32 },

    /// The notifier failed to hand the message off for delivery.
    ///
    /// The issued code stays authoritative: delivery failure never
    /// rolls back the stored record.
    #[error("Failed to deliver verification email")]
    Delivery { message: String },
}

pub type VerificationResult<T> = Result<T, VerificationError>;
