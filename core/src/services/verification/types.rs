//! Types for verification service results

use chrono::{DateTime, Utc};

/// Result of successfully issuing a verification code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    /// The generated 6-digit code (echoed to clients only outside production)
    pub code: String,
    /// When the code stops validating
    pub expires_at: DateTime<Utc>,
    /// When the address may request another code
    pub next_resend_at: DateTime<Utc>,
    /// Message id reported by the notifier
    pub message_id: String,
}
