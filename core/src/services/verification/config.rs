//! Configuration for the verification service

use crate::domain::entities::verification_code::{CODE_TTL_MINUTES, RESEND_COOLDOWN_SECONDS};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes before a verification code expires
    pub code_ttl_minutes: i64,
    /// Minimum seconds between code issue requests for the same address
    pub resend_cooldown_seconds: i64,
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: CODE_TTL_MINUTES,
            resend_cooldown_seconds: RESEND_COOLDOWN_SECONDS,
        }
    }
}
