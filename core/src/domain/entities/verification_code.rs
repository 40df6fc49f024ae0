//! Verification code entity for email-based registration gating.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Maximum number of failed validation attempts before a code is dead
pub const MAX_ATTEMPTS: i32 = 5;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Validity window for verification codes (10 minutes)
pub const CODE_TTL_MINUTES: i64 = 10;

/// Minimum seconds between code issue requests for the same address
pub const RESEND_COOLDOWN_SECONDS: i64 = 60;

/// One-time verification code bound to an email address.
///
/// At most one live record exists per address; issuing a new code
/// replaces the previous record and resets the attempt counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Email address the code was issued for, exactly as received
    pub email: String,

    /// The 6-digit zero-padded code
    pub code: String,

    /// Timestamp when the code was issued
    pub issued_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,

    /// Number of failed validation attempts against this code
    pub attempts: i32,
}

impl VerificationCode {
    /// Create a record for a freshly issued code.
    ///
    /// The caller supplies the code and the current time so that code
    /// generation and clock access stay injectable for testing.
    pub fn issue(
        email: impl Into<String>,
        code: impl Into<String>,
        now: DateTime<Utc>,
        ttl_minutes: i64,
    ) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            issued_at: now,
            expires_at: now + Duration::minutes(ttl_minutes),
            attempts: 0,
        }
    }

    /// Whether the code's validity window has passed.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Whether the attempt ceiling has been reached.
    ///
    /// An exhausted record no longer validates but is only removed by
    /// the next validation call or a re-issue.
    pub fn is_exhausted(&self) -> bool {
        self.attempts >= MAX_ATTEMPTS
    }

    /// Constant-time comparison of a submitted code against this one.
    pub fn matches(&self, submitted: &str) -> bool {
        if self.code.len() != submitted.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Record a failed validation attempt and return the number of
    /// attempts left before the record is exhausted.
    pub fn register_failure(&mut self) -> i32 {
        self.attempts += 1;
        self.remaining_attempts()
    }

    /// Attempts left before the ceiling (0 if already at or past it).
    pub fn remaining_attempts(&self) -> i32 {
        (MAX_ATTEMPTS - self.attempts).max(0)
    }

    /// Seconds left in the resend cooldown window, if still inside it.
    ///
    /// Computed from `issued_at` directly rather than back-derived from
    /// `expires_at`, so the value stays correct if the expiry window
    /// ever changes. Rounded up so a caller never retries too early.
    pub fn cooldown_remaining(&self, now: DateTime<Utc>, cooldown_seconds: i64) -> Option<i64> {
        let elapsed_ms = (now - self.issued_at).num_milliseconds();
        let window_ms = cooldown_seconds * 1000;
        if elapsed_ms < window_ms {
            Some((window_ms - elapsed_ms + 999) / 1000)
        } else {
            None
        }
    }

    /// Time remaining until expiry, or zero if already expired.
    pub fn time_until_expiry(&self, now: DateTime<Utc>) -> Duration {
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}
