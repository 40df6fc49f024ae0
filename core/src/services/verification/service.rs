//! Verification code registry implementation

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Duration, Utc};
use tracing;

use crate::domain::entities::verification_code::VerificationCode;
use crate::errors::{VerificationError, VerificationResult};
use ev_shared::utils::validation::is_valid_email;

use super::config::VerificationServiceConfig;
use super::traits::{Clock, CodeGenerator, EmailNotifier, RandomCodeGenerator, SystemClock};
use super::types::IssuedCode;

/// Authoritative store of live verification codes, keyed by email.
///
/// All state lives behind a single mutex; per-email operations are
/// linearizable through it. The critical sections are pure map work,
/// so the coarse lock is fine for a human-paced login flow. The
/// outbound send always happens after the lock is released, so a slow
/// or failing delivery never stalls other callers.
pub struct VerificationService<N: EmailNotifier> {
    /// Live records, at most one per address
    store: Mutex<HashMap<String, VerificationCode>>,
    /// Outbound delivery capability
    notifier: Arc<N>,
    /// Injected time source
    clock: Arc<dyn Clock>,
    /// Injected code source
    codes: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl<N: EmailNotifier> VerificationService<N> {
    /// Create a service with the production clock and code source.
    pub fn new(notifier: Arc<N>, config: VerificationServiceConfig) -> Self {
        Self::with_parts(
            notifier,
            Arc::new(SystemClock),
            Arc::new(RandomCodeGenerator),
            config,
        )
    }

    /// Create a service with explicit clock and code source.
    pub fn with_parts(
        notifier: Arc<N>,
        clock: Arc<dyn Clock>,
        codes: Arc<dyn CodeGenerator>,
        config: VerificationServiceConfig,
    ) -> Self {
        Self {
            store: Mutex::new(HashMap::new()),
            notifier,
            clock,
            codes,
            config,
        }
    }

    /// Issue a new verification code for an address.
    ///
    /// Rejects syntactically invalid addresses and addresses still
    /// inside the resend cooldown. On success the new record replaces
    /// any prior one for the address (clearing its attempt count and
    /// invalidating the old code), and the code is handed to the
    /// notifier for delivery.
    ///
    /// A delivery failure is reported as `Delivery` but does not roll
    /// back the stored record: the code remains authoritative until it
    /// expires or is consumed.
    pub async fn issue(&self, email: &str) -> VerificationResult<IssuedCode> {
        if !is_valid_email(email) {
            tracing::warn!(email, event = "invalid_email", "Rejected malformed address");
            return Err(VerificationError::InvalidEmail);
        }

        let now = self.clock.now();
        let code;
        let expires_at;
        {
            let mut store = self.lock_store();

            // Opportunistic housekeeping; validate checks expiry itself,
            // so ordering relative to the insert below does not matter.
            Self::sweep_locked(&mut store, now);

            if let Some(existing) = store.get(email) {
                if let Some(remaining_seconds) =
                    existing.cooldown_remaining(now, self.config.resend_cooldown_seconds)
                {
                    tracing::warn!(
                        email,
                        remaining_seconds,
                        event = "resend_cooldown",
                        "Code requested again inside the cooldown window"
                    );
                    return Err(VerificationError::Cooldown { remaining_seconds });
                }
            }

            let record = VerificationCode::issue(
                email,
                self.codes.generate(),
                now,
                self.config.code_ttl_minutes,
            );
            code = record.code.clone();
            expires_at = record.expires_at;
            store.insert(email.to_string(), record);
        }
        // Lock released: the record is committed before any network I/O.

        tracing::info!(email, event = "code_issued", "Issued new verification code");

        let message_id = self
            .notifier
            .send_verification_code(email, &code)
            .await
            .map_err(|message| {
                tracing::error!(
                    email,
                    error = %message,
                    event = "delivery_failed",
                    "Notifier failed to deliver verification code"
                );
                VerificationError::Delivery { message }
            })?;

        Ok(IssuedCode {
            code,
            expires_at,
            next_resend_at: now + Duration::seconds(self.config.resend_cooldown_seconds),
            message_id,
        })
    }

    /// Validate a submitted code for an address.
    ///
    /// Checks run in a fixed order: presence, expiry, attempt ceiling,
    /// then the code itself. A correct code consumes the record; a
    /// wrong code increments the attempt counter. The attempt counter
    /// crosses the ceiling on the failing call, and it is the next
    /// call that reports exhaustion and removes the record.
    pub fn validate(&self, email: &str, submitted: &str) -> VerificationResult<()> {
        let now = self.clock.now();
        let mut store = self.lock_store();

        let (expired, exhausted, matched) = match store.get(email) {
            None => {
                tracing::warn!(email, event = "code_not_found", "No active code");
                return Err(VerificationError::CodeNotFound);
            }
            Some(record) => (
                record.is_expired(now),
                record.is_exhausted(),
                record.matches(submitted),
            ),
        };

        if expired {
            store.remove(email);
            tracing::warn!(email, event = "code_expired", "Code past its validity window");
            return Err(VerificationError::CodeExpired);
        }

        if exhausted {
            store.remove(email);
            tracing::warn!(
                email,
                event = "attempts_exceeded",
                "Attempt ceiling reached; record removed"
            );
            return Err(VerificationError::AttemptsExceeded);
        }

        if !matched {
            let remaining_attempts = store
                .get_mut(email)
                .map(|record| record.register_failure())
                .unwrap_or(0);
            tracing::warn!(
                email,
                remaining_attempts,
                event = "code_mismatch",
                "Wrong code submitted"
            );
            return Err(VerificationError::CodeMismatch { remaining_attempts });
        }

        // Single use: the record is gone even if the same code is
        // submitted again.
        store.remove(email);
        tracing::info!(email, event = "code_verified", "Verification code consumed");
        Ok(())
    }

    /// Remove all expired records. Returns how many were removed.
    ///
    /// Pure housekeeping: validate checks expiry independently, so
    /// sweeping only bounds memory growth.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let mut store = self.lock_store();
        let removed = Self::sweep_locked(&mut store, now);
        if removed > 0 {
            tracing::debug!(removed, event = "sweep", "Removed expired records");
        }
        removed
    }

    /// Whether a record (live or not yet swept) exists for an address.
    pub fn code_exists(&self, email: &str) -> bool {
        self.lock_store().contains_key(email)
    }

    fn sweep_locked(store: &mut HashMap<String, VerificationCode>, now: DateTime<Utc>) -> usize {
        let before = store.len();
        store.retain(|_, record| !record.is_expired(now));
        before - store.len()
    }

    fn lock_store(&self) -> MutexGuard<'_, HashMap<String, VerificationCode>> {
        // A poisoned mutex only means a panic unwound mid-operation;
        // the map itself is still structurally sound.
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
