//! Mock Email Notifier Implementation
//!
//! A mock notifier for development and testing. It logs the code to
//! the console instead of delivering anything, which doubles as the
//! way to read codes when no SMTP credentials are configured.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};
use uuid::Uuid;

use ev_core::services::verification::EmailNotifier;

/// Mock email notifier for development and testing
#[derive(Clone)]
pub struct MockEmailNotifier {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockEmailNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock notifier with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockEmailNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailNotifier for MockEmailNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        if self.simulate_failure {
            warn!(email, "Mock notifier simulating delivery failure");
            return Err("Simulated email delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK EMAIL NOTIFIER - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", email);
            println!("Message ID: {}", message_id);
            println!("Verification code: {}", code);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            target: "email_notifier",
            provider = "mock",
            email,
            message_id = %message_id,
            "Verification email sent (mock)"
        );

        Ok(message_id)
    }
}
