//! Email Notifier Module
//!
//! This module provides the outbound email implementations used to
//! deliver verification codes:
//!
//! - **Mock implementation**: console/tracing output for development
//! - **SMTP support**: production delivery via lettre, with the
//!   credential strategy (regular password vs. provider app password)
//!   selected by configuration
//! - **Template**: the verification email subject and HTML body

pub mod config;
pub mod mock;
pub mod smtp;
pub mod template;

pub use config::{CredentialStrategy, EmailConfig};
pub use mock::MockEmailNotifier;
pub use smtp::SmtpNotifier;

use ev_core::services::verification::EmailNotifier;

/// Create an email notifier based on configuration.
///
/// Unknown providers and SMTP setup failures fall back to the mock
/// implementation so a misconfigured development box still starts.
pub fn create_notifier(config: &EmailConfig) -> Box<dyn EmailNotifier> {
    match config.provider.as_str() {
        "mock" => Box::new(MockEmailNotifier::new()),
        "smtp" => match SmtpNotifier::new(config) {
            Ok(notifier) => Box::new(notifier),
            Err(e) => {
                tracing::error!("Failed to initialize SMTP notifier: {}", e);
                tracing::warn!("Falling back to mock email notifier");
                Box::new(MockEmailNotifier::new())
            }
        },
        other => {
            tracing::warn!(
                "Unknown email provider '{}', using mock implementation",
                other
            );
            Box::new(MockEmailNotifier::new())
        }
    }
}
