//! SMTP Email Notifier Implementation
//!
//! Delivers verification codes over SMTP using lettre's async
//! transport. Port 465 uses implicit TLS; any other port negotiates
//! STARTTLS. The authentication mechanism follows the configured
//! credential strategy.

use std::time::Duration;

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::{Credentials, Mechanism};
use lettre::transport::smtp::client::{Tls, TlsParameters};
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::{error, info};
use uuid::Uuid;

use ev_core::services::verification::EmailNotifier;

use super::config::{CredentialStrategy, EmailConfig};
use super::template;
use crate::InfrastructureError;

/// SMTP-backed email notifier
pub struct SmtpNotifier {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl SmtpNotifier {
    /// Build the transport from configuration.
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        let secret = match config.credentials {
            CredentialStrategy::Password => config.password.clone(),
            // App passwords are usually pasted with grouping spaces
            CredentialStrategy::AppPassword => config
                .password
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect(),
        };
        let credentials = Credentials::new(config.username.clone(), secret);

        let mechanisms = match config.credentials {
            CredentialStrategy::Password => vec![Mechanism::Plain, Mechanism::Login],
            // Some providers reject PLAIN for app passwords
            CredentialStrategy::AppPassword => vec![Mechanism::Login],
        };

        let tls_parameters = TlsParameters::new(config.smtp_host.clone())
            .map_err(|e| InfrastructureError::Config(format!("TLS setup failed: {}", e)))?;
        let tls = if config.smtp_port == 465 {
            Tls::Wrapper(tls_parameters)
        } else {
            Tls::Required(tls_parameters)
        };

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host)
            .map_err(|e| {
                InfrastructureError::Config(format!(
                    "Invalid SMTP relay '{}': {}",
                    config.smtp_host, e
                ))
            })?
            .port(config.smtp_port)
            .tls(tls)
            .credentials(credentials)
            .authentication(mechanisms)
            .timeout(Some(Duration::from_secs(config.timeout_secs)))
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
        })
    }
}

#[async_trait]
impl EmailNotifier for SmtpNotifier {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        let from = self
            .from_address
            .parse()
            .map_err(|e| format!("Invalid from address '{}': {}", self.from_address, e))?;
        let to = email
            .parse()
            .map_err(|e| format!("Invalid recipient address '{}': {}", email, e))?;

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(template::subject())
            .header(ContentType::TEXT_HTML)
            .body(template::html_body(code))
            .map_err(|e| format!("Failed to build email: {}", e))?;

        match self.transport.send(message).await {
            Ok(_response) => {
                let message_id = format!("smtp_{}", Uuid::new_v4());
                info!(
                    target: "email_notifier",
                    provider = "smtp",
                    email,
                    message_id = %message_id,
                    "Verification email sent"
                );
                Ok(message_id)
            }
            Err(e) => {
                error!(
                    target: "email_notifier",
                    provider = "smtp",
                    email,
                    "SMTP delivery failed: {}", e
                );
                Err(format!("SMTP delivery failed: {}", e))
            }
        }
    }
}
