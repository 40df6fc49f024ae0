//! Email delivery configuration

use serde::{Deserialize, Serialize};

use crate::InfrastructureError;

/// How the SMTP secret is interpreted when authenticating.
///
/// One transport covers both regular account passwords and
/// provider-issued app passwords; the strategy is chosen by
/// configuration rather than by running a separate server per
/// credential kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CredentialStrategy {
    /// Regular account password, PLAIN or LOGIN negotiation
    Password,
    /// Provider-issued app password, LOGIN only, whitespace stripped
    /// (app passwords are typically copied with grouping spaces)
    AppPassword,
}

impl CredentialStrategy {
    pub fn parse(value: &str) -> Result<Self, InfrastructureError> {
        match value.to_ascii_lowercase().as_str() {
            "password" => Ok(CredentialStrategy::Password),
            "app-password" | "app_password" => Ok(CredentialStrategy::AppPassword),
            other => Err(InfrastructureError::Config(format!(
                "Unknown credential strategy '{}', expected 'password' or 'app-password'",
                other
            ))),
        }
    }
}

/// Email notifier configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// Notifier implementation: "mock" or "smtp"
    pub provider: String,
    /// SMTP relay host
    pub smtp_host: String,
    /// SMTP port (465 = implicit TLS, otherwise STARTTLS)
    pub smtp_port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP secret, interpreted per the credential strategy
    pub password: String,
    /// Credential strategy for the secret
    pub credentials: CredentialStrategy,
    /// From address on outgoing mail (defaults to the username)
    pub from_address: String,
    /// Timeout for the SMTP transaction in seconds
    pub timeout_secs: u64,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 465,
            username: String::new(),
            password: String::new(),
            credentials: CredentialStrategy::AppPassword,
            from_address: String::new(),
            timeout_secs: 20,
        }
    }
}

impl EmailConfig {
    /// Build configuration from environment variables.
    ///
    /// `EMAIL_PROVIDER` selects the implementation (default "mock").
    /// SMTP settings are only required when the provider is "smtp".
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let defaults = Self::default();
        let provider =
            std::env::var("EMAIL_PROVIDER").unwrap_or_else(|_| defaults.provider.clone());

        let username = std::env::var("SMTP_USERNAME").unwrap_or_default();
        let password = std::env::var("SMTP_PASSWORD").unwrap_or_default();

        if provider == "smtp" {
            if username.is_empty() {
                return Err(InfrastructureError::Config(
                    "SMTP_USERNAME must be set when EMAIL_PROVIDER=smtp".to_string(),
                ));
            }
            if password.is_empty() {
                return Err(InfrastructureError::Config(
                    "SMTP_PASSWORD must be set when EMAIL_PROVIDER=smtp".to_string(),
                ));
            }
        }

        let smtp_port = match std::env::var("SMTP_PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| {
                InfrastructureError::Config(format!("SMTP_PORT must be a port number, got '{}'", raw))
            })?,
            Err(_) => defaults.smtp_port,
        };

        let credentials = match std::env::var("SMTP_CREDENTIALS") {
            Ok(raw) => CredentialStrategy::parse(&raw)?,
            Err(_) => defaults.credentials,
        };

        let from_address = std::env::var("SMTP_FROM").unwrap_or_else(|_| username.clone());

        Ok(Self {
            provider,
            smtp_host: std::env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port,
            username,
            password,
            credentials,
            from_address,
            timeout_secs: defaults.timeout_secs,
        })
    }
}
