//! Injected capabilities for the verification service

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::Rng;

/// Outbound notification capability.
///
/// The registry only requires "deliver this code to this address or
/// report failure"; the transport (SMTP, API, console) is an
/// infrastructure concern.
#[async_trait]
pub trait EmailNotifier: Send + Sync {
    /// Deliver a verification code, returning a provider message id.
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String>;
}

#[async_trait]
impl EmailNotifier for Box<dyn EmailNotifier> {
    async fn send_verification_code(&self, email: &str, code: &str) -> Result<String, String> {
        (**self).send_verification_code(email, code).await
    }
}

/// Time source, injectable for deterministic tests
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock implementation used in production
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Verification code source, injectable for deterministic tests
pub trait CodeGenerator: Send + Sync {
    /// Produce a 6-digit zero-padded code.
    fn generate(&self) -> String;
}

/// Uniform draw from [100000, 999999] using the OS CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        let code: u32 = rand::rngs::OsRng.gen_range(100_000..=999_999);
        format!("{:06}", code)
    }
}
