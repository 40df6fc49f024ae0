//! Verification code registry
//!
//! The registry owns all code state and exposes three operations:
//! issue, validate, and sweep. The outbound email transport, the clock,
//! and the code source are injected so the registry itself stays
//! deterministic under test.

pub mod config;
pub mod service;
pub mod traits;
pub mod types;

pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{Clock, CodeGenerator, EmailNotifier, RandomCodeGenerator, SystemClock};
pub use types::IssuedCode;

#[cfg(test)]
mod tests;
