//! Verification endpoints
//!
//! - `POST /api/send-verification-code`
//! - `POST /api/verify-code`
//! - `GET /api/health`

pub mod health;
pub mod send_code;
pub mod verify_code;

pub use health::health_check;
pub use send_code::send_code;
pub use verify_code::verify_code;

use std::sync::Arc;

use ev_core::services::verification::{EmailNotifier, VerificationService};
use ev_shared::config::Environment;

/// Shared state handed to every handler
pub struct AppState<N: EmailNotifier> {
    pub verification: Arc<VerificationService<N>>,
    pub environment: Environment,
}
