//! Route registration
//!
//! Kept separate from `main` so integration tests can assemble the
//! same service tree around their own state.

use actix_web::{web, HttpResponse};

use crate::routes::verification::{health_check, send_code, verify_code};
use ev_core::services::verification::EmailNotifier;

/// Register every API route on the given config.
///
/// The caller supplies `web::Data<AppState<N>>` separately, which is
/// what lets tests swap in their own notifier.
pub fn configure<N: EmailNotifier + 'static>(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route(
                "/send-verification-code",
                web::post().to(send_code::<N>),
            )
            .route("/verify-code", web::post().to(verify_code::<N>))
            .route("/health", web::get().to(health_check)),
    )
    // Bare /health as well, for probes that are not configured with
    // the API prefix.
    .route("/health", web::get().to(health_check));
}

/// JSON 404 for anything outside the API surface
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
