use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::{SendCodeRequest, SendCodeResponse};
use crate::handlers::error::{sent_message, verification_error_response, Language};
use crate::routes::verification::AppState;

use ev_core::services::verification::EmailNotifier;
use ev_shared::types::response::ErrorResponse;

/// Handler for POST /api/send-verification-code
///
/// Issues a fresh 6-digit code for the address and mails it out.
/// Requesting again for the same address replaces the previous code
/// and resets its attempt counter, subject to the resend cooldown.
///
/// Outside production the response echoes the code so the flow can be
/// exercised without a real mailbox.
pub async fn send_code<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    request: web::Json<SendCodeRequest>,
) -> HttpResponse
where
    N: EmailNotifier + 'static,
{
    let lang = Language::from_request(&req);

    if request.0.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_email",
            match lang {
                Language::English => "Invalid email address format",
                Language::Chinese => "邮箱格式不正确",
            },
        ));
    }

    log::info!("Processing send_code request for {}", request.email);

    match state.verification.issue(&request.email).await {
        Ok(issued) => {
            let echo_code = if state.environment.is_production() {
                None
            } else {
                Some(issued.code)
            };
            HttpResponse::Ok().json(SendCodeResponse {
                success: true,
                message: sent_message(lang),
                code: echo_code,
                resend_after: (issued.next_resend_at - chrono::Utc::now())
                    .num_seconds()
                    .max(0),
            })
        }
        Err(error) => verification_error_response(&error, lang),
    }
}
