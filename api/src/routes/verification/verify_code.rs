use actix_web::{web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::dto::{VerifyCodeRequest, VerifyCodeResponse};
use crate::handlers::error::{verification_error_response, verified_message, Language};
use crate::routes::verification::AppState;

use ev_core::services::verification::EmailNotifier;
use ev_shared::types::response::ErrorResponse;

/// Handler for POST /api/verify-code
///
/// Checks the submitted code against the live record for the address.
/// A correct code consumes the record; any failure (missing, expired,
/// exhausted, or wrong code) comes back as 400 with a descriptive
/// error body.
pub async fn verify_code<N>(
    req: HttpRequest,
    state: web::Data<AppState<N>>,
    request: web::Json<VerifyCodeRequest>,
) -> HttpResponse
where
    N: EmailNotifier + 'static,
{
    let lang = Language::from_request(&req);

    if request.0.validate().is_err() {
        return HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_request",
            match lang {
                Language::English => "Email and verification code are required",
                Language::Chinese => "请提供邮箱和验证码",
            },
        ));
    }

    log::info!("Processing verify_code request for {}", request.email);

    match state.verification.validate(&request.email, &request.code) {
        Ok(()) => HttpResponse::Ok().json(VerifyCodeResponse {
            success: true,
            message: verified_message(lang),
        }),
        Err(error) => verification_error_response(&error, lang),
    }
}
