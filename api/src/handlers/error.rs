//! Error translation for the HTTP boundary.
//!
//! Maps domain errors to HTTP responses with localized messages.
//! Message language follows the Accept-Language header, defaulting
//! to English.

use actix_web::{http::header, HttpRequest, HttpResponse};
use ev_core::errors::VerificationError;
use ev_shared::types::response::ErrorResponse;

/// Language preference for error messages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// Detect language preference from the Accept-Language header.
    ///
    /// Example header: "zh-CN,zh;q=0.9,en-US;q=0.8,en;q=0.7"
    pub fn from_request(req: &HttpRequest) -> Self {
        if let Some(header_value) = req.headers().get(header::ACCEPT_LANGUAGE) {
            if let Ok(header_str) = header_value.to_str() {
                let mut preferred = Language::English;
                let mut max_quality = 0.0_f32;

                for entry in header_str.split(',') {
                    let parts: Vec<&str> = entry.trim().split(';').collect();
                    let lang = parts[0].to_lowercase();
                    let quality = parts
                        .get(1)
                        .and_then(|q| q.trim_start_matches("q=").parse::<f32>().ok())
                        .unwrap_or(1.0);

                    if lang.starts_with("zh") && quality > max_quality {
                        preferred = Language::Chinese;
                        max_quality = quality;
                    } else if lang.starts_with("en") && quality > max_quality {
                        preferred = Language::English;
                        max_quality = quality;
                    }
                }

                return preferred;
            }
        }

        Language::English
    }
}

fn localized(lang: Language, en: &str, zh: &str) -> String {
    match lang {
        Language::English => en.to_string(),
        Language::Chinese => zh.to_string(),
    }
}

/// Localized success message for a sent code
pub fn sent_message(lang: Language) -> String {
    localized(
        lang,
        "Verification code sent, please check your inbox",
        "验证码已发送，请查收邮箱",
    )
}

/// Localized success message for a verified code
pub fn verified_message(lang: Language) -> String {
    localized(lang, "Email verified successfully", "邮箱验证成功")
}

/// Convert a domain error into the appropriate HTTP response.
///
/// Cooldown maps to 429 and delivery failure to 500; every
/// verification-state failure (missing, expired, exhausted, wrong
/// code) is a plain 400 so callers cannot distinguish probing from
/// the status code alone.
pub fn verification_error_response(error: &VerificationError, lang: Language) -> HttpResponse {
    log::warn!("Verification error: {:?}", error);

    match error {
        VerificationError::InvalidEmail => HttpResponse::BadRequest().json(ErrorResponse::new(
            "invalid_email".to_string(),
            localized(lang, "Invalid email address format", "邮箱格式不正确"),
        )),
        VerificationError::Cooldown { remaining_seconds } => {
            HttpResponse::TooManyRequests().json(
                ErrorResponse::new(
                    "resend_cooldown".to_string(),
                    localized(
                        lang,
                        &format!(
                            "Too many requests. Please try again in {} seconds",
                            remaining_seconds
                        ),
                        &format!("请求过于频繁，请{}秒后重试", remaining_seconds),
                    ),
                )
                .with_detail("retry_after_seconds", serde_json::json!(remaining_seconds)),
            )
        }
        VerificationError::CodeNotFound => HttpResponse::BadRequest().json(ErrorResponse::new(
            "code_not_found".to_string(),
            localized(
                lang,
                "No verification code found. Please request one first",
                "验证码不存在，请先获取验证码",
            ),
        )),
        VerificationError::CodeExpired => HttpResponse::BadRequest().json(ErrorResponse::new(
            "code_expired".to_string(),
            localized(
                lang,
                "Verification code has expired. Please request a new one",
                "验证码已过期，请重新获取",
            ),
        )),
        VerificationError::AttemptsExceeded => HttpResponse::BadRequest().json(ErrorResponse::new(
            "attempts_exceeded".to_string(),
            localized(
                lang,
                "Too many failed attempts. Please request a new code",
                "尝试次数过多，请重新获取验证码",
            ),
        )),
        VerificationError::CodeMismatch { remaining_attempts } => {
            HttpResponse::BadRequest().json(
                ErrorResponse::new(
                    "code_mismatch".to_string(),
                    localized(
                        lang,
                        &format!(
                            "Incorrect verification code. {} attempts remaining",
                            remaining_attempts
                        ),
                        &format!("验证码错误，还剩{}次机会", remaining_attempts),
                    ),
                )
                .with_detail("remaining_attempts", serde_json::json!(remaining_attempts)),
            )
        }
        VerificationError::Delivery { message } => {
            log::error!("Email delivery failed: {}", message);
            HttpResponse::InternalServerError().json(ErrorResponse::new(
                "email_delivery_failed".to_string(),
                localized(
                    lang,
                    "Failed to send verification email. Please try again later",
                    "邮件发送失败，请稍后重试",
                ),
            ))
        }
    }
}
