//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic syntactic email pattern: `local@domain.tld`, no whitespace,
/// exactly one `@`, at least one dot in the domain part.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex must compile"));

/// Check if an email address is syntactically valid.
///
/// This is intentionally a shallow check: the authoritative test of an
/// address is whether a verification code delivered to it comes back.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
