//! Unified API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Unified error response structure for API responses
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Additional error details if available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
    /// Timestamp when the error occurred
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
            details: None,
            timestamp: Utc::now(),
        }
    }

    /// Add a single detail to the error response
    pub fn with_detail(mut self, key: impl ToString, value: serde_json::Value) -> Self {
        let mut details = self.details.unwrap_or_default();
        details.insert(key.to_string(), value);
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_new() {
        let response = ErrorResponse::new("INVALID_EMAIL", "Invalid email address");
        assert_eq!(response.error, "INVALID_EMAIL");
        assert_eq!(response.message, "Invalid email address");
        assert!(response.details.is_none());
    }

    #[test]
    fn test_error_response_with_detail() {
        let response = ErrorResponse::new("COOLDOWN", "Please wait")
            .with_detail("remaining_seconds", serde_json::json!(42));

        let details = response.details.unwrap();
        assert_eq!(details["remaining_seconds"], 42);
    }

    #[test]
    fn test_error_response_serialization_skips_empty_details() {
        let response = ErrorResponse::new("NOT_FOUND", "No active code");
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("details"));
    }
}
