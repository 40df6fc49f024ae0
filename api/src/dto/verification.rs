use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SendCodeRequest {
    /// Address the code is mailed to; also the registry key
    #[validate(length(min = 3, max = 254))]
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct VerifyCodeRequest {
    /// Address the code was issued for
    #[validate(length(min = 3, max = 254))]
    pub email: String,

    /// Submitted verification code. Only presence is checked here;
    /// a wrong-length guess still counts as a failed attempt against
    /// the stored record.
    #[validate(length(min = 1, max = 64))]
    pub code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendCodeResponse {
    pub success: bool,
    pub message: String,
    /// Echoed outside production so manual testing works without a
    /// real mailbox
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Seconds until the address may request another code
    pub resend_after: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyCodeResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub timestamp: String,
}
