pub mod verification;

pub use verification::{
    HealthResponse, SendCodeRequest, SendCodeResponse, VerifyCodeRequest, VerifyCodeResponse,
};
