//! Business services

pub mod verification;

pub use verification::{
    Clock, CodeGenerator, EmailNotifier, IssuedCode, RandomCodeGenerator, SystemClock,
    VerificationService, VerificationServiceConfig,
};
