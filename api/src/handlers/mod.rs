pub mod error;

pub use error::{verification_error_response, Language};
