//! Configuration module
//!
//! Configuration is environment-variable driven. This module holds the
//! typed structures shared across layers:
//! - `environment` - Environment detection (development/staging/production)
//! - `server` - HTTP server bind configuration

pub mod environment;
pub mod server;

// Re-export commonly used types
pub use environment::Environment;
pub use server::ServerConfig;
