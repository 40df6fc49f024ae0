//! Server configuration module

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Worker threads (0 = number of CPU cores)
    #[serde(default)]
    pub workers: usize,

    /// Keep-alive timeout in seconds
    #[serde(default = "default_keep_alive")]
    pub keep_alive: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 3001,
            workers: 0, // Use all CPU cores
            keep_alive: default_keep_alive(),
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Read host and port from `SERVER_HOST` / `SERVER_PORT`.
    ///
    /// Missing variables fall back to the defaults; a malformed port is
    /// rejected rather than silently replaced.
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();
        let host = std::env::var("SERVER_HOST").unwrap_or(defaults.host);
        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| format!("SERVER_PORT must be a valid port number, got '{}'", raw))?,
            Err(_) => defaults.port,
        };
        Ok(Self {
            host,
            port,
            ..defaults
        })
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_keep_alive() -> u64 {
    75 // 75 seconds
}
