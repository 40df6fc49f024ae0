//! Environment detection

use serde::{Deserialize, Serialize};

/// Deployment environment
///
/// Controls development conveniences such as echoing the verification
/// code in API responses and permissive CORS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Staging,
    Production,
}

impl Default for Environment {
    fn default() -> Self {
        Environment::Development
    }
}

impl Environment {
    /// Read the environment from the `ENVIRONMENT` variable.
    ///
    /// Unknown or missing values fall back to development.
    pub fn from_env() -> Self {
        match std::env::var("ENVIRONMENT") {
            Ok(value) => Self::parse(&value),
            Err(_) => Environment::Development,
        }
    }

    /// Parse an environment name, case-insensitively.
    pub fn parse(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "staging" => Environment::Staging,
            _ => Environment::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_values() {
        assert_eq!(Environment::parse("production"), Environment::Production);
        assert_eq!(Environment::parse("PROD"), Environment::Production);
        assert_eq!(Environment::parse("staging"), Environment::Staging);
        assert_eq!(Environment::parse("development"), Environment::Development);
    }

    #[test]
    fn test_parse_unknown_defaults_to_development() {
        assert_eq!(Environment::parse("qa"), Environment::Development);
        assert_eq!(Environment::parse(""), Environment::Development);
    }

    #[test]
    fn test_is_production() {
        assert!(Environment::Production.is_production());
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn test_as_str_round_trip() {
        for env in [
            Environment::Development,
            Environment::Staging,
            Environment::Production,
        ] {
            assert_eq!(Environment::parse(env.as_str()), env);
        }
    }
}
