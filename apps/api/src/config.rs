//! API configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable              | Default   |
//! |-----------------------|-----------|
//! | `RECEIPTS_BIND_ADDR`  | `0.0.0.0` |
//! | `RECEIPTS_PORT`       | `8080`    |
//! | `RECEIPTS_VALIDATE`   | `true`    |
//! | `RECEIPTS_LOG_FILTER` | `info`    |

use std::env;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0)
    pub bind_addr: String,

    /// HTTP port
    pub port: u16,

    /// Run the semantic checks (calendar, clock, total) on submitted receipts
    pub validate: bool,

    /// `tracing` filter used when `RUST_LOG` is not set
    pub log_filter: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            validate: true,
            log_filter: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ApiConfig::default();

        Ok(ApiConfig {
            bind_addr: lookup("RECEIPTS_BIND_ADDR").unwrap_or(defaults.bind_addr),

            port: match lookup("RECEIPTS_PORT") {
                Some(raw) => raw
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPTS_PORT".to_string()))?,
                None => defaults.port,
            },

            validate: match lookup("RECEIPTS_VALIDATE") {
                Some(raw) => raw
                    .trim()
                    .to_ascii_lowercase()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("RECEIPTS_VALIDATE".to_string()))?,
                None => defaults.validate,
            },

            log_filter: lookup("RECEIPTS_LOG_FILTER").unwrap_or(defaults.log_filter),
        })
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.validate);
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("RECEIPTS_BIND_ADDR", "127.0.0.1"),
            ("RECEIPTS_PORT", "9000"),
            ("RECEIPTS_VALIDATE", "FALSE"),
            ("RECEIPTS_LOG_FILTER", "receipt_api=debug"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert!(!config.validate);
        assert_eq!(config.log_filter, "receipt_api=debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = load(&[("RECEIPTS_PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref name) if name == "RECEIPTS_PORT"));

        let err = load(&[("RECEIPTS_PORT", "70000")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));

        let err = load(&[("RECEIPTS_VALIDATE", "yes")]).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for RECEIPTS_VALIDATE");
    }
}
