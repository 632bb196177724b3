//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all binaries.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
}

impl ServiceConfig {
    /// Load `<PREFIX>_HOST`, `<PREFIX>_PORT` and `<PREFIX>_LOG_LEVEL`,
    /// falling back to `defaults` for anything unset or unparsable.
    pub fn from_env(prefix: &str, defaults: ServiceConfig) -> Self {
        Self {
            host: env::var(format!("{}_HOST", prefix)).unwrap_or(defaults.host),
            port: env::var(format!("{}_PORT", prefix))
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            log_level: env::var(format!("{}_LOG_LEVEL", prefix)).unwrap_or(defaults.log_level),
            service_name: defaults.service_name,
        }
    }

    /// Socket address string for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_prefix_uses_defaults() {
        let config = ServiceConfig::from_env("COMMON_CONFIG_TEST_UNSET", ServiceConfig::default());
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }
}
