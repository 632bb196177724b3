//! Gateway configuration.

use account_service_lib::config::AccountServiceConfig;
use common::ServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Bind address and log level
    pub server: ServiceConfig,
    /// Settings of the embedded account service
    pub account: AccountServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from `GATEWAY_*` and `ACCOUNT_*` environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServiceConfig::from_env("GATEWAY", Self::default_server()),
            account: AccountServiceConfig::from_env(),
        }
    }

    /// Override host and port given on the command line
    pub fn with_overrides(mut self, host: Option<String>, port: Option<u16>) -> Self {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port;
        }
        self
    }

    fn default_server() -> ServiceConfig {
        ServiceConfig {
            service_name: "gateway".to_string(),
            ..ServiceConfig::default()
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: Self::default_server(),
            account: AccountServiceConfig::default(),
        }
    }
}
