use crate::{ConfigError, ConfigErrorResult, MIN_PORT};

use serde::Deserialize;

pub const DEFAULT_HEALTH_HOST: &str = "0.0.0.0";
pub const DEFAULT_HEALTH_PORT: u16 = 5679;
pub const DEFAULT_HEALTH_PATH: &str = "/render-health";
pub const DEFAULT_SERVICE_NAME: &str = "n8n-launcher";

/// Launcher-level liveness listener, separate from n8n's own port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HealthEndpointConfig {
    pub enabled: bool,
    pub host: String,
    /// 0 lets the OS choose
    pub port: u16,
    pub path: String,
    /// Reported as `service` in the response body
    pub service_name: String,
}

impl Default for HealthEndpointConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            host: String::from(DEFAULT_HEALTH_HOST),
            port: DEFAULT_HEALTH_PORT,
            path: String::from(DEFAULT_HEALTH_PATH),
            service_name: String::from(DEFAULT_SERVICE_NAME),
        }
    }
}

impl HealthEndpointConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::health_endpoint(format!(
                "health_endpoint.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if !self.path.starts_with('/') {
            return Err(ConfigError::health_endpoint(format!(
                "health_endpoint.path must start with '/', got '{}'",
                self.path
            )));
        }

        if self.service_name.trim().is_empty() {
            return Err(ConfigError::health_endpoint(
                "health_endpoint.service_name cannot be empty",
            ));
        }

        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
