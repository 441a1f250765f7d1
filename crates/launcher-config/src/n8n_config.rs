use crate::{ConfigError, ConfigErrorResult, LogLevel};

use serde::Deserialize;

pub const DEFAULT_N8N_HOST: &str = "0.0.0.0";
pub const DEFAULT_N8N_PORT: u16 = 5678;
pub const DEFAULT_N8N_PROTOCOL: &str = "https";
pub const DEFAULT_TIMEZONE: &str = "America/Sao_Paulo";
pub const DEFAULT_NODE_ENV: &str = "production";

const VALID_PROTOCOLS: [&str; 2] = ["http", "https"];

/// Settings handed to n8n through its environment.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct N8nConfig {
    /// Interface n8n binds to
    pub host: String,
    /// Port n8n listens on (platforms route public traffic here)
    pub port: u16,
    /// Protocol n8n advertises in generated URLs
    pub protocol: String,
    /// Externally reachable base URL; resolved from the platform when unset
    pub public_url: Option<String>,
    pub timezone: String,
    pub node_env: String,
    pub log_level: LogLevel,
    pub basic_auth_active: bool,
    pub disable_production_main_process: bool,
    /// Keep registered webhooks across restarts
    pub skip_webhook_deregistration_shutdown: bool,
}

impl Default for N8nConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_N8N_HOST),
            port: DEFAULT_N8N_PORT,
            protocol: String::from(DEFAULT_N8N_PROTOCOL),
            public_url: None,
            timezone: String::from(DEFAULT_TIMEZONE),
            node_env: String::from(DEFAULT_NODE_ENV),
            log_level: LogLevel(log::LevelFilter::Info),
            basic_auth_active: false,
            disable_production_main_process: false,
            skip_webhook_deregistration_shutdown: true,
        }
    }
}

impl N8nConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.port == 0 {
            return Err(ConfigError::n8n("n8n.port must be non-zero"));
        }

        if !VALID_PROTOCOLS.contains(&self.protocol.as_str()) {
            return Err(ConfigError::n8n(format!(
                "n8n.protocol must be one of {:?}, got '{}'",
                VALID_PROTOCOLS, self.protocol
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::n8n("n8n.host cannot be empty"));
        }

        if let Some(ref url) = self.public_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(ConfigError::n8n(format!(
                "n8n.public_url must start with http:// or https://, got '{url}'"
            )));
        }

        Ok(())
    }
}
