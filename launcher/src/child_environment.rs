//! Environment handed to the n8n child process.

use launcher_config::Config;
use log::info;

/// Variables the launcher sets on top of the inherited environment.
///
/// Built once from the immutable [`Config`]; the launcher's own process
/// environment is never mutated to configure n8n.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildEnvironment {
    vars: Vec<(String, String)>,
}

impl ChildEnvironment {
    pub fn from_config(config: &Config) -> Self {
        let n8n = &config.n8n;
        let public_url = config.public_url();

        let vars = vec![
            ("N8N_HOST", n8n.host.clone()),
            ("N8N_PORT", n8n.port.to_string()),
            ("N8N_PROTOCOL", n8n.protocol.clone()),
            // Webhooks and the editor must advertise the public address,
            // not the container's bind address.
            ("WEBHOOK_URL", public_url.clone()),
            ("N8N_EDITOR_BASE_URL", public_url.clone()),
            ("VUE_APP_URL_BASE_API", public_url),
            ("GENERIC_TIMEZONE", n8n.timezone.clone()),
            ("NODE_ENV", n8n.node_env.clone()),
            ("N8N_LOG_LEVEL", n8n.log_level.as_n8n_level().to_string()),
            ("N8N_BASIC_AUTH_ACTIVE", n8n.basic_auth_active.to_string()),
            (
                "N8N_DISABLE_PRODUCTION_MAIN_PROCESS",
                n8n.disable_production_main_process.to_string(),
            ),
            (
                "N8N_SKIP_WEBHOOK_DEREGISTRATION_SHUTDOWN",
                n8n.skip_webhook_deregistration_shutdown.to_string(),
            ),
        ];

        Self {
            vars: vars
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// Log where n8n will listen and which URLs it will advertise.
    pub fn log_summary(&self) {
        let value = |key: &str| self.get(key).unwrap_or("<unset>");

        info!("Starting n8n through the launcher");
        info!("  host: {}", value("N8N_HOST"));
        info!("  port: {}", value("N8N_PORT"));
        info!("  webhook URL: {}", value("WEBHOOK_URL"));
        info!("  editor URL: {}", value("N8N_EDITOR_BASE_URL"));
    }
}
