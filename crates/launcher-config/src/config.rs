use crate::{
    ChildConfig, ConfigError, ConfigErrorResult, DEFAULT_CONFIG_FILENAME, HealthEndpointConfig,
    KeepAliveConfig, LoggingConfig, N8nConfig, Platform, SupervisorConfig, platform,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

/// Immutable launcher configuration.
///
/// Built once at startup and passed by reference. The child's environment
/// is derived from this record; the launcher never mutates its own process
/// environment to configure n8n.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub n8n: N8nConfig,
    pub child: ChildConfig,
    pub supervisor: SupervisorConfig,
    pub keep_alive: KeepAliveConfig,
    pub health_endpoint: HealthEndpointConfig,
    pub logging: LoggingConfig,
    /// Detected at load time, never read from TOML
    #[serde(skip)]
    pub platform: Platform,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. LAUNCHER_CONFIG_FILE env var, else ./launcher.toml if it exists
    /// 2. Defaults when no file is found
    /// 3. PORT and LAUNCHER_* environment variable overrides
    /// 4. Platform detection and public URL resolution
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let mut config = match Self::config_file()? {
            Some(path) => Self::load_toml(&path)?,
            None => Config::default(),
        };

        config.apply_env_overrides();
        config.resolve_platform_with(|key| std::env::var(key).ok());

        Ok(config)
    }

    /// Load and parse TOML file with detailed error context.
    pub fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Locate the config file.
    /// Priority: LAUNCHER_CONFIG_FILE (must exist) > ./launcher.toml (optional)
    pub fn config_file() -> ConfigErrorResult<Option<PathBuf>> {
        if let Ok(file) = std::env::var("LAUNCHER_CONFIG_FILE") {
            let path = PathBuf::from(file);
            if !path.exists() {
                return Err(ConfigError::config(format!(
                    "LAUNCHER_CONFIG_FILE points to missing file {}",
                    path.display()
                )));
            }
            return Ok(Some(path));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        let default_path = cwd.join(DEFAULT_CONFIG_FILENAME);

        Ok(default_path.exists().then_some(default_path))
    }

    /// Detect the platform and fill in `n8n.public_url` when not set
    /// explicitly.
    pub fn resolve_platform_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.platform = Platform::detect_with(&lookup);

        self.n8n.public_url = match self.n8n.public_url.take() {
            Some(url) => Some(platform::normalize_url(&url)),
            None => self.platform.discover_public_url_with(&lookup),
        };
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.n8n.validate()?;
        self.child.validate()?;
        self.supervisor.validate()?;
        self.keep_alive.validate()?;
        self.health_endpoint.validate()?;

        if self.health_endpoint.enabled && self.health_endpoint.port == self.n8n.port {
            return Err(ConfigError::config(format!(
                "health_endpoint.port and n8n.port must differ, both are {}",
                self.n8n.port
            )));
        }

        Ok(())
    }

    /// Externally reachable base URL used for webhooks, the editor and the
    /// keep-alive check.
    pub fn public_url(&self) -> String {
        self.n8n
            .public_url
            .clone()
            .unwrap_or_else(|| format!("http://localhost:{}", self.n8n.port))
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  platform: {}", self.platform);
        info!(
            "  n8n: {}://{}:{} (public {})",
            self.n8n.protocol,
            self.n8n.host,
            self.n8n.port,
            self.public_url()
        );
        info!("  child: {}", self.child.command_line());
        info!(
            "  supervisor: restart_delay={}s, keep_alive_arm_delay={}s",
            self.supervisor.restart_delay_secs, self.supervisor.keep_alive_arm_delay_secs
        );

        if self.keep_alive.enabled {
            info!(
                "  keep_alive: every {}s after {}s warm-up, timeout={}s, path={}",
                self.keep_alive.interval_secs,
                self.keep_alive.warmup_secs,
                self.keep_alive.timeout_secs,
                self.keep_alive.probe_path
            );
        } else {
            info!("  keep_alive: disabled");
        }

        if self.health_endpoint.enabled {
            info!(
                "  health_endpoint: {}{}",
                self.health_endpoint.bind_addr(),
                self.health_endpoint.path
            );
        } else {
            info!("  health_endpoint: disabled");
        }

        info!(
            "  logging: {} (colored: {})",
            self.logging.level, self.logging.colored
        );
    }

    fn apply_env_overrides(&mut self) {
        // n8n (PORT is set by the platform, LAUNCHER_N8N_PORT wins over it)
        Self::apply_env_parse("PORT", &mut self.n8n.port);
        Self::apply_env_parse("LAUNCHER_N8N_PORT", &mut self.n8n.port);
        Self::apply_env_string("LAUNCHER_N8N_HOST", &mut self.n8n.host);
        Self::apply_env_string("LAUNCHER_N8N_PROTOCOL", &mut self.n8n.protocol);
        Self::apply_env_option_string("LAUNCHER_PUBLIC_URL", &mut self.n8n.public_url);
        Self::apply_env_string("LAUNCHER_TIMEZONE", &mut self.n8n.timezone);
        Self::apply_env_string("LAUNCHER_NODE_ENV", &mut self.n8n.node_env);
        Self::apply_env_parse("LAUNCHER_N8N_LOG_LEVEL", &mut self.n8n.log_level);
        Self::apply_env_bool(
            "LAUNCHER_BASIC_AUTH_ACTIVE",
            &mut self.n8n.basic_auth_active,
        );

        // Child
        if let Ok(val) = std::env::var("LAUNCHER_CHILD_INTERPRETER") {
            self.child.interpreter = (!val.trim().is_empty()).then_some(val);
        }
        Self::apply_env_string("LAUNCHER_CHILD_EXECUTABLE", &mut self.child.executable);
        if let Ok(val) = std::env::var("LAUNCHER_CHILD_ARGS") {
            self.child.args = val.split_whitespace().map(String::from).collect();
        }
        Self::apply_env_option_string(
            "LAUNCHER_CHILD_WORKING_DIR",
            &mut self.child.working_dir,
        );

        // Supervisor
        Self::apply_env_parse(
            "LAUNCHER_RESTART_DELAY_SECS",
            &mut self.supervisor.restart_delay_secs,
        );
        Self::apply_env_parse(
            "LAUNCHER_KEEP_ALIVE_ARM_DELAY_SECS",
            &mut self.supervisor.keep_alive_arm_delay_secs,
        );

        // Keep-alive
        Self::apply_env_bool("LAUNCHER_KEEP_ALIVE_ENABLED", &mut self.keep_alive.enabled);
        Self::apply_env_parse(
            "LAUNCHER_KEEP_ALIVE_INTERVAL_SECS",
            &mut self.keep_alive.interval_secs,
        );
        Self::apply_env_parse(
            "LAUNCHER_KEEP_ALIVE_WARMUP_SECS",
            &mut self.keep_alive.warmup_secs,
        );
        Self::apply_env_parse(
            "LAUNCHER_KEEP_ALIVE_TIMEOUT_SECS",
            &mut self.keep_alive.timeout_secs,
        );
        Self::apply_env_string(
            "LAUNCHER_KEEP_ALIVE_PROBE_PATH",
            &mut self.keep_alive.probe_path,
        );

        // Health endpoint
        Self::apply_env_bool("LAUNCHER_HEALTH_ENABLED", &mut self.health_endpoint.enabled);
        Self::apply_env_string("LAUNCHER_HEALTH_HOST", &mut self.health_endpoint.host);
        Self::apply_env_parse("LAUNCHER_HEALTH_PORT", &mut self.health_endpoint.port);
        Self::apply_env_string("LAUNCHER_HEALTH_PATH", &mut self.health_endpoint.path);
        Self::apply_env_string(
            "LAUNCHER_SERVICE_NAME",
            &mut self.health_endpoint.service_name,
        );

        // Logging
        Self::apply_env_parse("LAUNCHER_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("LAUNCHER_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("LAUNCHER_LOG_FILE", &mut self.logging.file);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.trim().parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    /// (empty values are ignored)
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name)
            && !val.trim().is_empty()
        {
            *target = Some(val);
        }
    }
}
