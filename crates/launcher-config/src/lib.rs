mod child_config;
mod config;
mod error;
mod health_endpoint_config;
mod keep_alive_config;
mod log_level;
mod logging_config;
mod n8n_config;
mod platform;
mod supervisor_config;

#[cfg(test)]
mod tests;

pub use child_config::ChildConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use health_endpoint_config::HealthEndpointConfig;
pub use keep_alive_config::KeepAliveConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use n8n_config::N8nConfig;
pub use platform::Platform;
pub use supervisor_config::SupervisorConfig;

const DEFAULT_CONFIG_FILENAME: &str = "launcher.toml";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Ports below this are privileged; 0 still means "let the OS pick".
const MIN_PORT: u16 = 1024;
