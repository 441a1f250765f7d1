use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const MIN_INTERVAL_SECS: u64 = 10;
pub const MAX_INTERVAL_SECS: u64 = 86_400;
pub const DEFAULT_INTERVAL_SECS: u64 = 8 * 60;

pub const MAX_WARMUP_SECS: u64 = 3600;
pub const DEFAULT_WARMUP_SECS: u64 = 2 * 60;

pub const MIN_TIMEOUT_SECS: u64 = 1;
pub const MAX_TIMEOUT_SECS: u64 = 120;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

pub const DEFAULT_PROBE_PATH: &str = "/healthz";

/// Periodic self-check against the public URL.
///
/// Free-tier platforms suspend services that see no inbound traffic; the
/// check exists to generate that traffic, not to verify n8n works.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct KeepAliveConfig {
    pub enabled: bool,
    /// Time between checks
    pub interval_secs: u64,
    /// Wait after arming before the first check
    pub warmup_secs: u64,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Path appended to the public URL
    pub probe_path: String,
}

impl Default for KeepAliveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_secs: DEFAULT_INTERVAL_SECS,
            warmup_secs: DEFAULT_WARMUP_SECS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            probe_path: String::from(DEFAULT_PROBE_PATH),
        }
    }
}

impl KeepAliveConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.interval_secs < MIN_INTERVAL_SECS || self.interval_secs > MAX_INTERVAL_SECS {
            return Err(ConfigError::keep_alive(format!(
                "keep_alive.interval_secs must be {}-{}, got {}",
                MIN_INTERVAL_SECS, MAX_INTERVAL_SECS, self.interval_secs
            )));
        }

        if self.warmup_secs > MAX_WARMUP_SECS {
            return Err(ConfigError::keep_alive(format!(
                "keep_alive.warmup_secs must be 0-{}, got {}",
                MAX_WARMUP_SECS, self.warmup_secs
            )));
        }

        if self.timeout_secs < MIN_TIMEOUT_SECS || self.timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::keep_alive(format!(
                "keep_alive.timeout_secs must be {}-{}, got {}",
                MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS, self.timeout_secs
            )));
        }

        if self.timeout_secs >= self.interval_secs {
            return Err(ConfigError::keep_alive(format!(
                "keep_alive.timeout_secs ({}) must be less than interval_secs ({})",
                self.timeout_secs, self.interval_secs
            )));
        }

        if !self.probe_path.starts_with('/') {
            return Err(ConfigError::keep_alive(format!(
                "keep_alive.probe_path must start with '/', got '{}'",
                self.probe_path
            )));
        }

        Ok(())
    }

    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn warmup(&self) -> Duration {
        Duration::from_secs(self.warmup_secs)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
