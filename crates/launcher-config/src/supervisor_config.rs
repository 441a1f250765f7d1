use crate::{ConfigError, ConfigErrorResult};

use std::time::Duration;

use serde::Deserialize;

pub const DEFAULT_RESTART_DELAY_SECS: u64 = 10;
pub const DEFAULT_KEEP_ALIVE_ARM_DELAY_SECS: u64 = 30;
pub const MAX_RESTART_DELAY_SECS: u64 = 3600;
pub const MAX_KEEP_ALIVE_ARM_DELAY_SECS: u64 = 3600;

/// Restart policy for the supervised child.
///
/// Restarts are unbounded and use a flat delay; there is no backoff and no
/// circuit breaker.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SupervisorConfig {
    /// Delay before relaunching after a non-zero exit
    pub restart_delay_secs: u64,
    /// Delay after a successful spawn before the keep-alive is armed
    pub keep_alive_arm_delay_secs: u64,
}

impl Default for SupervisorConfig {
    fn default() -> Self {
        Self {
            restart_delay_secs: DEFAULT_RESTART_DELAY_SECS,
            keep_alive_arm_delay_secs: DEFAULT_KEEP_ALIVE_ARM_DELAY_SECS,
        }
    }
}

impl SupervisorConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.restart_delay_secs > MAX_RESTART_DELAY_SECS {
            return Err(ConfigError::supervisor(format!(
                "supervisor.restart_delay_secs must be 0-{}, got {}",
                MAX_RESTART_DELAY_SECS, self.restart_delay_secs
            )));
        }

        if self.keep_alive_arm_delay_secs > MAX_KEEP_ALIVE_ARM_DELAY_SECS {
            return Err(ConfigError::supervisor(format!(
                "supervisor.keep_alive_arm_delay_secs must be 0-{}, got {}",
                MAX_KEEP_ALIVE_ARM_DELAY_SECS, self.keep_alive_arm_delay_secs
            )));
        }

        Ok(())
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_secs(self.restart_delay_secs)
    }

    pub fn keep_alive_arm_delay(&self) -> Duration {
        Duration::from_secs(self.keep_alive_arm_delay_secs)
    }
}
