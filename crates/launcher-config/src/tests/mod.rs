mod health_endpoint;
mod log_level;
mod supervisor;

use std::env;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

/// Variables `Config::load` reads. Cleared for every test so the host
/// environment (a CI box running on Railway, say) cannot leak in.
const LAUNCHER_VARS: &[&str] = &[
    "LAUNCHER_CONFIG_FILE",
    "PORT",
    "RAILWAY_ENVIRONMENT",
    "RAILWAY_STATIC_URL",
    "RAILWAY_PUBLIC_DOMAIN",
    "RENDER",
    "RENDER_EXTERNAL_URL",
    "LAUNCHER_N8N_PORT",
    "LAUNCHER_N8N_HOST",
    "LAUNCHER_N8N_PROTOCOL",
    "LAUNCHER_PUBLIC_URL",
    "LAUNCHER_TIMEZONE",
    "LAUNCHER_NODE_ENV",
    "LAUNCHER_N8N_LOG_LEVEL",
    "LAUNCHER_BASIC_AUTH_ACTIVE",
    "LAUNCHER_CHILD_INTERPRETER",
    "LAUNCHER_CHILD_EXECUTABLE",
    "LAUNCHER_CHILD_ARGS",
    "LAUNCHER_CHILD_WORKING_DIR",
    "LAUNCHER_RESTART_DELAY_SECS",
    "LAUNCHER_KEEP_ALIVE_ARM_DELAY_SECS",
    "LAUNCHER_KEEP_ALIVE_ENABLED",
    "LAUNCHER_KEEP_ALIVE_INTERVAL_SECS",
    "LAUNCHER_KEEP_ALIVE_WARMUP_SECS",
    "LAUNCHER_KEEP_ALIVE_TIMEOUT_SECS",
    "LAUNCHER_KEEP_ALIVE_PROBE_PATH",
    "LAUNCHER_HEALTH_ENABLED",
    "LAUNCHER_HEALTH_HOST",
    "LAUNCHER_HEALTH_PORT",
    "LAUNCHER_HEALTH_PATH",
    "LAUNCHER_SERVICE_NAME",
    "LAUNCHER_LOG_LEVEL",
    "LAUNCHER_LOG_COLORED",
    "LAUNCHER_LOG_FILE",
];

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Clean environment and an empty working directory without a
/// launcher.toml.
pub(crate) struct IsolatedEnv {
    _guards: Vec<EnvGuard>,
    _cwd: CwdGuard,
}

struct CwdGuard {
    original: std::path::PathBuf,
    _temp: TempDir,
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = env::set_current_dir(&self.original);
    }
}

pub(crate) fn isolated_env() -> IsolatedEnv {
    let guards = LAUNCHER_VARS.iter().map(|key| EnvGuard::remove(key)).collect();

    let original = env::current_dir().unwrap();
    let temp = TempDir::new().unwrap();
    env::set_current_dir(temp.path()).unwrap();

    IsolatedEnv {
        _guards: guards,
        _cwd: CwdGuard {
            original,
            _temp: temp,
        },
    }
}

/// Write `contents` to a temp TOML file and point LAUNCHER_CONFIG_FILE at it
pub(crate) fn config_file(contents: &str) -> (NamedTempFile, EnvGuard) {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    let guard = EnvGuard::set("LAUNCHER_CONFIG_FILE", file.path().to_str().unwrap());
    (file, guard)
}
