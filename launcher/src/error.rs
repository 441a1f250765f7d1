use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LauncherError {
    #[error("Config error: {0}")]
    Config(#[from] launcher_config::ConfigError),

    #[error("n8n executable not found at {path} {location}")]
    ExecutableNotFound {
        path: PathBuf,
        location: ErrorLocation,
    },

    #[error("Failed to spawn n8n process ({command}): {source} {location}")]
    ProcessSpawn {
        command: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Lost track of n8n process: {source} {location}")]
    ProcessWait {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to bind health endpoint on {addr}: {source} {location}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Health endpoint stopped serving: {source} {location}")]
    Serve {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Failed to build HTTP client: {source} {location}")]
    HttpClient {
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("Failed to register signal handlers: {source} {location}")]
    SignalRegistration {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {source} {location}")]
    Io {
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },
}

impl LauncherError {
    /// Process exit code for this error. Every launcher error is fatal.
    pub fn exit_code(&self) -> i32 {
        1
    }

    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::ExecutableNotFound { .. } => {
                "n8n is not installed next to the launcher. \
                   Run `npm install n8n` in the service directory or set LAUNCHER_CHILD_EXECUTABLE."
            }
            Self::ProcessSpawn { .. } => {
                "The n8n command could not be started. \
                   Check that the interpreter (node) is on PATH and the executable is runnable."
            }
            Self::Bind { .. } => {
                "The health endpoint port is taken. \
                   Set LAUNCHER_HEALTH_PORT to a free port or disable it with LAUNCHER_HEALTH_ENABLED=false."
            }
            Self::Config(_) => {
                "Configuration has invalid settings. \
                   Check launcher.toml and the LAUNCHER_* environment variables."
            }
            _ => "An unexpected error occurred. Please check the logs for details.",
        }
    }
}

impl From<std::io::Error> for LauncherError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        Self::Io {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LauncherError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        Self::HttpClient {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, LauncherError>;
