use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("{category} error: {message} {location}")]
    Generic {
        category: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    /// Create a config error
    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::generic("Config", message)
    }

    /// Create an n8n section error
    #[track_caller]
    pub fn n8n<S: Into<String>>(message: S) -> Self {
        Self::generic("N8n", message)
    }

    /// Create a child process section error
    #[track_caller]
    pub fn child<S: Into<String>>(message: S) -> Self {
        Self::generic("Child", message)
    }

    /// Create a supervisor section error
    #[track_caller]
    pub fn supervisor<S: Into<String>>(message: S) -> Self {
        Self::generic("Supervisor", message)
    }

    /// Create a keep-alive section error
    #[track_caller]
    pub fn keep_alive<S: Into<String>>(message: S) -> Self {
        Self::generic("KeepAlive", message)
    }

    /// Create a health endpoint section error
    #[track_caller]
    pub fn health_endpoint<S: Into<String>>(message: S) -> Self {
        Self::generic("HealthEndpoint", message)
    }

    #[track_caller]
    fn generic<S: Into<String>>(category: &'static str, message: S) -> Self {
        ConfigError::Generic {
            category,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
