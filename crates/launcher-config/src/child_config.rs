use crate::{ConfigError, ConfigErrorResult};

use std::path::{Path, PathBuf};

use serde::Deserialize;

pub const DEFAULT_INTERPRETER: &str = "node";
pub const DEFAULT_EXECUTABLE: &str = "node_modules/.bin/n8n";
pub const DEFAULT_ARGS: [&str; 1] = ["start"];

/// How to launch the wrapped server.
///
/// The command line is `[interpreter] executable args...`. With the
/// defaults that is `node node_modules/.bin/n8n start`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ChildConfig {
    /// Program that runs `executable`; `None` executes it directly
    pub interpreter: Option<String>,
    /// Path of the wrapped server's entry point, relative to `working_dir`
    pub executable: String,
    pub args: Vec<String>,
    /// Directory the child runs in; defaults to the launcher's cwd
    pub working_dir: Option<String>,
}

impl Default for ChildConfig {
    fn default() -> Self {
        Self {
            interpreter: Some(String::from(DEFAULT_INTERPRETER)),
            executable: String::from(DEFAULT_EXECUTABLE),
            args: DEFAULT_ARGS.iter().map(|a| a.to_string()).collect(),
            working_dir: None,
        }
    }
}

impl ChildConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.executable.trim().is_empty() {
            return Err(ConfigError::child("child.executable cannot be empty"));
        }

        if let Some(ref interpreter) = self.interpreter
            && interpreter.trim().is_empty()
        {
            return Err(ConfigError::child(
                "child.interpreter cannot be empty (omit it to run the executable directly)",
            ));
        }

        Ok(())
    }

    /// Resolve `executable` against `working_dir`, falling back to `cwd`.
    pub fn executable_path(&self, cwd: &Path) -> PathBuf {
        let executable = Path::new(&self.executable);
        if executable.is_absolute() {
            return executable.to_path_buf();
        }

        self.working_dir_path(cwd).join(executable)
    }

    /// Directory the child is started in.
    pub fn working_dir_path(&self, cwd: &Path) -> PathBuf {
        match self.working_dir {
            Some(ref dir) if Path::new(dir).is_absolute() => PathBuf::from(dir),
            Some(ref dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }

    /// Human-readable command line for logs.
    pub fn command_line(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(self.args.len() + 2);
        if let Some(ref interpreter) = self.interpreter {
            parts.push(interpreter);
        }
        parts.push(&self.executable);
        parts.extend(self.args.iter().map(String::as_str));
        parts.join(" ")
    }
}
