use std::fmt;
use std::process::ExitStatus;

/// Lifecycle state of the supervised n8n process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChildState {
    /// No process has been launched yet
    NotStarted,
    /// A process is running
    Running { pid: Option<u32> },
    /// The last process exited
    Exited(ChildExit),
    /// The supervisor gave up (missing executable, spawn or wait error)
    Failed { error: String },
}

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildExit {
    pub code: Option<i32>,
    /// Terminating signal number, when killed by one
    pub signal: Option<i32>,
}

impl From<ExitStatus> for ChildExit {
    fn from(status: ExitStatus) -> Self {
        #[cfg(unix)]
        let signal = {
            use std::os::unix::process::ExitStatusExt;
            status.signal()
        };
        #[cfg(not(unix))]
        let signal = None;

        Self {
            code: status.code(),
            signal,
        }
    }
}

impl fmt::Display for ChildExit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.code, self.signal) {
            (Some(code), _) => write!(f, "code {code}"),
            (None, Some(signal)) => write!(f, "signal {}", signal_name(signal)),
            (None, None) => f.write_str("unknown status"),
        }
    }
}

#[cfg(unix)]
pub(crate) fn signal_name(signal: i32) -> String {
    match nix::sys::signal::Signal::try_from(signal) {
        Ok(sig) => sig.as_str().to_string(),
        Err(_) => signal.to_string(),
    }
}

#[cfg(not(unix))]
pub(crate) fn signal_name(signal: i32) -> String {
    signal.to_string()
}
