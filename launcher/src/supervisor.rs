//! n8n process supervision with unbounded fixed-delay restarts.

use crate::child_environment::ChildEnvironment;
use crate::child_state::{ChildExit, ChildState};
use crate::error::{LauncherError, Result as LauncherResult};
use crate::keep_alive::KeepAliveScheduler;
use crate::restart_policy::RestartDecision;

use std::panic::Location;
use std::path::PathBuf;
use std::process::Stdio;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use error_location::ErrorLocation;
use launcher_config::{ChildConfig, Config};
use log::{error, info, warn};
use tokio::process::{Child, Command};
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Everything the supervisor needs to launch and relaunch n8n.
#[derive(Debug, Clone)]
pub struct SupervisorSettings {
    pub child: ChildConfig,
    /// Base for relative `child.executable` and `child.working_dir`
    pub cwd: PathBuf,
    pub restart_delay: Duration,
    /// Wait after a successful spawn before arming the keep-alive
    pub keep_alive_arm_delay: Duration,
    /// Shown in the "n8n is up" banner
    pub public_url: String,
}

impl SupervisorSettings {
    pub fn from_config(config: &Config) -> LauncherResult<Self> {
        Ok(Self {
            child: config.child.clone(),
            cwd: std::env::current_dir()?,
            restart_delay: config.supervisor.restart_delay(),
            keep_alive_arm_delay: config.supervisor.keep_alive_arm_delay(),
            public_url: config.public_url(),
        })
    }
}

/// Owns the n8n child process lifecycle.
///
/// Responsibilities:
/// - Validate the executable and spawn n8n with inherited stdio
/// - Arm the keep-alive once the child has had time to boot
/// - Stop the keep-alive whenever the child exits
/// - Relaunch after non-zero exits, forever, with a flat delay
pub struct Supervisor {
    settings: SupervisorSettings,
    env: ChildEnvironment,
    keep_alive: Option<Arc<KeepAliveScheduler>>,
    state_tx: watch::Sender<ChildState>,
    state_rx: watch::Receiver<ChildState>,
    spawn_count: AtomicU32,
}

impl Supervisor {
    pub fn new(
        settings: SupervisorSettings,
        env: ChildEnvironment,
        keep_alive: Option<Arc<KeepAliveScheduler>>,
    ) -> Self {
        let (state_tx, state_rx) = watch::channel(ChildState::NotStarted);

        Self {
            settings,
            env,
            keep_alive,
            state_tx,
            state_rx,
            spawn_count: AtomicU32::new(0),
        }
    }

    /// Supervise n8n until it stops cleanly.
    ///
    /// Returns `Ok(())` after an exit with code 0 or a signal-terminated
    /// exit. Returns an error for conditions a retry cannot fix; the caller
    /// is expected to terminate with [`LauncherError::exit_code`].
    pub async fn run(&self) -> LauncherResult<()> {
        loop {
            let mut child = match self.start() {
                Ok(child) => child,
                Err(e) => return Err(self.fail(e)),
            };

            let launch = self.spawn_count.fetch_add(1, Ordering::SeqCst) + 1;
            let pid = child.id();
            info!("n8n spawned (pid {}, launch #{launch})", display_pid(pid));
            self.set_state(ChildState::Running { pid });

            let arm = self.arm_keep_alive();
            let status = child.wait().await;

            // Keep-alive must be down before any restart decision is made
            arm.abort();
            self.stop_keep_alive();

            let exit = match status {
                Ok(status) => ChildExit::from(status),
                Err(source) => {
                    return Err(self.fail(LauncherError::ProcessWait {
                        source,
                        location: ErrorLocation::from(Location::caller()),
                    }));
                }
            };

            self.set_state(ChildState::Exited(exit));

            match RestartDecision::for_exit_code(exit.code) {
                RestartDecision::Restart => {
                    warn!("n8n exited with {exit}");
                    warn!(
                        "Restarting n8n in {}s",
                        self.settings.restart_delay.as_secs_f64()
                    );
                    tokio::time::sleep(self.settings.restart_delay).await;
                }
                RestartDecision::Stop => {
                    info!("n8n exited with {exit}, not restarting");
                    return Ok(());
                }
            }
        }
    }

    /// Validate the executable and spawn one n8n process.
    ///
    /// The child inherits the launcher's full environment plus the
    /// [`ChildEnvironment`] overrides, and writes straight to the launcher's
    /// stdout/stderr so the platform captures its logs.
    #[track_caller]
    pub fn start(&self) -> LauncherResult<Child> {
        let child = &self.settings.child;
        let executable = child.executable_path(&self.settings.cwd);

        info!("Looking for n8n at {}", executable.display());

        if !executable.is_file() {
            error!("n8n executable not found at {}", executable.display());
            return Err(LauncherError::ExecutableNotFound {
                path: executable,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut command = match child.interpreter {
            Some(ref interpreter) => {
                let mut command = Command::new(interpreter);
                command.arg(&executable);
                command
            }
            None => Command::new(&executable),
        };

        command
            .args(&child.args)
            .current_dir(child.working_dir_path(&self.settings.cwd))
            .envs(self.env.iter())
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        command.spawn().map_err(|source| {
            error!("Failed to start n8n: {source}");
            LauncherError::ProcessSpawn {
                command: child.command_line(),
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<ChildState> {
        self.state_rx.clone()
    }

    /// Get current state.
    pub fn state(&self) -> ChildState {
        self.state_rx.borrow().clone()
    }

    /// Number of processes launched so far, restarts included.
    pub fn spawn_count(&self) -> u32 {
        self.spawn_count.load(Ordering::SeqCst)
    }

    fn arm_keep_alive(&self) -> JoinHandle<()> {
        let keep_alive = self.keep_alive.clone();
        let delay = self.settings.keep_alive_arm_delay;
        let public_url = self.settings.public_url.clone();

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;

            info!("n8n started successfully");
            info!("Editor available at {public_url}");
            info!("Ignore n8n's \"localhost:5678\" message, it only reflects the bind address");

            if let Some(keep_alive) = keep_alive {
                keep_alive.start();
            }
        })
    }

    fn stop_keep_alive(&self) {
        if let Some(ref keep_alive) = self.keep_alive {
            keep_alive.stop();
        }
    }

    fn fail(&self, error: LauncherError) -> LauncherError {
        self.stop_keep_alive();
        self.set_state(ChildState::Failed {
            error: error.to_string(),
        });
        error
    }

    fn set_state(&self, state: ChildState) {
        let _ = self.state_tx.send(state);
    }
}

fn display_pid(pid: Option<u32>) -> String {
    pid.map_or_else(|| String::from("unknown"), |pid| pid.to_string())
}
