pub mod child_environment;
pub mod child_state;
pub mod error;
pub mod fault_handler;
pub mod health;
pub mod keep_alive;
pub mod logger;
pub mod restart_policy;
pub mod routes;
pub mod supervisor;

#[cfg(test)]
mod tests;

pub use child_environment::ChildEnvironment;
pub use child_state::{ChildExit, ChildState};
pub use error::{LauncherError, Result as LauncherResult};
pub use health::HealthState;
pub use keep_alive::{HealthProber, KeepAliveScheduler, KeepAliveSettings, Probe, ProbeOutcome};
pub use restart_policy::RestartDecision;
pub use routes::build_router;
pub use supervisor::{Supervisor, SupervisorSettings};
