//! Periodic self-check that keeps free-tier hosts from idling the service.
//!
//! The [`KeepAliveScheduler`] owns the timer; a [`Probe`] performs the
//! request. Outcomes are only logged and never feed back into supervision.

mod probe_outcome;
mod prober;
mod scheduler;

pub use probe_outcome::ProbeOutcome;
pub use prober::{HealthProber, Probe};
pub use scheduler::{KeepAliveScheduler, KeepAliveSettings};
