use crate::keep_alive::Probe;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use launcher_config::Config;
use log::{debug, info, warn};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// Timing and target of the keep-alive check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeepAliveSettings {
    /// Public base URL of the service
    pub base_url: String,
    pub interval: Duration,
    /// Wait after `start()` before the first check
    pub warmup: Duration,
}

impl KeepAliveSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            base_url: config.public_url(),
            interval: config.keep_alive.interval(),
            warmup: config.keep_alive.warmup(),
        }
    }
}

/// Owns the keep-alive task.
///
/// State is `running` exactly when a task handle is held. `start()` and
/// `stop()` are idempotent, and once `stop()` returns no further check is
/// issued: aborting the task also drops a check that is still in flight.
pub struct KeepAliveScheduler {
    settings: KeepAliveSettings,
    probe: Arc<dyn Probe>,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl KeepAliveScheduler {
    pub fn new(settings: KeepAliveSettings, probe: Arc<dyn Probe>) -> Self {
        Self {
            settings,
            probe,
            task: Mutex::new(None),
        }
    }

    /// Arm the checks. Returns `false` when already running.
    ///
    /// Must be called from inside a tokio runtime.
    pub fn start(&self) -> bool {
        // Spawning outside a runtime panics; check before taking the lock so
        // the fault handler can still call stop() from the panic hook.
        let Ok(runtime) = tokio::runtime::Handle::try_current() else {
            warn!("Keep-alive not started: no async runtime on this thread");
            return false;
        };

        let mut task = self.lock_task();
        if task.is_some() {
            debug!("Keep-alive already running");
            return false;
        }

        info!(
            "Keep-alive started: first check in {}s, then every {}s against {}",
            self.settings.warmup.as_secs(),
            self.settings.interval.as_secs(),
            self.settings.base_url
        );

        *task = Some(runtime.spawn(run_checks(
            self.settings.clone(),
            Arc::clone(&self.probe),
        )));
        true
    }

    /// Cancel pending and future checks. Returns `false` when already
    /// stopped.
    pub fn stop(&self) -> bool {
        match self.lock_task().take() {
            Some(handle) => {
                handle.abort();
                info!("Keep-alive stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_running(&self) -> bool {
        self.lock_task().is_some()
    }

    fn lock_task(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        // A poisoned lock still holds a valid handle (or none)
        self.task.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Drop for KeepAliveScheduler {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn run_checks(settings: KeepAliveSettings, probe: Arc<dyn Probe>) {
    tokio::time::sleep(settings.warmup).await;

    // First tick completes immediately: one check right after the warm-up
    let mut ticker = tokio::time::interval(settings.interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let outcome = probe.check(&settings.base_url).await;
        debug!("Keep-alive outcome: {outcome}");
    }
}
