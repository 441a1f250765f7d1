//! Termination signals, panics and failed background tasks.

use crate::error::Result as LauncherResult;
use crate::keep_alive::KeepAliveScheduler;

use std::backtrace::Backtrace;
use std::fmt::Display;
use std::sync::Arc;

use log::{debug, error};
use tokio::task::JoinHandle;

/// Stop the keep-alive and exit 0 on SIGINT/SIGTERM.
///
/// Runs on a dedicated thread so it works while the async runtime is busy.
/// The n8n child is not signalled explicitly; it shares the process group
/// and receives the platform's signal itself.
#[cfg(unix)]
pub fn install_signal_handlers(keep_alive: Option<Arc<KeepAliveScheduler>>) -> LauncherResult<()> {
    use crate::child_state::signal_name;
    use crate::error::LauncherError;

    use std::panic::Location;

    use error_location::ErrorLocation;
    use log::info;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals =
        Signals::new([SIGINT, SIGTERM]).map_err(|source| LauncherError::SignalRegistration {
            source,
            location: ErrorLocation::from(Location::caller()),
        })?;

    std::thread::Builder::new()
        .name(String::from("signals"))
        .spawn(move || {
            if let Some(sig) = signals.forever().next() {
                info!("Received {}, shutting down", signal_name(sig));

                if let Some(ref keep_alive) = keep_alive {
                    keep_alive.stop();
                }

                log::logger().flush();
                std::process::exit(0);
            }
        })?;

    Ok(())
}

/// Log panics with their location and a backtrace, and stop the keep-alive.
///
/// The process keeps running after the hook returns.
pub fn install_panic_hook(keep_alive: Option<Arc<KeepAliveScheduler>>) {
    std::panic::set_hook(Box::new(move |info| {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| String::from("non-string panic payload"));
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| String::from("unknown location"));

        error!("Uncaught fault at {location}: {message}");
        error!("Stack:\n{}", Backtrace::force_capture());

        if let Some(ref keep_alive) = keep_alive {
            keep_alive.stop();
        }
    }));
}

/// Log the result of a detached task that nothing else awaits.
pub fn watch_task<E>(name: &'static str, handle: JoinHandle<Result<(), E>>) -> JoinHandle<()>
where
    E: Display + Send + 'static,
{
    tokio::spawn(async move {
        match handle.await {
            Ok(Ok(())) => debug!("{name} finished"),
            Ok(Err(e)) => error!("{name} failed: {e}"),
            Err(e) if e.is_panic() => error!("{name} panicked: {e}"),
            Err(e) => debug!("{name} cancelled: {e}"),
        }
    })
}
