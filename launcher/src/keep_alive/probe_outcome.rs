use std::fmt;
use std::time::Duration;

use log::{info, warn};

/// Result of a single keep-alive check.
///
/// Only `Success` means n8n answered 200, but every variant except
/// `NetworkError` and `Timeout` still produced inbound traffic on the
/// platform, which is all the check is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// HTTP 200
    Success { status: u16 },
    /// Any other HTTP status
    SoftFailure { status: u16 },
    /// Connection refused, DNS failure, TLS error, ...
    NetworkError { cause: String },
    /// No response within the per-check timeout; the request was aborted
    Timeout { after: Duration },
}

impl ProbeOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ProbeOutcome::Success { .. })
    }

    /// Whether the request reached the platform at all.
    pub fn reached_service(&self) -> bool {
        matches!(
            self,
            ProbeOutcome::Success { .. } | ProbeOutcome::SoftFailure { .. }
        )
    }

    pub(crate) fn log(&self, url: &str) {
        match self {
            ProbeOutcome::Success { .. } => info!("Keep-alive check OK: {url}"),
            ProbeOutcome::SoftFailure { status } => {
                warn!("Keep-alive check got HTTP {status} from {url}, service still saw traffic")
            }
            ProbeOutcome::NetworkError { cause } => {
                warn!("Keep-alive check failed for {url}: {cause}")
            }
            ProbeOutcome::Timeout { after } => warn!(
                "Keep-alive check timed out after {}s for {url}, request aborted",
                after.as_secs_f64()
            ),
        }
    }
}

impl fmt::Display for ProbeOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeOutcome::Success { status } => write!(f, "success ({status})"),
            ProbeOutcome::SoftFailure { status } => write!(f, "soft failure ({status})"),
            ProbeOutcome::NetworkError { cause } => write!(f, "network error: {cause}"),
            ProbeOutcome::Timeout { after } => write!(f, "timeout after {after:?}"),
        }
    }
}
