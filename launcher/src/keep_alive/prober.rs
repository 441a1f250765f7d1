use crate::error::Result as LauncherResult;
use crate::keep_alive::ProbeOutcome;

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

/// Performs one keep-alive check against a base URL.
///
/// Implementations never fail: every problem is folded into the returned
/// [`ProbeOutcome`].
#[async_trait]
pub trait Probe: Send + Sync {
    async fn check(&self, base_url: &str) -> ProbeOutcome;
}

/// HTTP GET prober with a hard per-request timeout.
pub struct HealthProber {
    client: reqwest::Client,
    path: String,
    timeout: Duration,
}

impl HealthProber {
    /// Create a prober that requests `<base_url><path>`.
    ///
    /// # Arguments
    /// * `path` - Path appended to the base URL, e.g. `/healthz`
    /// * `timeout` - Time allowed for the whole request before it is aborted
    pub fn new(path: impl Into<String>, timeout: Duration) -> LauncherResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(timeout)
            // Checks are minutes apart; never keep a socket open between them
            .pool_max_idle_per_host(0)
            .build()?;

        Ok(Self {
            client,
            path: path.into(),
            timeout,
        })
    }

    pub fn url_for(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}

#[async_trait]
impl Probe for HealthProber {
    async fn check(&self, base_url: &str) -> ProbeOutcome {
        let url = self.url_for(base_url);
        debug!("Keep-alive check: GET {url}");

        // Dropping the send future on timeout tears the connection down.
        let outcome = match tokio::time::timeout(self.timeout, self.client.get(&url).send()).await
        {
            Err(_) => ProbeOutcome::Timeout {
                after: self.timeout,
            },
            Ok(Err(e)) if e.is_timeout() => ProbeOutcome::Timeout {
                after: self.timeout,
            },
            Ok(Err(e)) => ProbeOutcome::NetworkError {
                cause: e.to_string(),
            },
            Ok(Ok(response)) if response.status() == StatusCode::OK => ProbeOutcome::Success {
                status: response.status().as_u16(),
            },
            Ok(Ok(response)) => ProbeOutcome::SoftFailure {
                status: response.status().as_u16(),
            },
        };

        outcome.log(&url);
        outcome
    }
}
