mod child_environment;
mod error;

use crate::keep_alive::{Probe, ProbeOutcome};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

/// Probe that records every call and always succeeds
#[derive(Default)]
pub(crate) struct CountingProbe {
    calls: AtomicUsize,
    urls: Mutex<Vec<String>>,
}

impl CountingProbe {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn urls(&self) -> Vec<String> {
        self.urls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Probe for CountingProbe {
    async fn check(&self, base_url: &str) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(base_url.to_string());
        ProbeOutcome::Success { status: 200 }
    }
}
