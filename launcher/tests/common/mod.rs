#![allow(dead_code)]

use n8n_launcher::{
    ChildEnvironment, KeepAliveScheduler, KeepAliveSettings, Probe, ProbeOutcome,
    SupervisorSettings,
};

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use launcher_config::{ChildConfig, Config};

/// Probe that counts calls and always succeeds
#[derive(Default)]
pub struct CountingProbe {
    calls: AtomicUsize,
}

impl CountingProbe {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Probe for CountingProbe {
    async fn check(&self, _base_url: &str) -> ProbeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ProbeOutcome::Success { status: 200 }
    }
}

/// Write a shell script standing in for the n8n executable
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    path
}

/// Settings that run `sh <script>` from `dir` with short delays
pub fn settings(dir: &Path, script: &str) -> SupervisorSettings {
    SupervisorSettings {
        child: ChildConfig {
            interpreter: Some(String::from("sh")),
            executable: String::from(script),
            args: Vec::new(),
            working_dir: None,
        },
        cwd: dir.to_path_buf(),
        restart_delay: Duration::from_millis(300),
        keep_alive_arm_delay: Duration::from_millis(100),
        public_url: String::from("https://flow.up.railway.app"),
    }
}

pub fn child_env() -> ChildEnvironment {
    let mut config = Config::default();
    config.n8n.public_url = Some(String::from("https://flow.up.railway.app"));
    ChildEnvironment::from_config(&config)
}

/// Keep-alive with a long warm-up so only start/stop is observed
pub fn keep_alive() -> (Arc<KeepAliveScheduler>, Arc<CountingProbe>) {
    let probe = Arc::new(CountingProbe::default());
    let settings = KeepAliveSettings {
        base_url: String::from("https://flow.up.railway.app"),
        interval: Duration::from_secs(480),
        warmup: Duration::from_secs(120),
    };

    (
        Arc::new(KeepAliveScheduler::new(settings, probe.clone())),
        probe,
    )
}
