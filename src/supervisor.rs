//! Crash-restart supervision of the polling loop
//!
//! The polling loop is expected to run forever. Any way out of it (config
//! load failure on restart, alert delivery failure, a panic inside a check)
//! lands back in [`Supervisor::run`], which logs the cause, waits out the
//! restart backoff and starts a fresh loop with freshly loaded config.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use tokio::time::sleep;
use tracing::{error, info, warn};

use crate::alert::AlertDispatcher;
use crate::config::Config;
use crate::constants::supervisor;
use crate::health::HealthMonitor;

pub struct Supervisor {
    config_path: PathBuf,
    restart_backoff: Duration,
}

impl Supervisor {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            restart_backoff: supervisor::RESTART_BACKOFF,
        }
    }

    /// Override the pause between a crash and the next start.
    pub fn with_restart_backoff(mut self, backoff: Duration) -> Self {
        self.restart_backoff = backoff;
        self
    }

    /// Run the polling loop until the process is killed, restarting it
    /// after every crash.
    pub async fn run(&self) {
        loop {
            let handle = tokio::spawn(run_poll_loop(self.config_path.clone()));

            match handle.await {
                Ok(Err(e)) => error!("Monitor loop crashed: {}", e),
                Err(e) => error!("Monitor loop panicked: {}", e),
                Ok(Ok(())) => warn!("Monitor loop exited unexpectedly"),
            }

            info!(
                "Restarting monitor loop in {} second(s)",
                self.restart_backoff.as_secs_f64()
            );
            sleep(self.restart_backoff).await;
        }
    }
}

/// One life of the monitor: load config, then poll until something fails.
async fn run_poll_loop(config_path: PathBuf) -> Result<()> {
    let config = Config::load(&config_path).await?;

    let monitor = HealthMonitor::new(config.lighthouse.clone());
    let dispatcher = AlertDispatcher::new(&config.telegram);
    let poll_interval = Duration::from_secs(config.alertbot.poll_interval_seconds);

    info!(
        "Monitoring {} every {} second(s), healthy peer range {}-{}",
        config.lighthouse.endpoint,
        config.alertbot.poll_interval_seconds,
        config.lighthouse.min_peer_count,
        config.lighthouse.max_peer_count
    );

    loop {
        info!("Checking node health");
        let report = monitor.collect_report().await;

        if report.is_empty() {
            info!("OK");
        } else {
            warn!("BAD");
            dispatcher.dispatch(&report).await?;
        }

        sleep(poll_interval).await;
    }
}
