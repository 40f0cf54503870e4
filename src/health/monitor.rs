//! Check aggregation
//!
//! One [`HealthMonitor::collect_report`] call is one monitoring pass: every
//! check runs in its declared order and every problem lands in a single
//! report. The monitor never fails; an error escaping the check sequence
//! becomes the report's final entry instead.

use anyhow::Result;
use tracing::{debug, warn};

use super::checks;
use super::client::EndpointClient;
use crate::config::LighthouseConfig;

pub struct HealthMonitor {
    config: LighthouseConfig,
    client: EndpointClient,
}

impl HealthMonitor {
    pub fn new(config: LighthouseConfig) -> Self {
        let client = EndpointClient::new(&config.endpoint);
        Self { config, client }
    }

    /// Run all checks and collect their problems, in check order.
    ///
    /// The error boundary wraps the whole sequence: the first check that
    /// fails (malformed payload, missing field) aborts the ones after it,
    /// and exactly one `Heartbeat error` entry is appended to whatever was
    /// already collected. Problems found before the failure are kept.
    pub async fn collect_report(&self) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = self.run_checks(&mut problems).await {
            warn!("Check sequence aborted: {}", e);
            problems.push(format!("Heartbeat error: {}", e));
        }

        debug!("Collected {} problem(s)", problems.len());
        problems
    }

    async fn run_checks(&self, problems: &mut Vec<String>) -> Result<()> {
        problems.extend(checks::check_memory(&self.config, &self.client).await?);
        problems.extend(checks::check_sync_status(&self.config, &self.client).await?);
        problems.extend(checks::check_peer_count(&self.config, &self.client).await?);
        Ok(())
    }
}
