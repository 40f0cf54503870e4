//! Configuration loading and validation
//!
//! The bot reads a single TOML file with three sections: `[lighthouse]`
//! (what to monitor and the thresholds), `[telegram]` (where alerts go) and
//! `[alertbot]` (how often to poll). The file is read once per poll-loop
//! start; the supervisor re-reads it whenever it restarts the loop.

use anyhow::{anyhow, Result};
use serde::Deserialize;
use std::path::Path;
use tokio::fs;

use crate::constants::defaults;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub lighthouse: LighthouseConfig,
    pub telegram: TelegramConfig,
    pub alertbot: AlertbotConfig,
}

/// Monitored node settings and alarm thresholds
#[derive(Debug, Clone, Deserialize)]
pub struct LighthouseConfig {
    /// Base URL of the beacon node's HTTP API, e.g. `http://localhost:5052`
    pub endpoint: String,
    /// Slots behind head the node may be without being reported as syncing
    pub sync_tolerance: u64,
    pub min_peer_count: u64,
    pub max_peer_count: u64,
    #[serde(default = "default_memory_alarm_percent")]
    pub memory_alarm_percent: f64,
}

fn default_memory_alarm_percent() -> f64 {
    defaults::MEMORY_ALARM_PERCENT
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelegramConfig {
    pub api_token: String,
    pub chat_id: String,
    /// Bot API base URL; only tests point this anywhere else
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    defaults::TELEGRAM_API_URL.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlertbotConfig {
    pub poll_interval_seconds: u64,
}

impl Config {
    /// Read and validate the configuration file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config {}: {}", path.display(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config {}: {}", path.display(), e))?;

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations that would produce bad requests at runtime.
    ///
    /// A token pasted with its surrounding quotes reaches Telegram as part
    /// of the credential and every dispatch fails; it is rejected at load.
    pub fn validate(&self) -> Result<()> {
        let token = self.telegram.api_token.as_str();
        if token.starts_with('"')
            || token.ends_with('"')
            || token.starts_with('\'')
            || token.ends_with('\'')
        {
            return Err(anyhow!(
                "Telegram api_token is wrapped in quote characters, remove them from the config"
            ));
        }
        if token.is_empty() {
            return Err(anyhow!("Telegram api_token is empty"));
        }
        if self.telegram.chat_id.is_empty() {
            return Err(anyhow!("Telegram chat_id is empty"));
        }
        if self.lighthouse.endpoint.is_empty() {
            return Err(anyhow!("Lighthouse endpoint is empty"));
        }
        if self.lighthouse.min_peer_count > self.lighthouse.max_peer_count {
            return Err(anyhow!(
                "min_peer_count ({}) is above max_peer_count ({})",
                self.lighthouse.min_peer_count,
                self.lighthouse.max_peer_count
            ));
        }
        if self.alertbot.poll_interval_seconds == 0 {
            return Err(anyhow!("poll_interval_seconds must be at least 1"));
        }
        Ok(())
    }
}
