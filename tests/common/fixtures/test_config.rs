//! Test configuration builder for creating config files programmatically

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Builder for creating test configurations
pub struct TestConfigBuilder {
    temp_dir: TempDir,
    endpoint: String,
    sync_tolerance: u64,
    min_peer_count: u64,
    max_peer_count: u64,
    memory_alarm_percent: Option<f64>,
    api_token: String,
    chat_id: String,
    api_url: Option<String>,
    poll_interval_seconds: u64,
}

impl TestConfigBuilder {
    /// Create a new test config builder with sane defaults
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            temp_dir,
            endpoint: "http://localhost:5052".to_string(),
            sync_tolerance: 50,
            min_peer_count: 20,
            max_peer_count: 200,
            memory_alarm_percent: None,
            api_token: "123456:test-token".to_string(),
            chat_id: "-1001234567890".to_string(),
            api_url: None,
            poll_interval_seconds: 60,
        }
    }

    pub fn endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    pub fn sync_tolerance(mut self, slots: u64) -> Self {
        self.sync_tolerance = slots;
        self
    }

    pub fn peer_bounds(mut self, min: u64, max: u64) -> Self {
        self.min_peer_count = min;
        self.max_peer_count = max;
        self
    }

    pub fn memory_alarm_percent(mut self, percent: f64) -> Self {
        self.memory_alarm_percent = Some(percent);
        self
    }

    pub fn api_token(mut self, token: &str) -> Self {
        self.api_token = token.to_string();
        self
    }

    pub fn chat_id(mut self, chat_id: &str) -> Self {
        self.chat_id = chat_id.to_string();
        self
    }

    pub fn telegram_api_url(mut self, url: &str) -> Self {
        self.api_url = Some(url.to_string());
        self
    }

    pub fn poll_interval_seconds(mut self, seconds: u64) -> Self {
        self.poll_interval_seconds = seconds;
        self
    }

    fn to_toml(&self) -> String {
        let mut toml = format!(
            r#"
[lighthouse]
endpoint = "{}"
sync_tolerance = {}
min_peer_count = {}
max_peer_count = {}
"#,
            self.endpoint, self.sync_tolerance, self.min_peer_count, self.max_peer_count
        );

        if let Some(percent) = self.memory_alarm_percent {
            toml.push_str(&format!("memory_alarm_percent = {}\n", percent));
        }

        toml.push_str(&format!(
            r#"
[telegram]
api_token = "{}"
chat_id = "{}"
"#,
            self.api_token, self.chat_id
        ));

        if let Some(url) = &self.api_url {
            toml.push_str(&format!("api_url = \"{}\"\n", url));
        }

        toml.push_str(&format!(
            r#"
[alertbot]
poll_interval_seconds = {}
"#,
            self.poll_interval_seconds
        ));

        toml
    }

    /// Build and write the config file to the temp directory
    pub fn build(self) -> TestConfig {
        let config_path = self.temp_dir.path().join("config.toml");
        fs::write(&config_path, self.to_toml()).expect("Failed to write config file");

        TestConfig {
            _temp_dir: self.temp_dir,
            config_path,
        }
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Built test configuration with temp directory
pub struct TestConfig {
    _temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestConfig {
    /// Get the config file path
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }
}
