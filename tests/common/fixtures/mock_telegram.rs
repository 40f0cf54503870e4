//! Mock Telegram Bot API for testing alert delivery
//!
//! Simulates the `sendMessage` method so tests can verify what the bot
//! would have posted, and how many times.

use serde_json::{json, Value};
use wiremock::http::Method;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram server that records sendMessage calls
pub struct MockTelegram {
    pub server: MockServer,
    pub base_url: String,
    message_path: String,
}

impl MockTelegram {
    /// Create a new mock Telegram API for the given bot token
    pub async fn start(api_token: &str) -> Self {
        let server = MockServer::start().await;
        let base_url = server.uri();
        let message_path = format!("/bot{}/sendMessage", api_token);

        Self {
            server,
            base_url,
            message_path,
        }
    }

    /// Base URL to use as the `api_url` config value
    pub fn api_url(&self) -> String {
        self.base_url.clone()
    }

    /// Mock successful message delivery
    pub async fn mock_send_ok(&self) {
        Mock::given(method("POST"))
            .and(path(self.message_path.as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": { "message_id": 1 }
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock delivery failure
    pub async fn mock_send_error(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path(self.message_path.as_str()))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "ok": false,
                "error_code": status_code,
                "description": "mocked failure"
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock delivery failing exactly once, then falling through to any
    /// mock mounted after this one
    pub async fn mock_send_error_once(&self, status_code: u16) {
        Mock::given(method("POST"))
            .and(path(self.message_path.as_str()))
            .respond_with(ResponseTemplate::new(status_code).set_body_json(json!({
                "ok": false,
                "error_code": status_code,
                "description": "mocked failure"
            })))
            .up_to_n_times(1)
            .mount(&self.server)
            .await;
    }

    /// JSON bodies of all sendMessage calls received, in arrival order
    pub async fn sent_messages(&self) -> Vec<Value> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|req| req.method == Method::POST && req.url.path() == self.message_path)
            .filter_map(|req| req.body_json::<Value>().ok())
            .collect()
    }

    /// Number of sendMessage calls received
    pub async fn message_count(&self) -> usize {
        self.sent_messages().await.len()
    }
}
