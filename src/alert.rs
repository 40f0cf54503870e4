//! Alert formatting and Telegram delivery

use anyhow::{anyhow, Result};
use reqwest::Client as HttpClient;
use serde_json::json;
use tracing::{debug, info};

use crate::config::TelegramConfig;
use crate::constants::http;

/// First line of every alert message.
pub const ALERT_HEADER: &str = "Trouble in paradise:";

/// Render a problem list as a single alert message.
///
/// The header is followed by a blank line and one `- ` bullet per problem,
/// each bullet terminated by a newline.
pub fn format_report(problems: &[String]) -> String {
    let mut message = format!("{}\n\n", ALERT_HEADER);
    for problem in problems {
        message.push_str(&format!("- {}\n", problem));
    }
    message
}

/// Thin client for the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: HttpClient,
    api_url: String,
    api_token: String,
    chat_id: String,
}

impl TelegramNotifier {
    pub fn new(config: &TelegramConfig) -> Self {
        let client = HttpClient::builder()
            .timeout(http::REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            chat_id: config.chat_id.clone(),
        }
    }

    pub async fn send_message(&self, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.api_token);

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await
            .map_err(|e| anyhow!("Telegram request failed: {}", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Telegram API returned status {}: {}", status, body));
        }

        debug!("Telegram message delivered");
        Ok(())
    }
}

/// Turns a non-empty problem report into exactly one Telegram message.
pub struct AlertDispatcher {
    notifier: TelegramNotifier,
}

impl AlertDispatcher {
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            notifier: TelegramNotifier::new(config),
        }
    }

    pub async fn dispatch(&self, problems: &[String]) -> Result<()> {
        info!("Sending alert with {} problem(s)", problems.len());
        let message = format_report(problems);
        self.notifier.send_message(&message).await
    }
}
