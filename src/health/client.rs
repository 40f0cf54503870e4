//! HTTP access to the beacon node's diagnostic endpoints
//!
//! The client never fails: every request turns into an [`EndpointResponse`],
//! either the server's answer (any status code) or the transport failure
//! that prevented one. What each outcome means for node health is the
//! calling check's decision.

use reqwest::{Client as HttpClient, StatusCode};

use crate::constants::http;

/// Outcome of one GET against a diagnostic endpoint.
#[derive(Debug, Clone)]
pub enum EndpointResponse {
    /// The endpoint answered; the status may or may not be a success.
    Http { status: StatusCode, body: String },
    /// The request produced no response: connect failure, timeout, or a
    /// connection dropped mid-body.
    Unreachable { cause: String },
}

impl EndpointResponse {
    /// True when the endpoint answered with a 2xx status.
    pub fn is_success(&self) -> bool {
        matches!(self, EndpointResponse::Http { status, .. } if status.is_success())
    }

    /// Short text for problem strings: the numeric HTTP status, or the
    /// transport failure cause.
    pub fn error_text(&self) -> String {
        match self {
            EndpointResponse::Http { status, .. } => status.as_u16().to_string(),
            EndpointResponse::Unreachable { cause } => cause.clone(),
        }
    }
}

pub struct EndpointClient {
    client: HttpClient,
    base_url: String,
}

impl EndpointClient {
    pub fn new(base_url: &str) -> Self {
        let client = HttpClient::builder()
            .timeout(http::REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `{base_url}{path}`, bounded by the fixed request timeout.
    pub async fn get(&self, path: &str) -> EndpointResponse {
        let url = format!("{}{}", self.base_url, path);

        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status();
                match response.text().await {
                    Ok(body) => EndpointResponse::Http { status, body },
                    Err(e) => EndpointResponse::Unreachable {
                        cause: e.to_string(),
                    },
                }
            }
            Err(e) => EndpointResponse::Unreachable {
                cause: e.to_string(),
            },
        }
    }
}
