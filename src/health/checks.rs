//! The three node health checks
//!
//! Each check is a pure function of the configuration and the endpoint
//! client: it issues one GET and returns the problems it found, in a fixed
//! wording. Endpoint failures (bad status, unreachable) are themselves
//! problems, reported as text; a payload that does not match the expected
//! schema is an error for the monitor to downgrade.

use anyhow::{anyhow, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use super::client::{EndpointClient, EndpointResponse};
use crate::config::LighthouseConfig;

/// Lighthouse-specific health endpoint (process and host metrics)
pub const HEALTH_PATH: &str = "/lighthouse/health";
/// Standard beacon API sync status endpoint
pub const SYNCING_PATH: &str = "/eth/v1/node/syncing";
/// Standard beacon API peer count endpoint
pub const PEER_COUNT_PATH: &str = "/eth/v1/node/peer_count";

#[derive(Debug, Deserialize)]
struct HealthResponse {
    data: HealthData,
}

#[derive(Debug, Deserialize)]
struct HealthData {
    sys_virt_mem_percent: f64,
}

#[derive(Debug, Deserialize)]
struct SyncingResponse {
    data: SyncingData,
}

#[derive(Debug, Deserialize)]
struct SyncingData {
    #[serde(deserialize_with = "numeric")]
    sync_distance: u64,
    is_syncing: bool,
    is_optimistic: bool,
    el_offline: bool,
}

#[derive(Debug, Deserialize)]
struct PeerCountResponse {
    data: PeerCountData,
}

#[derive(Debug, Deserialize)]
struct PeerCountData {
    #[serde(deserialize_with = "numeric")]
    connected: u64,
}

/// The beacon API serializes uint64 fields as strings ("connected": "56");
/// accept both that and plain numbers.
fn numeric<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match &value {
        serde_json::Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| serde::de::Error::custom(format!("{} is not a u64", n))),
        serde_json::Value::String(s) => s
            .parse::<u64>()
            .map_err(|_| serde::de::Error::custom(format!("{:?} is not a numeric string", s))),
        other => Err(serde::de::Error::custom(format!(
            "expected number or numeric string, got {}",
            other
        ))),
    }
}

fn parse_payload<T: DeserializeOwned>(path: &str, body: &str) -> Result<T> {
    serde_json::from_str(body).map_err(|e| anyhow!("Unexpected payload from {}: {}", path, e))
}

/// Alarm when the node's host is close to memory exhaustion.
pub async fn check_memory(
    config: &LighthouseConfig,
    client: &EndpointClient,
) -> Result<Vec<String>> {
    let response = client.get(HEALTH_PATH).await;
    let mut problems = Vec::new();

    match &response {
        EndpointResponse::Http { status, body } if status.is_success() => {
            let health: HealthResponse = parse_payload(HEALTH_PATH, body)?;
            let mem_percent = health.data.sys_virt_mem_percent;

            if mem_percent > config.memory_alarm_percent {
                problems.push(format!("Memory usage at {}%", mem_percent));
            }
        }
        other => problems.push(format!("Error from {}: {}", HEALTH_PATH, other.error_text())),
    }

    Ok(problems)
}

/// Alarm when the node is not keeping up with the chain head.
///
/// The conditions are mutually exclusive by construction: falling behind
/// outranks optimistic sync, which outranks a dead execution node, so at
/// most one sync problem is reported per cycle.
pub async fn check_sync_status(
    config: &LighthouseConfig,
    client: &EndpointClient,
) -> Result<Vec<String>> {
    let response = client.get(SYNCING_PATH).await;
    let mut problems = Vec::new();

    match &response {
        EndpointResponse::Http { status, body } if status.is_success() => {
            let syncing: SyncingResponse = parse_payload(SYNCING_PATH, body)?;
            let sync = syncing.data;

            if sync.is_syncing || sync.sync_distance > config.sync_tolerance {
                problems.push(format!(
                    "Lighthouse syncing: {} slots from head",
                    sync.sync_distance
                ));
            } else if sync.is_optimistic {
                problems.push("Lighthouse synced optimistically".to_string());
            } else if sync.el_offline {
                problems.push("Execution node is offline or erroring".to_string());
            }
        }
        other => problems.push(format!("Lighthouse not synced: {}", other.error_text())),
    }

    Ok(problems)
}

/// Alarm when the connected peer count leaves the healthy range.
pub async fn check_peer_count(
    config: &LighthouseConfig,
    client: &EndpointClient,
) -> Result<Vec<String>> {
    let response = client.get(PEER_COUNT_PATH).await;
    let mut problems = Vec::new();

    match &response {
        EndpointResponse::Http { status, body } if status.is_success() => {
            let peers: PeerCountResponse = parse_payload(PEER_COUNT_PATH, body)?;
            let connected = peers.data.connected;

            if connected < config.min_peer_count || connected > config.max_peer_count {
                problems.push(format!("Bad peer count: {}", connected));
            }
        }
        other => problems.push(format!(
            "Error from {}: {}",
            PEER_COUNT_PATH,
            other.error_text()
        )),
    }

    Ok(problems)
}
