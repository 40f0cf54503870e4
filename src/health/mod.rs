//! Beacon node health checking
//!
//! Split in three: `client` talks HTTP to the node, `checks` turns endpoint
//! payloads into problem strings, and `monitor` runs the full check
//! sequence per polling cycle.

pub mod checks;
pub mod client;
pub mod monitor;

pub use client::{EndpointClient, EndpointResponse};
pub use monitor::HealthMonitor;
