use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

mod alert;
mod config;
mod constants;
mod health;
mod supervisor;

use constants::defaults;
use supervisor::Supervisor;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging with reduced verbosity
    let env_filter = EnvFilter::from_default_env()
        .add_directive("alertbot=info".parse()?)
        .add_directive("hyper=warn".parse()?)
        .add_directive("reqwest=warn".parse()?);

    fmt().with_env_filter(env_filter).init();

    info!("Starting Lighthouse alertbot");

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| defaults::CONFIG_PATH.to_string());
    info!("Using config file: {}", config_path);

    let supervisor = Supervisor::new(config_path);

    tokio::select! {
        _ = supervisor.run() => {}
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received, stopping");
        }
    }

    Ok(())
}
