//! Application-wide constants for timeouts, back-offs, and default values
//!
//! Everything tunable-but-not-configured lives here so there is a single
//! place to read the bot's timing behavior.

use std::time::Duration;

/// HTTP client behavior
pub mod http {
    use super::Duration;

    /// Bound on every outbound request, both the node's diagnostic
    /// endpoints and the Telegram API
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Poll loop supervision
pub mod supervisor {
    use super::Duration;

    /// Pause before the poll loop is restarted after a crash
    pub const RESTART_BACKOFF: Duration = Duration::from_secs(10);
}

/// Default configuration values
pub mod defaults {
    /// Virtual memory usage (percent) above which the node is alarmed
    pub const MEMORY_ALARM_PERCENT: f64 = 95.0;

    /// Telegram Bot API base URL
    pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

    /// Configuration file read when no path is given on the command line
    pub const CONFIG_PATH: &str = "config.toml";
}
