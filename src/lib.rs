pub mod alert;
pub mod config;
pub mod constants;
pub mod health;
pub mod supervisor;

// Re-export commonly used types
pub use alert::{AlertDispatcher, TelegramNotifier};
pub use config::{AlertbotConfig, Config, LighthouseConfig, TelegramConfig};
pub use health::{EndpointClient, HealthMonitor};
pub use supervisor::Supervisor;
