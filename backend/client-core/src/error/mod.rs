pub mod bot_client;
pub mod config;

pub use bot_client::BotClientError;
pub use config::ConfigError;
