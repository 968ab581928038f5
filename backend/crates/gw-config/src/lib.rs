mod broadcast_mode;
mod config;
mod error;
mod log_level;
mod logging_config;
mod node_config;
mod server_config;

#[cfg(test)]
mod tests;

pub use broadcast_mode::BroadcastMode;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use node_config::NodeConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "GW_CONFIG_DIR";
const CONFIG_DIR_NAME: &str = ".gw";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Single variable shared by the broadcast and query paths
pub const RPC_URL_ENV: &str = "COSMOS_RPC_URL";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;
const MIN_PORT: u16 = 1024;
const DEFAULT_BODY_LIMIT_BYTES: usize = 100 * 1024 * 1024;

const DEFAULT_RPC_URL: &str = "http://localhost:26657";
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 600;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
