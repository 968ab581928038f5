use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ConfigError, ConfigErrorResult,
    LoggingConfig, NodeConfig, RPC_URL_ENV, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub node: NodeConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. Check for GW_CONFIG_DIR env var, else use ./.gw/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply GW_* environment variable overrides
    /// 5. Apply COSMOS_RPC_URL last
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: GW_CONFIG_DIR env var > ./.gw/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.node.validate()?;

        if let Some(file) = &self.logging.file
            && file.trim().is_empty()
        {
            return Err(ConfigError::logging("logging.file must not be empty"));
        }

        Ok(())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        let Some(file) = &self.logging.file else {
            return Ok(None);
        };

        let path = Path::new(file);
        if path.is_absolute() {
            return Ok(Some(path.to_path_buf()));
        }

        Ok(Some(Self::config_dir()?.join(&self.logging.dir).join(path)))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (body limit {} bytes)",
            self.server.host, self.server.port, self.server.body_limit_bytes
        );
        info!(
            "  node: {} (connect {}s, request {}s, broadcast {})",
            self.node.rpc_url,
            self.node.connect_timeout_secs,
            self.node.request_timeout_secs,
            self.node.broadcast_mode
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GW_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GW_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "GW_SERVER_BODY_LIMIT_BYTES",
            &mut self.server.body_limit_bytes,
        );

        // Node
        Self::apply_env_string("GW_NODE_RPC_URL", &mut self.node.rpc_url);
        Self::apply_env_parse(
            "GW_NODE_CONNECT_TIMEOUT_SECS",
            &mut self.node.connect_timeout_secs,
        );
        Self::apply_env_parse(
            "GW_NODE_REQUEST_TIMEOUT_SECS",
            &mut self.node.request_timeout_secs,
        );
        Self::apply_env_parse("GW_NODE_BROADCAST_MODE", &mut self.node.broadcast_mode);

        // Logging
        Self::apply_env_parse("GW_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GW_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GW_LOG_FILE", &mut self.logging.file);

        // Shared with the rest of the Cosmos tooling, wins over everything else
        Self::apply_env_string(RPC_URL_ENV, &mut self.node.rpc_url);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
