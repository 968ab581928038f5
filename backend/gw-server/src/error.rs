use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] gw_config::ConfigError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("Metrics recorder error: {message}")]
    Metrics { message: String },

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
