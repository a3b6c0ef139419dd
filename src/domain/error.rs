use std::io;

use thiserror::Error;

/// Library-wide error type for laravels operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// `enable_gzip` is set but the installed runtime dropped the option.
    #[error(
        "enable_gzip is DEPRECATED since Swoole 4.1.0, set http_compression of Swoole instead, http_compression is disabled by default.\nIf there is a proxy server like Nginx, suggest that enable gzip in Nginx and disable gzip in Swoole, to avoid the repeated gzip compression for response."
    )]
    GzipDeprecated,

    /// Event listeners configured without task worker processes.
    #[error("Asynchronous event listening needs to set task_worker_num > 0")]
    TaskWorkersRequired,

    /// Runtime engine version could not be determined.
    #[error("Unable to determine Swoole version: {0}")]
    RuntimeUnavailable(String),

    /// Malformed `config/laravels.toml`.
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// JSON (de)serialization failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Interactive prompt failed.
    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
