//! Error types for bellboard.

use std::io;

/// Errors produced by the bellboard crates.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("service error: {0}")]
    Service(String),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("device responded with HTTP {0}")]
    HttpStatus(u16),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, BoardError>;
