//! Error types shared across the workspace

use thiserror::Error;

/// Result type alias for workspace operations
pub type Result<T> = std::result::Result<T, HeatmapError>;

/// Errors produced outside of request handling (startup, configuration,
/// logging). Request-level failures use the per-operation error enums in
/// the server crate.
#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

impl HeatmapError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }
}
