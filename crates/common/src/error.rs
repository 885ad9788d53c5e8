//! Common error types.

use thiserror::Error;

/// Errors raised while configuring or running a grid layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The grid cannot be laid out with the given container or options.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Node not found: {0}")]
    NotFound(String),

    /// Option object could not be decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type LayoutResult<T> = Result<T, LayoutError>;

impl LayoutError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Check whether this is a configuration error.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }
}
