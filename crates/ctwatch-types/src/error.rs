//! Error types for ctwatch-types

use thiserror::Error;

/// Errors from type construction and decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid hex/base64 input or wrong digest length
    #[error("invalid encoding: {0}")]
    InvalidEncoding(String),

    /// JSON parse error for a consumed document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for ctwatch-types operations.
pub type Result<T> = std::result::Result<T, Error>;
