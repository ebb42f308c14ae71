//! Error types for ctwatch

use thiserror::Error;

/// Errors that can occur across the ctwatch crates.
#[derive(Error, Debug)]
pub enum Error {
    /// Types error
    #[error("types error: {0}")]
    Types(#[from] ctwatch_types::Error),

    /// Certificate decode error
    #[error("x509 error: {0}")]
    X509(#[from] ctwatch_x509::Error),

    /// Merkle tree error
    #[error("merkle error: {0}")]
    Merkle(#[from] ctwatch_merkle::Error),

    /// Log API error
    #[error("log error: {0}")]
    Log(#[from] ctwatch_log::Error),

    /// Verification error
    #[error("verification error: {0}")]
    Verify(#[from] ctwatch_verify::Error),
}

/// Result type for ctwatch operations.
pub type Result<T> = std::result::Result<T, Error>;
