//! Error types for ctwatch-verify

use thiserror::Error;

/// Verification-pipeline errors.
///
/// Only [`Error::Decode`] (and a failed HTTP client build) escapes
/// [`crate::verify_certificate_scts`]; everything else is confined to the
/// single SCT it concerns and scored as `verified = false`.
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed certificate DER; fatal for the whole chain check
    #[error("certificate decode error: {0}")]
    Decode(#[from] ctwatch_x509::Error),

    /// The SCT names a log absent from the directory
    #[error("no directory entry for log {0}")]
    UnknownLog(String),

    /// Tree head or proof fetch failed
    #[error(transparent)]
    Log(#[from] ctwatch_log::Error),

    /// Leaf construction or proof verification failed
    #[error(transparent)]
    Proof(#[from] ctwatch_merkle::Error),
}

/// Result type for ctwatch-verify operations.
pub type Result<T> = std::result::Result<T, Error>;
