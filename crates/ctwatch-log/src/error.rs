//! Error types for ctwatch-log

use thiserror::Error;

/// Errors from talking to a log's HTTP API.
///
/// Every variant scores a single SCT as unverifiable; none of them aborts
/// the verification of sibling SCTs.
#[derive(Error, Debug)]
pub enum Error {
    /// Transport failure, including timeouts
    #[error("HTTP error: {0}")]
    Http(String),

    /// The log answered with a non-success status
    #[error("log returned {status} for {endpoint}")]
    Status { status: u16, endpoint: String },

    /// The response body did not decode to the documented shape
    #[error("invalid log response: {0}")]
    Response(String),

    /// A frozen log's directory entry is missing its final tree head
    #[error("log \"{0}\" is frozen but carries no final tree head")]
    MissingFinalTreeHead(String),
}

/// Result type for ctwatch-log operations.
pub type Result<T> = std::result::Result<T, Error>;
