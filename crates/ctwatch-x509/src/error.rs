//! Error types for ctwatch-x509

use thiserror::Error;

/// Structural DER decode failures.
///
/// These are hard errors: reconstructing a precertificate from malformed
/// bytes would silently verify against the wrong input, so nothing here is
/// recoverable by the caller beyond rejecting the certificate.
#[derive(Error, Debug)]
pub enum Error {
    /// Input ended before a declared structure was complete
    #[error("unexpected end of DER input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A declared length runs past the end of the enclosing buffer
    #[error("DER length at offset {offset} overruns the buffer")]
    LengthOutOfBounds { offset: usize },

    /// A length field itself is malformed (reserved or oversized form)
    #[error("malformed DER length at offset {offset}")]
    MalformedLength { offset: usize },

    /// Found a different tag than the structure requires
    #[error("expected {expected} at offset {offset}, found tag {found:#04x}")]
    UnexpectedTag {
        expected: &'static str,
        found: u8,
        offset: usize,
    },

    /// The extensions block exceeds the defensive size cap
    #[error("extensions block of {len} bytes exceeds the {cap}-byte cap")]
    OversizedExtensions { len: usize, cap: usize },

    /// A value does not fit the fixed-width big-endian field
    #[error("value {value} does not fit in {width} bytes")]
    ValueOutOfRange { value: u64, width: usize },
}

/// Result type for ctwatch-x509 operations.
pub type Result<T> = std::result::Result<T, Error>;
