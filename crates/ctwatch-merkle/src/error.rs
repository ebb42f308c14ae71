//! Error types for ctwatch-merkle

use thiserror::Error;

/// Errors from leaf construction and proof verification.
#[derive(Error, Debug)]
pub enum Error {
    /// Leaf index does not exist in a tree of the given size
    #[error("leaf index {index} is outside a tree of size {tree_size}")]
    LeafIndexOutOfRange { index: u64, tree_size: u64 },

    /// More sibling hashes than the path to the root can hold
    #[error("audit path is longer than the tree height allows")]
    PathTooLong,

    /// The path ended before reaching the root
    #[error("audit path ended before reaching the root")]
    PathTooShort,

    /// Recomputed root differs from the log's published root
    #[error("computed root {computed} does not match expected root {expected}")]
    RootMismatch { expected: String, computed: String },

    /// Tree sizes passed to a consistency check are not ordered
    #[error("invalid tree sizes: {0}")]
    InvalidTreeSize(String),

    /// Consistency proof has the wrong shape for the tree sizes
    #[error("invalid consistency proof: {0}")]
    InvalidProof(String),

    /// Entry exceeds the 24-bit length field of a MerkleTreeLeaf
    #[error("entry of {len} bytes exceeds the 2^24-1 byte leaf limit")]
    OversizedEntry { len: usize },
}

/// Result type for ctwatch-merkle operations.
pub type Result<T> = std::result::Result<T, Error>;
