//! RFC 6962 Merkle tree operations for ctwatch
//!
//! Tree hashing with leaf/node domain separation, `MerkleTreeLeaf`
//! construction for log entries, and verification of inclusion and
//! consistency proofs.

pub mod error;
pub mod leaf;
pub mod proof;
pub mod tree;

pub use error::{Error, Result};
pub use leaf::{precert_leaf, x509_leaf, MAX_ENTRY_LEN};
pub use proof::{verify_consistency, verify_inclusion};
pub use tree::{hash_children, hash_leaf, HASH_SIZE, LEAF_HASH_PREFIX, NODE_HASH_PREFIX};
