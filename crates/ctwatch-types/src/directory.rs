//! Consumed log-directory types and per-verification tree structures
//!
//! The log directory maps a log's 32-byte identifier (lowercase hex) to
//! operator metadata and a submission URL. It is maintained and refreshed
//! by an external collaborator; this crate only deserializes and reads it.

use crate::encoding::Sha256Hash;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Directory lifecycle state of a log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogState {
    /// Accepting submissions and serving proofs
    Usable,
    /// Frozen; the directory carries its final tree head
    Readonly,
    /// No longer operated; the directory carries its final tree head
    Retired,
}

/// A log's (tree size, root hash) pair.
///
/// Either fetched live from `get-sth` or taken verbatim from the directory
/// for frozen logs. Computed per verification attempt and discarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeHead {
    pub tree_size: u64,
    #[serde(with = "crate::encoding::base64_hash")]
    pub root_hash: Sha256Hash,
}

/// An inclusion proof as returned by `get-proof-by-hash`.
///
/// `audit_path` is ordered leaf-to-root; every entry is a 32-byte sibling
/// hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditProof {
    pub leaf_index: u64,
    pub audit_path: Vec<Sha256Hash>,
}

/// Directory metadata for one log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogMetadata {
    pub operator: String,
    pub description: String,
    /// Submission base URL; `ct/v1/...` paths are resolved against it
    pub url: String,
    pub state: LogState,
    /// Fixed final tree head, present when the log is frozen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_tree_head: Option<TreeHead>,
}

impl LogMetadata {
    /// Whether the log no longer advances and must not be queried for a
    /// fresh tree head.
    pub fn is_frozen(&self) -> bool {
        matches!(self.state, LogState::Readonly | LogState::Retired)
    }
}

/// Map from lowercase-hex log id to [`LogMetadata`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LogDirectory(HashMap<String, LogMetadata>);

impl LogDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a directory document from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn insert(&mut self, log_id: &Sha256Hash, metadata: LogMetadata) {
        self.0.insert(log_id.to_hex(), metadata);
    }

    /// Look up the log that issued an SCT with this id.
    pub fn lookup(&self, log_id: &Sha256Hash) -> Option<&LogMetadata> {
        self.0.get(&log_id.to_hex())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
