//! Wire-format response types for the CT v1 API
//!
//! Only the fields this core consumes are declared; logs return more
//! (timestamps, signatures) and serde skips them.

use crate::error::{Error, Result};
use ctwatch_types::{AuditProof, Sha256Hash, TreeHead};
use serde::Deserialize;

/// `GET {base}ct/v1/get-sth` response body.
#[derive(Debug, Deserialize)]
pub struct SignedTreeHeadResponse {
    pub tree_size: u64,
    /// base64 of the 32-byte root
    pub sha256_root_hash: String,
}

impl SignedTreeHeadResponse {
    pub fn into_tree_head(self) -> Result<TreeHead> {
        let root_hash = Sha256Hash::from_base64(&self.sha256_root_hash)
            .map_err(|e| Error::Response(format!("sha256_root_hash: {e}")))?;
        Ok(TreeHead {
            tree_size: self.tree_size,
            root_hash,
        })
    }
}

/// `GET {base}ct/v1/get-proof-by-hash` response body.
#[derive(Debug, Deserialize)]
pub struct ProofByHashResponse {
    pub leaf_index: u64,
    /// base64 sibling hashes, ordered leaf-to-root
    pub audit_path: Vec<String>,
}

impl ProofByHashResponse {
    pub fn into_audit_proof(self) -> Result<AuditProof> {
        let audit_path = self
            .audit_path
            .iter()
            .map(|entry| {
                Sha256Hash::from_base64(entry)
                    .map_err(|e| Error::Response(format!("audit_path entry: {e}")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AuditProof {
            leaf_index: self.leaf_index,
            audit_path,
        })
    }
}
