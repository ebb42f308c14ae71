//! HTTP client for the CT v1 log API

use crate::api::{ProofByHashResponse, SignedTreeHeadResponse};
use crate::error::{Error, Result};
use ctwatch_types::{AuditProof, LogMetadata, Sha256Hash, TreeHead};
use std::time::Duration;
use tracing::debug;

/// A client for the `ct/v1` endpoints of any log.
///
/// One request per call, no retries: a failure scores the SCT under
/// verification as unverifiable, and retry policy belongs to the caller's
/// transport layer.
pub struct LogClient {
    http: reqwest::Client,
}

impl LogClient {
    /// Create a client whose every request carries `timeout`.
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;
        Ok(Self { http })
    }

    /// Wrap an existing `reqwest::Client`; the caller owns its timeout
    /// configuration.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Resolve the tree head to verify against for a log.
    ///
    /// Frozen logs are never queried; their directory entry carries the
    /// fixed final tree head.
    pub async fn tree_head_for(&self, metadata: &LogMetadata) -> Result<TreeHead> {
        if metadata.is_frozen() {
            return metadata
                .final_tree_head
                .clone()
                .ok_or_else(|| Error::MissingFinalTreeHead(metadata.description.clone()));
        }
        self.signed_tree_head(&metadata.url).await
    }

    /// `GET {base}ct/v1/get-sth`
    pub async fn signed_tree_head(&self, base_url: &str) -> Result<TreeHead> {
        let url = endpoint(base_url, "ct/v1/get-sth");
        debug!(%url, "fetching signed tree head");
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                endpoint: url,
            });
        }

        let body: SignedTreeHeadResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse JSON: {e}")))?;
        body.into_tree_head()
    }

    /// `GET {base}ct/v1/get-proof-by-hash?hash=<base64>&tree_size=<n>`
    pub async fn proof_by_hash(
        &self,
        base_url: &str,
        leaf_hash: &Sha256Hash,
        tree_size: u64,
    ) -> Result<AuditProof> {
        let url = endpoint(base_url, "ct/v1/get-proof-by-hash");
        debug!(%url, tree_size, "fetching inclusion proof");
        let response = self
            .http
            .get(&url)
            .query(&[
                ("hash", leaf_hash.to_base64()),
                ("tree_size", tree_size.to_string()),
            ])
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Status {
                status: response.status().as_u16(),
                endpoint: url,
            });
        }

        let body: ProofByHashResponse = response
            .json()
            .await
            .map_err(|e| Error::Http(format!("failed to parse JSON: {e}")))?;
        body.into_audit_proof()
    }
}

fn endpoint(base_url: &str, path: &str) -> String {
    if base_url.ends_with('/') {
        format!("{base_url}{path}")
    } else {
        format!("{base_url}/{path}")
    }
}
