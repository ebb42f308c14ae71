//! The per-chain verification orchestrator

use crate::error::{Error, Result};
use ctwatch_log::LogClient;
use ctwatch_merkle::{hash_leaf, precert_leaf, verify_inclusion};
use ctwatch_types::{LogDirectory, Sct, Sha256Hash};
use ctwatch_x509::{extract_scts, reconstruct_precert_tbs, subject_public_key_info};
use futures::StreamExt;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default bound on concurrent per-SCT verifications.
pub const DEFAULT_MAX_CONCURRENCY: usize = 4;

/// Tuning knobs for a chain check.
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    /// Timeout applied to every log API request
    pub timeout: Duration,
    /// Upper bound on SCTs verified concurrently
    pub max_concurrency: usize,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl VerifyOptions {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }
}

/// One certificate of the inspected chain, as supplied by the
/// interception layer.
#[derive(Debug, Clone)]
pub struct CertificateData {
    /// Raw DER bytes
    pub der: Vec<u8>,
    /// Precomputed SHA-256 of the SubjectPublicKeyInfo, when the
    /// collaborator already has it; computed locally otherwise
    pub spki_sha256: Option<Sha256Hash>,
}

impl CertificateData {
    pub fn new(der: Vec<u8>) -> Self {
        Self {
            der,
            spki_sha256: None,
        }
    }

    pub fn with_spki_sha256(der: Vec<u8>, spki_sha256: Sha256Hash) -> Self {
        Self {
            der,
            spki_sha256: Some(spki_sha256),
        }
    }
}

/// The input to one chain check: the DER chain (index 0 = leaf,
/// increasing toward the root) and the leaf's parsed SCTs.
#[derive(Debug, Clone)]
pub struct ChainData {
    pub certificates: Vec<CertificateData>,
    pub scts: Vec<Sct>,
}

impl ChainData {
    /// Build the input by extracting the embedded SCTs from the leaf.
    pub fn from_chain(certificates: Vec<CertificateData>) -> Self {
        let scts = certificates
            .first()
            .map(|leaf| extract_scts(&leaf.der))
            .unwrap_or_default();
        Self { certificates, scts }
    }

    /// Build the input from SCTs the caller already parsed.
    pub fn with_scts(certificates: Vec<CertificateData>, scts: Vec<Sct>) -> Self {
        Self { certificates, scts }
    }
}

/// The outcome for one SCT.
///
/// `detail` is diagnostic only: a fetch failure and a cryptographic
/// mismatch both score as `verified = false`, and the boolean is the
/// entire pass/fail contract.
#[derive(Debug, Clone, Serialize)]
pub struct SctVerification {
    pub sct: Sct,
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Aggregate outcome of one chain check.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    pub total: usize,
    pub verified: usize,
    pub failed: usize,
    pub results: Vec<SctVerification>,
    pub verification_time_ms: u64,
}

impl VerificationSummary {
    fn from_results(results: Vec<SctVerification>, verification_time_ms: u64) -> Self {
        let verified = results.iter().filter(|r| r.verified).count();
        Self {
            total: results.len(),
            verified,
            failed: results.len() - verified,
            results,
            verification_time_ms,
        }
    }
}

/// Verify every embedded SCT of a chain against its issuing log.
///
/// Requires at least a leaf and an issuer certificate and at least one
/// parsed SCT; anything less returns the zero summary. The
/// precertificate TBS and the issuer key hash are computed once (a
/// malformed certificate is a hard error here), then each SCT is checked
/// independently over those two read-only values under bounded
/// concurrency. Per-SCT failures of any kind never cross SCT boundaries.
/// Dropping the returned future abandons in-flight fetches.
pub async fn verify_certificate_scts(
    chain: &ChainData,
    directory: &LogDirectory,
    options: &VerifyOptions,
) -> Result<VerificationSummary> {
    let started = Instant::now();

    if chain.certificates.len() < 2 || chain.scts.is_empty() {
        debug!(
            certificates = chain.certificates.len(),
            scts = chain.scts.len(),
            "nothing to verify"
        );
        return Ok(VerificationSummary::default());
    }

    let leaf = &chain.certificates[0];
    let issuer = &chain.certificates[1];

    let tbs = reconstruct_precert_tbs(&leaf.der)?;
    let issuer_key_hash = match issuer.spki_sha256 {
        Some(hash) => hash,
        None => {
            let spki = subject_public_key_info(&issuer.der)?;
            Sha256Hash::from_bytes(Sha256::digest(spki).into())
        }
    };

    let client = LogClient::new(options.timeout)?;

    let results: Vec<SctVerification> = futures::stream::iter(chain.scts.clone())
        .map(|sct| verify_one(&client, directory, sct, &tbs, &issuer_key_hash))
        .buffered(options.max_concurrency.max(1))
        .collect()
        .await;

    let elapsed = started.elapsed().as_millis() as u64;
    Ok(VerificationSummary::from_results(results, elapsed))
}

async fn verify_one(
    client: &LogClient,
    directory: &LogDirectory,
    sct: Sct,
    tbs: &[u8],
    issuer_key_hash: &Sha256Hash,
) -> SctVerification {
    match check_inclusion(client, directory, &sct, tbs, issuer_key_hash).await {
        Ok(()) => {
            debug!(log_id = %sct.log_id, "SCT inclusion verified");
            SctVerification {
                sct,
                verified: true,
                detail: None,
            }
        }
        Err(e) => {
            warn!(log_id = %sct.log_id, error = %e, "SCT not verified");
            SctVerification {
                sct,
                verified: false,
                detail: Some(e.to_string()),
            }
        }
    }
}

async fn check_inclusion(
    client: &LogClient,
    directory: &LogDirectory,
    sct: &Sct,
    tbs: &[u8],
    issuer_key_hash: &Sha256Hash,
) -> Result<()> {
    let metadata = directory
        .lookup(&sct.log_id)
        .ok_or_else(|| Error::UnknownLog(sct.log_id_hex()))?;

    let leaf = precert_leaf(sct.timestamp_ms, issuer_key_hash, tbs)?;
    let leaf_hash = hash_leaf(&leaf);

    let head = client.tree_head_for(metadata).await?;
    let proof = client
        .proof_by_hash(&metadata.url, &leaf_hash, head.tree_size)
        .await?;

    verify_inclusion(
        &leaf_hash,
        proof.leaf_index,
        head.tree_size,
        &proof.audit_path,
        &head.root_hash,
    )?;
    Ok(())
}
