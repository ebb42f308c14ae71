//! Certificate Transparency inclusion checking
//!
//! ctwatch extracts the Signed Certificate Timestamps embedded in a TLS
//! leaf certificate and independently verifies that the certificate is
//! recorded in the append-only Merkle-tree log that issued each receipt.
//!
//! The pipeline, leaf to root: locate and decode the SCT-list extension
//! ([`x509::extract_scts`]), reconstruct the precertificate bytes the log
//! originally hashed ([`x509::reconstruct_precert_tbs`]), assemble the
//! RFC 6962 `MerkleTreeLeaf` and recompute the tree root from the log's
//! inclusion proof ([`merkle`]), and aggregate one outcome per SCT
//! ([`verify_certificate_scts`]).
//!
//! ```no_run
//! use ctwatch::{verify_certificate_scts, CertificateData, ChainData, VerifyOptions};
//! use ctwatch::types::LogDirectory;
//!
//! # async fn check(leaf_der: Vec<u8>, issuer_der: Vec<u8>, directory_json: &str)
//! #     -> ctwatch::Result<()> {
//! let directory = LogDirectory::from_json(directory_json)?;
//! let chain = ChainData::from_chain(vec![
//!     CertificateData::new(leaf_der),
//!     CertificateData::new(issuer_der),
//! ]);
//! let summary =
//!     verify_certificate_scts(&chain, &directory, &VerifyOptions::default()).await?;
//! println!("{}/{} SCTs verified", summary.verified, summary.total);
//! # Ok(())
//! # }
//! ```
//!
//! SCT signatures are not checked here: this core validates log
//! inclusion, not signature authenticity.

pub mod error;

// Re-export core crates
pub use ctwatch_log as log;
pub use ctwatch_merkle as merkle;
pub use ctwatch_types as types;
pub use ctwatch_verify as verify;
pub use ctwatch_x509 as x509;

pub use error::{Error, Result};
pub use ctwatch_types::{LogDirectory, Sct, Sha256Hash};
pub use ctwatch_verify::{
    verify_certificate_scts, CertificateData, ChainData, SctVerification, VerificationSummary,
    VerifyOptions,
};
pub use ctwatch_x509::extract_scts;
