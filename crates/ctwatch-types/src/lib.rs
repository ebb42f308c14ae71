//! Core types for ctwatch
//!
//! This crate provides the data model shared by the ctwatch crates: the
//! parsed SCT record, the consumed log-directory types, tree heads and
//! audit proofs, and type-safe encoding wrappers.

pub mod directory;
pub mod encoding;
pub mod error;
pub mod sct;

pub use directory::{AuditProof, LogDirectory, LogMetadata, LogState, TreeHead};
pub use encoding::{Base64, Sha256Hash};
pub use error::{Error, Result};
pub use sct::{HashAlgorithm, Sct, SctOrigin, SignatureAlgorithm};
