//! SCT inclusion verification orchestration
//!
//! Ties the pipeline together: reconstruct the precertificate once,
//! compute the issuer key hash once, then check every embedded SCT
//! against its issuing log independently and aggregate the outcomes.

pub mod error;
pub mod verify;

pub use error::{Error, Result};
pub use verify::{
    verify_certificate_scts, CertificateData, ChainData, SctVerification, VerificationSummary,
    VerifyOptions,
};
