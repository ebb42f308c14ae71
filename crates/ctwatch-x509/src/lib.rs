//! Exact-format DER decoding for Certificate Transparency
//!
//! This crate owns the byte-level work of the pipeline: a minimal
//! recursive-descent DER reader, extraction of the embedded SCT list from
//! a certificate, and reconstruction of the precertificate bytes the log
//! originally hashed (the certificate minus the SCT extension).
//!
//! It deliberately implements only the ASN.1 shapes this work needs;
//! general X.509 parsing is out of scope.

pub mod der;
pub mod error;
pub mod precert;
pub mod sct_list;

pub use der::{encode_big_endian, encode_length, find_subsequence, parse_length, Reader, Tlv};
pub use error::{Error, Result};
pub use precert::{reconstruct_precert_tbs, subject_public_key_info, tbs_certificate};
pub use sct_list::{extract_scts, SCT_LIST_OID};
