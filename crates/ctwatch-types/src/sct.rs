//! Parsed Signed Certificate Timestamp records
//!
//! An [`Sct`] is the decoded form of one entry from the certificate's
//! embedded SCT list (RFC 6962 `SignedCertificateTimestampList`). Parsing
//! happens in `ctwatch-x509`; the record itself is immutable once built.

use crate::encoding::Sha256Hash;
use serde::Serialize;

/// TLS `HashAlgorithm` registry values carried in an SCT signature.
///
/// Unknown registry codes are preserved rather than rejected so a record
/// with a novel algorithm still renders and counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    None,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Unknown(u8),
}

impl HashAlgorithm {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => HashAlgorithm::None,
            1 => HashAlgorithm::Md5,
            2 => HashAlgorithm::Sha1,
            3 => HashAlgorithm::Sha224,
            4 => HashAlgorithm::Sha256,
            5 => HashAlgorithm::Sha384,
            6 => HashAlgorithm::Sha512,
            other => HashAlgorithm::Unknown(other),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HashAlgorithm::None => write!(f, "none"),
            HashAlgorithm::Md5 => write!(f, "md5"),
            HashAlgorithm::Sha1 => write!(f, "sha1"),
            HashAlgorithm::Sha224 => write!(f, "sha224"),
            HashAlgorithm::Sha256 => write!(f, "sha256"),
            HashAlgorithm::Sha384 => write!(f, "sha384"),
            HashAlgorithm::Sha512 => write!(f, "sha512"),
            HashAlgorithm::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

impl Serialize for HashAlgorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// TLS `SignatureAlgorithm` registry values carried in an SCT signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureAlgorithm {
    Anonymous,
    Rsa,
    Dsa,
    Ecdsa,
    Unknown(u8),
}

impl SignatureAlgorithm {
    pub fn from_code(code: u8) -> Self {
        match code {
            0 => SignatureAlgorithm::Anonymous,
            1 => SignatureAlgorithm::Rsa,
            2 => SignatureAlgorithm::Dsa,
            3 => SignatureAlgorithm::Ecdsa,
            other => SignatureAlgorithm::Unknown(other),
        }
    }
}

impl std::fmt::Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SignatureAlgorithm::Anonymous => write!(f, "anonymous"),
            SignatureAlgorithm::Rsa => write!(f, "rsa"),
            SignatureAlgorithm::Dsa => write!(f, "dsa"),
            SignatureAlgorithm::Ecdsa => write!(f, "ecdsa"),
            SignatureAlgorithm::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}

impl Serialize for SignatureAlgorithm {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Where an SCT was delivered from.
///
/// Only certificate-embedded SCTs are handled here; the variant exists so
/// records state their provenance explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SctOrigin {
    Embedded,
}

impl std::fmt::Display for SctOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SctOrigin::Embedded => write!(f, "embedded"),
        }
    }
}

/// One decoded Signed Certificate Timestamp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sct {
    /// SCT version byte (0 = v1)
    pub version: u8,
    /// SHA-256 identifier of the issuing log
    #[serde(with = "crate::encoding::hex_hash")]
    pub log_id: Sha256Hash,
    /// Milliseconds since the Unix epoch
    pub timestamp_ms: u64,
    /// Opaque SCT extensions (length-prefixed on the wire)
    #[serde(with = "crate::encoding::base64_bytes")]
    pub extensions: Vec<u8>,
    pub hash_algorithm: HashAlgorithm,
    pub signature_algorithm: SignatureAlgorithm,
    /// Raw signature bytes; not verified by this crate family
    #[serde(with = "crate::encoding::base64_bytes")]
    pub signature: Vec<u8>,
    pub origin: SctOrigin,
}

impl Sct {
    /// Lowercase-hex log id, the form used as a directory key.
    pub fn log_id_hex(&self) -> String {
        self.log_id.to_hex()
    }
}
