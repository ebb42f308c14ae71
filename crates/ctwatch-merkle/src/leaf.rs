//! MerkleTreeLeaf construction (RFC 6962 §3.4)
//!
//! The leaf is an ephemeral byte structure assembled per verification
//! attempt; both entry kinds share the v1 `TimestampedEntry` framing:
//!
//! ```text
//! version(1) | leaf_type(1) | timestamp(8) | entry_type(2) | entry | ext_len(2)
//! ```

use crate::error::{Error, Result};
use ctwatch_types::Sha256Hash;

const VERSION_V1: u8 = 0;
const LEAF_TYPE_TIMESTAMPED_ENTRY: u8 = 0;
const ENTRY_TYPE_X509: u16 = 0x0000;
const ENTRY_TYPE_PRECERT: u16 = 0x0001;

/// Largest entry body a 24-bit length field can frame.
pub const MAX_ENTRY_LEN: usize = (1 << 24) - 1;

/// Build the leaf for a `precert_entry`:
/// `0x00 | 0x00 | timestamp:8 | 0x0001 | issuer_key_hash:32 | tbs_len:3 |
/// tbs | 0x0000`.
///
/// `issuer_key_hash` is the SHA-256 digest of the issuer certificate's
/// SubjectPublicKeyInfo; `tbs` is the reconstructed precertificate
/// TBSCertificate.
pub fn precert_leaf(
    timestamp_ms: u64,
    issuer_key_hash: &Sha256Hash,
    tbs: &[u8],
) -> Result<Vec<u8>> {
    let mut leaf = Vec::with_capacity(47 + tbs.len());
    push_header(&mut leaf, timestamp_ms, ENTRY_TYPE_PRECERT);
    leaf.extend_from_slice(issuer_key_hash.as_slice());
    push_u24_framed(&mut leaf, tbs)?;
    leaf.extend_from_slice(&[0x00, 0x00]); // empty extensions
    Ok(leaf)
}

/// Build the leaf for an `x509_entry`: the final certificate in place of
/// the issuer-key-hash + TBS pair.
pub fn x509_leaf(timestamp_ms: u64, certificate: &[u8]) -> Result<Vec<u8>> {
    let mut leaf = Vec::with_capacity(15 + certificate.len());
    push_header(&mut leaf, timestamp_ms, ENTRY_TYPE_X509);
    push_u24_framed(&mut leaf, certificate)?;
    leaf.extend_from_slice(&[0x00, 0x00]);
    Ok(leaf)
}

fn push_header(leaf: &mut Vec<u8>, timestamp_ms: u64, entry_type: u16) {
    leaf.push(VERSION_V1);
    leaf.push(LEAF_TYPE_TIMESTAMPED_ENTRY);
    leaf.extend_from_slice(&timestamp_ms.to_be_bytes());
    leaf.extend_from_slice(&entry_type.to_be_bytes());
}

fn push_u24_framed(leaf: &mut Vec<u8>, body: &[u8]) -> Result<()> {
    if body.len() > MAX_ENTRY_LEN {
        return Err(Error::OversizedEntry { len: body.len() });
    }
    leaf.extend_from_slice(&(body.len() as u32).to_be_bytes()[1..]);
    leaf.extend_from_slice(body);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precert_leaf_layout_is_bit_exact() {
        let issuer_key_hash = Sha256Hash::from_bytes([0xcd; 32]);
        let tbs = [0x30, 0x03, 0x02, 0x01, 0x2a];
        let leaf = precert_leaf(0x0102_0304_0506_0708, &issuer_key_hash, &tbs).unwrap();

        let mut expected = vec![0x00, 0x00]; // v1, timestamped_entry
        expected.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);
        expected.extend_from_slice(&[0x00, 0x01]); // precert_entry
        expected.extend_from_slice(&[0xcd; 32]);
        expected.extend_from_slice(&[0x00, 0x00, 0x05]); // 24-bit tbs length
        expected.extend_from_slice(&tbs);
        expected.extend_from_slice(&[0x00, 0x00]); // empty extensions
        assert_eq!(leaf, expected);
    }

    #[test]
    fn x509_leaf_layout_is_bit_exact() {
        let cert = [0xde, 0xad, 0xbe, 0xef];
        let leaf = x509_leaf(1, &cert).unwrap();

        let mut expected = vec![0x00, 0x00];
        expected.extend_from_slice(&1u64.to_be_bytes());
        expected.extend_from_slice(&[0x00, 0x00]); // x509_entry
        expected.extend_from_slice(&[0x00, 0x00, 0x04]);
        expected.extend_from_slice(&cert);
        expected.extend_from_slice(&[0x00, 0x00]);
        assert_eq!(leaf, expected);
    }

    #[test]
    fn oversized_tbs_is_rejected() {
        let issuer_key_hash = Sha256Hash::from_bytes([0; 32]);
        let tbs = vec![0u8; MAX_ENTRY_LEN + 1];
        assert!(matches!(
            precert_leaf(0, &issuer_key_hash, &tbs),
            Err(Error::OversizedEntry { .. })
        ));
    }

    #[test]
    fn max_sized_tbs_is_framed() {
        let issuer_key_hash = Sha256Hash::from_bytes([0; 32]);
        let tbs = vec![0u8; MAX_ENTRY_LEN];
        let leaf = precert_leaf(0, &issuer_key_hash, &tbs).unwrap();
        // length field reads 0xffffff
        assert_eq!(&leaf[44..47], &[0xff, 0xff, 0xff]);
    }
}
