//! Embedded SCT-list extraction
//!
//! Locates the SCT-list extension (OID `1.3.6.1.4.1.11129.2.4.2`) inside a
//! certificate's DER bytes and decodes the fixed-format timestamp entries.
//!
//! Extraction fails soft: a certificate without the extension, a malformed
//! wrapper, or a truncated trailing entry yields an empty or partial list,
//! never an error. Absence of SCTs is a legitimate, common state, and one
//! bad entry must not hide the valid entries before it.

use crate::der::{Reader, TAG_OCTET_STRING};
use ctwatch_types::{HashAlgorithm, Sct, SctOrigin, Sha256Hash, SignatureAlgorithm};
use tracing::{debug, warn};

/// DER encoding of the SCT-list extension OID `1.3.6.1.4.1.11129.2.4.2`,
/// tag and length bytes included.
pub const SCT_LIST_OID: [u8; 12] = [
    0x06, 0x0a, 0x2b, 0x06, 0x01, 0x04, 0x01, 0xd6, 0x79, 0x02, 0x04, 0x02,
];

/// Decode every embedded SCT found in `cert_der`.
pub fn extract_scts(cert_der: &[u8]) -> Vec<Sct> {
    let Some(oid_pos) = cert_der
        .windows(SCT_LIST_OID.len())
        .position(|window| window == SCT_LIST_OID)
    else {
        debug!("certificate carries no SCT-list extension");
        return Vec::new();
    };

    // Advance to the first OCTET STRING tag after the OID; this skips the
    // optional critical BOOLEAN of the extension
    let mut pos = oid_pos + SCT_LIST_OID.len();
    while pos < cert_der.len() && cert_der[pos] != TAG_OCTET_STRING {
        pos += 1;
    }

    match list_region(cert_der, pos) {
        Some(region) => parse_entries(region),
        None => {
            warn!("malformed SCT-list extension wrapper");
            Vec::new()
        }
    }
}

/// Unwrap the doubled OCTET STRING and the 2-byte list length, returning
/// the byte region holding the serialized entries.
fn list_region(buf: &[u8], pos: usize) -> Option<&[u8]> {
    let mut reader = Reader::at(buf, pos);
    let outer = reader.expect_tlv(TAG_OCTET_STRING, "OCTET STRING").ok()?;

    // RFC 6962 double-wraps the list: the extension value is an OCTET
    // STRING whose content is itself an OCTET STRING
    let mut inner = Reader::new(outer.content);
    let wrapped = inner.expect_tlv(TAG_OCTET_STRING, "OCTET STRING").ok()?;

    let mut list = Reader::new(wrapped.content);
    let declared = read_u16(&mut list)? as usize;
    let available = list.remaining();
    if declared > available {
        warn!(
            declared,
            available, "SCT list length exceeds the wrapper; parsing the available bytes"
        );
    }
    list.read_bytes(declared.min(available)).ok()
}

fn parse_entries(region: &[u8]) -> Vec<Sct> {
    let mut scts = Vec::new();
    let mut reader = Reader::new(region);
    while reader.remaining() > 0 {
        match parse_entry(&mut reader) {
            Some(sct) => scts.push(sct),
            None => {
                warn!(
                    parsed = scts.len(),
                    "truncated SCT entry; keeping the entries parsed so far"
                );
                break;
            }
        }
    }
    scts
}

/// Decode one fixed-format entry:
/// `version(1) | log_id(32) | timestamp(8) | ext_len(2) | extensions |
/// hash_alg(1) | sig_alg(1) | sig_len(2) | signature`.
fn parse_entry(reader: &mut Reader<'_>) -> Option<Sct> {
    let version = read_u8(reader)?;
    let log_id = Sha256Hash::try_from_slice(reader.read_bytes(32).ok()?).ok()?;
    let timestamp_ms = read_u64(reader)?;
    let ext_len = read_u16(reader)? as usize;
    let extensions = reader.read_bytes(ext_len).ok()?.to_vec();
    let hash_algorithm = HashAlgorithm::from_code(read_u8(reader)?);
    let signature_algorithm = SignatureAlgorithm::from_code(read_u8(reader)?);
    let sig_len = read_u16(reader)? as usize;
    let signature = reader.read_bytes(sig_len).ok()?.to_vec();

    Some(Sct {
        version,
        log_id,
        timestamp_ms,
        extensions,
        hash_algorithm,
        signature_algorithm,
        signature,
        origin: SctOrigin::Embedded,
    })
}

fn read_u8(reader: &mut Reader<'_>) -> Option<u8> {
    Some(reader.read_bytes(1).ok()?[0])
}

fn read_u16(reader: &mut Reader<'_>) -> Option<u16> {
    let bytes = reader.read_bytes(2).ok()?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

fn read_u64(reader: &mut Reader<'_>) -> Option<u64> {
    let bytes = reader.read_bytes(8).ok()?;
    Some(u64::from_be_bytes(bytes.try_into().ok()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::der::encode_length;

    fn tlv(tag: u8, content: &[u8]) -> Vec<u8> {
        let mut out = vec![tag];
        out.extend_from_slice(&encode_length(content.len()));
        out.extend_from_slice(content);
        out
    }

    fn encode_entry(
        version: u8,
        log_id: [u8; 32],
        timestamp_ms: u64,
        extensions: &[u8],
        hash_alg: u8,
        sig_alg: u8,
        signature: &[u8],
    ) -> Vec<u8> {
        let mut out = vec![version];
        out.extend_from_slice(&log_id);
        out.extend_from_slice(&timestamp_ms.to_be_bytes());
        out.extend_from_slice(&(extensions.len() as u16).to_be_bytes());
        out.extend_from_slice(extensions);
        out.push(hash_alg);
        out.push(sig_alg);
        out.extend_from_slice(&(signature.len() as u16).to_be_bytes());
        out.extend_from_slice(signature);
        out
    }

    /// Surround an encoded entry list with the extension framing: OID,
    /// critical flag, doubled OCTET STRING, 2-byte list length.
    fn wrap_in_extension(list: &[u8], declared: Option<u16>) -> Vec<u8> {
        let mut framed = (declared.unwrap_or(list.len() as u16)).to_be_bytes().to_vec();
        framed.extend_from_slice(list);
        let inner = tlv(TAG_OCTET_STRING, &framed);
        let value = tlv(TAG_OCTET_STRING, &inner);

        let mut ext = vec![0xde, 0xad]; // leading bytes from surrounding structure
        ext.extend_from_slice(&SCT_LIST_OID);
        ext.extend_from_slice(&[0x01, 0x01, 0xff]); // critical BOOLEAN
        ext.extend_from_slice(&value);
        ext.extend_from_slice(&[0xbe, 0xef]);
        ext
    }

    #[test]
    fn buffer_without_oid_yields_empty() {
        let buf = tlv(0x30, &[0x02, 0x01, 0x05]);
        assert!(extract_scts(&buf).is_empty());
        assert!(extract_scts(&[]).is_empty());
    }

    #[test]
    fn two_entry_list_decodes_both() {
        let sig = [0x30, 0x06, 0x02, 0x01, 0x01, 0x02, 0x01, 0x02];
        let mut list = encode_entry(0, [0x11; 32], 1_600_000_000_000, &[], 4, 3, &sig);
        list.extend_from_slice(&encode_entry(
            0,
            [0x22; 32],
            1_600_000_111_000,
            &[0xaa, 0xbb],
            5,
            1,
            &sig,
        ));
        let buf = wrap_in_extension(&list, None);

        let scts = extract_scts(&buf);
        assert_eq!(scts.len(), 2);

        assert_eq!(scts[0].version, 0);
        assert_eq!(scts[0].log_id, Sha256Hash::from_bytes([0x11; 32]));
        assert_eq!(scts[0].timestamp_ms, 1_600_000_000_000);
        assert!(scts[0].extensions.is_empty());
        assert_eq!(scts[0].hash_algorithm, HashAlgorithm::Sha256);
        assert_eq!(scts[0].signature_algorithm, SignatureAlgorithm::Ecdsa);
        assert_eq!(scts[0].signature, sig);
        assert_eq!(scts[0].origin, SctOrigin::Embedded);

        assert_eq!(scts[1].log_id, Sha256Hash::from_bytes([0x22; 32]));
        assert_eq!(scts[1].extensions, vec![0xaa, 0xbb]);
        assert_eq!(scts[1].hash_algorithm, HashAlgorithm::Sha384);
        assert_eq!(scts[1].signature_algorithm, SignatureAlgorithm::Rsa);
    }

    #[test]
    fn truncated_trailing_entry_keeps_earlier_ones() {
        let mut list = encode_entry(0, [0x33; 32], 1_500_000_000_000, &[], 4, 3, &[0x01; 4]);
        // a second entry cut off in the middle of its log id
        list.push(0);
        list.extend_from_slice(&[0x44; 10]);
        let buf = wrap_in_extension(&list, None);

        let scts = extract_scts(&buf);
        assert_eq!(scts.len(), 1);
        assert_eq!(scts[0].log_id, Sha256Hash::from_bytes([0x33; 32]));
    }

    #[test]
    fn declared_length_beyond_wrapper_parses_available_bytes() {
        let list = encode_entry(0, [0x55; 32], 42, &[], 4, 3, &[0x01; 4]);
        let buf = wrap_in_extension(&list, Some(list.len() as u16 + 100));
        let scts = extract_scts(&buf);
        assert_eq!(scts.len(), 1);
    }

    #[test]
    fn unknown_algorithm_codes_are_preserved() {
        let list = encode_entry(0, [0x66; 32], 42, &[], 7, 9, &[0x01; 4]);
        let buf = wrap_in_extension(&list, None);
        let scts = extract_scts(&buf);
        assert_eq!(scts.len(), 1);
        assert_eq!(scts[0].hash_algorithm.to_string(), "unknown(7)");
        assert_eq!(scts[0].signature_algorithm.to_string(), "unknown(9)");
    }

    #[test]
    fn single_wrapped_list_is_rejected_softly() {
        // only one OCTET STRING layer where two are required
        let list = encode_entry(0, [0x77; 32], 42, &[], 4, 3, &[0x01; 4]);
        let mut framed = (list.len() as u16).to_be_bytes().to_vec();
        framed.extend_from_slice(&list);
        let value = tlv(TAG_OCTET_STRING, &framed);

        let mut buf = SCT_LIST_OID.to_vec();
        buf.extend_from_slice(&value);
        assert!(extract_scts(&buf).is_empty());
    }

    #[test]
    fn oid_at_end_of_buffer_yields_empty() {
        let buf = SCT_LIST_OID.to_vec();
        assert!(extract_scts(&buf).is_empty());
    }
}
