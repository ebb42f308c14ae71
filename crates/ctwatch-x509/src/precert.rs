//! Precertificate reconstruction
//!
//! Recovers the exact bytes the log originally hashed: the TBSCertificate
//! with the SCT-list extension removed and lengths rewritten. Unlike
//! extraction, everything here fails hard — verifying an inclusion proof
//! against wrong bytes produces false negatives indistinguishable from
//! real log failures, so a structural decode problem must surface.

use crate::der::{
    encode_length, find_subsequence, Reader, TAG_EXTENSIONS, TAG_INTEGER, TAG_SEQUENCE,
    TAG_VERSION,
};
use crate::error::{Error, Result};
use crate::sct_list::SCT_LIST_OID;

/// Defensive cap on the extensions block content.
pub const MAX_EXTENSIONS_LEN: usize = 10_000;

/// Slice the TBSCertificate (tag, length and content) out of a
/// certificate.
pub fn tbs_certificate(cert_der: &[u8]) -> Result<&[u8]> {
    let mut reader = Reader::new(cert_der);
    let cert = reader.expect_tlv(TAG_SEQUENCE, "certificate SEQUENCE")?;
    let mut fields = Reader::new(cert.content);
    let tbs = fields.expect_tlv(TAG_SEQUENCE, "TBSCertificate SEQUENCE")?;
    Ok(&cert.content[tbs.start..tbs.end])
}

/// Reconstruct the precertificate TBSCertificate from a full certificate.
pub fn reconstruct_precert_tbs(cert_der: &[u8]) -> Result<Vec<u8>> {
    strip_sct_extension(tbs_certificate(cert_der)?)
}

/// Remove the SCT-list extension from a TBSCertificate and rewrite the
/// enclosing lengths. Returns the input unchanged when there is no
/// extensions field or no SCT extension inside it.
pub fn strip_sct_extension(tbs: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Reader::new(tbs);
    let outer = reader.expect_tlv(TAG_SEQUENCE, "TBSCertificate SEQUENCE")?;

    let mut fields = Reader::new(outer.content);
    while fields.remaining() > 0 {
        let field = fields.read_tlv()?;
        if field.tag != TAG_EXTENSIONS {
            continue;
        }
        // The OID must actually occur inside the candidate; a [3] field
        // without it means there is nothing to strip
        if !find_subsequence(field.content, &SCT_LIST_OID) {
            return Ok(tbs.to_vec());
        }

        let rebuilt = rebuild_extensions(field.content)?;

        let mut content =
            Vec::with_capacity(outer.content.len() - (field.end - field.start) + rebuilt.len());
        content.extend_from_slice(&outer.content[..field.start]);
        content.extend_from_slice(&rebuilt);
        content.extend_from_slice(&outer.content[field.end..]);

        let mut out = Vec::with_capacity(content.len() + 5);
        out.push(TAG_SEQUENCE);
        out.extend_from_slice(&encode_length(content.len()));
        out.extend_from_slice(&content);
        return Ok(out);
    }

    // no extensions field present
    Ok(tbs.to_vec())
}

/// Re-parse the extensions wrapper element by element, drop every
/// extension containing the SCT OID, and re-wrap the survivors.
fn rebuild_extensions(wrapper: &[u8]) -> Result<Vec<u8>> {
    let mut reader = Reader::new(wrapper);
    let seq = reader.expect_tlv(TAG_SEQUENCE, "extensions SEQUENCE")?;
    if reader.remaining() != 0 {
        return Err(Error::UnexpectedTag {
            expected: "end of extensions wrapper",
            found: reader.peek_tag()?,
            offset: reader.pos(),
        });
    }
    if seq.content.len() > MAX_EXTENSIONS_LEN {
        return Err(Error::OversizedExtensions {
            len: seq.content.len(),
            cap: MAX_EXTENSIONS_LEN,
        });
    }

    let mut kept = Vec::with_capacity(seq.content.len());
    let mut entries = Reader::new(seq.content);
    while entries.remaining() > 0 {
        let ext = entries.expect_tlv(TAG_SEQUENCE, "extension SEQUENCE")?;
        let whole = &seq.content[ext.start..ext.end];
        if !find_subsequence(whole, &SCT_LIST_OID) {
            kept.extend_from_slice(whole);
        }
    }

    let mut seq_out = Vec::with_capacity(kept.len() + 5);
    seq_out.push(TAG_SEQUENCE);
    seq_out.extend_from_slice(&encode_length(kept.len()));
    seq_out.extend_from_slice(&kept);

    let mut out = Vec::with_capacity(seq_out.len() + 5);
    out.push(TAG_EXTENSIONS);
    out.extend_from_slice(&encode_length(seq_out.len()));
    out.extend_from_slice(&seq_out);
    Ok(out)
}

/// Slice the SubjectPublicKeyInfo (tag, length and content) out of a
/// certificate, for computing the issuer key hash locally.
pub fn subject_public_key_info(cert_der: &[u8]) -> Result<&[u8]> {
    let tbs = tbs_certificate(cert_der)?;
    let mut reader = Reader::new(tbs);
    let outer = reader.expect_tlv(TAG_SEQUENCE, "TBSCertificate SEQUENCE")?;

    let mut fields = Reader::new(outer.content);
    if fields.peek_tag()? == TAG_VERSION {
        fields.read_tlv()?; // [0] version
    }
    fields.expect_tlv(TAG_INTEGER, "serialNumber INTEGER")?;
    fields.read_tlv()?; // signature AlgorithmIdentifier
    fields.read_tlv()?; // issuer Name
    fields.read_tlv()?; // validity
    fields.read_tlv()?; // subject Name
    let spki = fields.expect_tlv(TAG_SEQUENCE, "SubjectPublicKeyInfo SEQUENCE")?;
    Ok(&outer.content[spki.start..spki.end])
}
