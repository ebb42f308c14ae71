//! RFC 6962 tree hashing
//!
//! Leaf hashes are computed over `0x00 || input` and interior node hashes
//! over `0x01 || left || right`. The distinct prefixes are a security
//! property (second-preimage resistance between leaves and nodes), not a
//! formatting detail.

use ctwatch_types::Sha256Hash;
use sha2::{Digest, Sha256};

/// Domain-separation prefix for leaf hashes.
pub const LEAF_HASH_PREFIX: u8 = 0x00;

/// Domain-separation prefix for interior node hashes.
pub const NODE_HASH_PREFIX: u8 = 0x01;

/// Hash size in bytes (SHA-256).
pub const HASH_SIZE: usize = 32;

/// `SHA-256(0x00 || data)`
pub fn hash_leaf(data: &[u8]) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([LEAF_HASH_PREFIX]);
    hasher.update(data);
    Sha256Hash::from_bytes(hasher.finalize().into())
}

/// `SHA-256(0x01 || left || right)`
pub fn hash_children(left: &Sha256Hash, right: &Sha256Hash) -> Sha256Hash {
    let mut hasher = Sha256::new();
    hasher.update([NODE_HASH_PREFIX]);
    hasher.update(left.as_slice());
    hasher.update(right.as_slice());
    Sha256Hash::from_bytes(hasher.finalize().into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_hash_uses_zero_prefix() {
        let data = b"entry";
        let mut prefixed = vec![LEAF_HASH_PREFIX];
        prefixed.extend_from_slice(data);
        let expected: [u8; 32] = Sha256::digest(&prefixed).into();
        assert_eq!(hash_leaf(data), Sha256Hash::from_bytes(expected));
    }

    #[test]
    fn node_hash_uses_one_prefix() {
        let left = hash_leaf(b"left");
        let right = hash_leaf(b"right");
        let mut prefixed = vec![NODE_HASH_PREFIX];
        prefixed.extend_from_slice(left.as_slice());
        prefixed.extend_from_slice(right.as_slice());
        let expected: [u8; 32] = Sha256::digest(&prefixed).into();
        assert_eq!(hash_children(&left, &right), Sha256Hash::from_bytes(expected));
    }

    #[test]
    fn leaf_and_node_domains_never_collide() {
        // SHA-256(0x00 || x) must never equal SHA-256(0x01 || x)
        for input in [&b""[..], b"x", b"certificate transparency", &[0u8; 64]] {
            let as_leaf = hash_leaf(input);
            let mut node_input = vec![NODE_HASH_PREFIX];
            node_input.extend_from_slice(input);
            let as_node: [u8; 32] = Sha256::digest(&node_input).into();
            assert_ne!(as_leaf, Sha256Hash::from_bytes(as_node));
        }
    }

    #[test]
    fn child_order_matters() {
        let left = hash_leaf(b"a");
        let right = hash_leaf(b"b");
        assert_ne!(hash_children(&left, &right), hash_children(&right, &left));
    }
}
