//! Merkle proof verification
//!
//! Inclusion proofs follow the RFC 9162 §2.1.3.2 algorithm: recompute the
//! root from a leaf hash and its root-ward sibling list, tracking the
//! node index (`fnode`) and the last index of each level (`snode`).
//! Consistency proofs follow RFC 9162 §2.1.4.2 with the same index
//! bookkeeping.

use crate::error::{Error, Result};
use crate::tree::hash_children;
use ctwatch_types::Sha256Hash;

/// Verify that `leaf_hash` sits at `leaf_index` in the tree of
/// `tree_size` leaves whose root is `expected_root`.
///
/// `audit_path` is ordered leaf-to-root. Returns `Ok(())` only when the
/// recomputed root matches byte-for-byte and the path length is exactly
/// consistent with the tree shape.
pub fn verify_inclusion(
    leaf_hash: &Sha256Hash,
    leaf_index: u64,
    tree_size: u64,
    audit_path: &[Sha256Hash],
    expected_root: &Sha256Hash,
) -> Result<()> {
    if leaf_index >= tree_size {
        return Err(Error::LeafIndexOutOfRange {
            index: leaf_index,
            tree_size,
        });
    }

    let mut computed = *leaf_hash;
    let mut fnode = leaf_index;
    let mut snode = tree_size - 1;

    for sibling in audit_path {
        if snode == 0 {
            return Err(Error::PathTooLong);
        }
        if fnode & 1 == 1 || fnode == snode {
            computed = hash_children(sibling, &computed);
            // a rightmost node at an even index is promoted through the
            // levels that have no right sibling
            if fnode & 1 == 0 {
                while fnode & 1 == 0 && fnode != 0 {
                    fnode >>= 1;
                    snode >>= 1;
                }
            }
        } else {
            computed = hash_children(&computed, sibling);
        }
        fnode >>= 1;
        snode >>= 1;
    }

    if snode != 0 {
        return Err(Error::PathTooShort);
    }
    if computed != *expected_root {
        return Err(Error::RootMismatch {
            expected: expected_root.to_hex(),
            computed: computed.to_hex(),
        });
    }
    Ok(())
}

/// Verify that the tree with `second_root` (`second_size` leaves) is an
/// append-only extension of the tree with `first_root` (`first_size`
/// leaves).
pub fn verify_consistency(
    first_size: u64,
    second_size: u64,
    proof: &[Sha256Hash],
    first_root: &Sha256Hash,
    second_root: &Sha256Hash,
) -> Result<()> {
    if first_size > second_size {
        return Err(Error::InvalidTreeSize(format!(
            "first size {first_size} exceeds second size {second_size}"
        )));
    }
    if first_size == second_size {
        if !proof.is_empty() {
            return Err(Error::InvalidProof(
                "expected an empty proof for equal tree sizes".to_string(),
            ));
        }
        if first_root != second_root {
            return Err(Error::RootMismatch {
                expected: second_root.to_hex(),
                computed: first_root.to_hex(),
            });
        }
        return Ok(());
    }
    if first_size == 0 {
        // an empty tree is consistent with any tree
        if !proof.is_empty() {
            return Err(Error::InvalidProof(
                "expected an empty proof from an empty tree".to_string(),
            ));
        }
        return Ok(());
    }

    // When the first size is an exact power of two its root is itself a
    // node of the second tree and seeds the recomputation; otherwise the
    // seed is the first proof entry.
    let (seed, rest) = if first_size.is_power_of_two() {
        (*first_root, proof)
    } else {
        match proof.split_first() {
            Some((seed, rest)) => (*seed, rest),
            None => {
                return Err(Error::InvalidProof(
                    "proof cannot be empty for different tree sizes".to_string(),
                ))
            }
        }
    };

    let mut fnode = first_size - 1;
    let mut snode = second_size - 1;
    while fnode & 1 == 1 {
        fnode >>= 1;
        snode >>= 1;
    }

    let mut first_computed = seed;
    let mut second_computed = seed;
    for sibling in rest {
        if snode == 0 {
            return Err(Error::PathTooLong);
        }
        if fnode & 1 == 1 || fnode == snode {
            first_computed = hash_children(sibling, &first_computed);
            second_computed = hash_children(sibling, &second_computed);
            if fnode & 1 == 0 {
                while fnode & 1 == 0 && fnode != 0 {
                    fnode >>= 1;
                    snode >>= 1;
                }
            }
        } else {
            second_computed = hash_children(&second_computed, sibling);
        }
        fnode >>= 1;
        snode >>= 1;
    }

    if snode != 0 {
        return Err(Error::PathTooShort);
    }
    if first_computed != *first_root {
        return Err(Error::RootMismatch {
            expected: first_root.to_hex(),
            computed: first_computed.to_hex(),
        });
    }
    if second_computed != *second_root {
        return Err(Error::RootMismatch {
            expected: second_root.to_hex(),
            computed: second_computed.to_hex(),
        });
    }
    Ok(())
}
