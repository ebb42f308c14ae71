//! Proof verification against manually built trees
//!
//! The trees here are assembled leaf by leaf with the crate's own hashing
//! primitives, so every audit path and root is known by construction.

use ctwatch_merkle::{hash_children, hash_leaf, verify_consistency, verify_inclusion, Error};
use ctwatch_types::Sha256Hash;

struct FourLeafTree {
    leaves: [Sha256Hash; 4],
    h01: Sha256Hash,
    h23: Sha256Hash,
    root: Sha256Hash,
}

fn four_leaf_tree() -> FourLeafTree {
    let leaves = [
        hash_leaf(b"leaf 0"),
        hash_leaf(b"leaf 1"),
        hash_leaf(b"leaf 2"),
        hash_leaf(b"leaf 3"),
    ];
    let h01 = hash_children(&leaves[0], &leaves[1]);
    let h23 = hash_children(&leaves[2], &leaves[3]);
    let root = hash_children(&h01, &h23);
    FourLeafTree {
        leaves,
        h01,
        h23,
        root,
    }
}

fn four_leaf_paths(tree: &FourLeafTree) -> [Vec<Sha256Hash>; 4] {
    [
        vec![tree.leaves[1], tree.h23],
        vec![tree.leaves[0], tree.h23],
        vec![tree.leaves[3], tree.h01],
        vec![tree.leaves[2], tree.h01],
    ]
}

#[test]
fn every_index_of_a_four_leaf_tree_verifies() {
    let tree = four_leaf_tree();
    for (index, path) in four_leaf_paths(&tree).iter().enumerate() {
        verify_inclusion(&tree.leaves[index], index as u64, 4, path, &tree.root)
            .unwrap_or_else(|e| panic!("index {index} should verify: {e}"));
    }
}

#[test]
fn any_flipped_sibling_byte_fails_verification() {
    let tree = four_leaf_tree();
    for (index, path) in four_leaf_paths(&tree).iter().enumerate() {
        for entry in 0..path.len() {
            for byte in 0..32 {
                let mut tampered = path.clone();
                let mut bytes = *tampered[entry].as_bytes();
                bytes[byte] ^= 0x01;
                tampered[entry] = Sha256Hash::from_bytes(bytes);
                assert!(
                    verify_inclusion(&tree.leaves[index], index as u64, 4, &tampered, &tree.root)
                        .is_err(),
                    "index {index}, entry {entry}, byte {byte} should fail"
                );
            }
        }
    }
}

#[test]
fn path_one_entry_short_fails() {
    let tree = four_leaf_tree();
    let path = vec![tree.leaves[1]];
    assert!(matches!(
        verify_inclusion(&tree.leaves[0], 0, 4, &path, &tree.root),
        Err(Error::PathTooShort)
    ));
}

#[test]
fn path_one_entry_long_fails() {
    let tree = four_leaf_tree();
    let mut path = four_leaf_paths(&tree)[0].clone();
    path.push(tree.h01);
    assert!(matches!(
        verify_inclusion(&tree.leaves[0], 0, 4, &path, &tree.root),
        Err(Error::PathTooLong)
    ));
}

#[test]
fn wrong_root_fails() {
    let tree = four_leaf_tree();
    let path = four_leaf_paths(&tree)[2].clone();
    let mut bytes = *tree.root.as_bytes();
    bytes[0] ^= 0xff;
    let wrong_root = Sha256Hash::from_bytes(bytes);
    assert!(matches!(
        verify_inclusion(&tree.leaves[2], 2, 4, &path, &wrong_root),
        Err(Error::RootMismatch { .. })
    ));
}

#[test]
fn leaf_index_outside_tree_fails() {
    let leaf = hash_leaf(b"leaf");
    assert!(matches!(
        verify_inclusion(&leaf, 4, 4, &[], &leaf),
        Err(Error::LeafIndexOutOfRange { .. })
    ));
    assert!(matches!(
        verify_inclusion(&leaf, 0, 0, &[], &leaf),
        Err(Error::LeafIndexOutOfRange { .. })
    ));
}

#[test]
fn single_leaf_tree_is_its_own_root() {
    let leaf = hash_leaf(b"only leaf");
    assert!(verify_inclusion(&leaf, 0, 1, &[], &leaf).is_ok());
    // any path at all is too long for a single-leaf tree
    assert!(matches!(
        verify_inclusion(&leaf, 0, 1, &[leaf], &leaf),
        Err(Error::PathTooLong)
    ));
}

#[test]
fn odd_sized_tree_promotes_the_rightmost_leaf() {
    // three leaves: root = H(H(l0, l1), l2); the path for index 2 has a
    // single entry because the leaf is promoted one level
    let l0 = hash_leaf(b"a");
    let l1 = hash_leaf(b"b");
    let l2 = hash_leaf(b"c");
    let h01 = hash_children(&l0, &l1);
    let root = hash_children(&h01, &l2);

    assert!(verify_inclusion(&l2, 2, 3, &[h01], &root).is_ok());
    assert!(verify_inclusion(&l0, 0, 3, &[l1, l2], &root).is_ok());
    assert!(verify_inclusion(&l1, 1, 3, &[l0, l2], &root).is_ok());
}

#[test]
fn consistency_power_of_two_extension() {
    let tree = four_leaf_tree();
    // first tree is (l0, l1) with root h01; second is the full tree
    assert!(verify_consistency(2, 4, &[tree.h23], &tree.h01, &tree.root).is_ok());
}

#[test]
fn consistency_from_odd_sized_tree() {
    let tree = four_leaf_tree();
    // first tree of three leaves has root H(h01, l2)
    let first_root = hash_children(&tree.h01, &tree.leaves[2]);
    let proof = vec![tree.leaves[2], tree.leaves[3], tree.h01];
    assert!(verify_consistency(3, 4, &proof, &first_root, &tree.root).is_ok());
}

#[test]
fn consistency_rejects_tampered_proof() {
    let tree = four_leaf_tree();
    let first_root = hash_children(&tree.h01, &tree.leaves[2]);
    let mut proof = vec![tree.leaves[2], tree.leaves[3], tree.h01];
    let mut bytes = *proof[1].as_bytes();
    bytes[7] ^= 0x10;
    proof[1] = Sha256Hash::from_bytes(bytes);
    assert!(verify_consistency(3, 4, &proof, &first_root, &tree.root).is_err());
}

#[test]
fn consistency_equal_sizes_requires_equal_roots() {
    let tree = four_leaf_tree();
    assert!(verify_consistency(4, 4, &[], &tree.root, &tree.root).is_ok());
    assert!(matches!(
        verify_consistency(4, 4, &[], &tree.h01, &tree.root),
        Err(Error::RootMismatch { .. })
    ));
    assert!(matches!(
        verify_consistency(4, 4, &[tree.h01], &tree.root, &tree.root),
        Err(Error::InvalidProof(_))
    ));
}

#[test]
fn consistency_from_empty_tree_is_vacuous() {
    let tree = four_leaf_tree();
    let empty = Sha256Hash::from_bytes([0; 32]);
    assert!(verify_consistency(0, 4, &[], &empty, &tree.root).is_ok());
    assert!(verify_consistency(0, 4, &[tree.h01], &empty, &tree.root).is_err());
}

#[test]
fn consistency_rejects_shrinking_tree() {
    let tree = four_leaf_tree();
    assert!(matches!(
        verify_consistency(4, 2, &[], &tree.root, &tree.h01),
        Err(Error::InvalidTreeSize(_))
    ));
}
