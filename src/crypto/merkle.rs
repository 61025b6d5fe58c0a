//! Merkle tree implementation
//!
//! Used for computing transaction merkle roots in blocks.

use super::{hash_pair, Hash256};

/// Compute the merkle root of a list of transaction hashes
///
/// If the list is empty, returns zero hash.
/// A single leaf is its own root.
/// If a level has an odd number of elements, the last one is paired with itself.
pub fn compute_merkle_root(hashes: &[Hash256]) -> Hash256 {
    let mut current_level: Vec<Hash256> = hashes.to_vec();

    if current_level.is_empty() {
        return Hash256::zero();
    }

    while current_level.len() > 1 {
        let next_level = current_level
            .chunks(2)
            .map(|chunk| match chunk {
                [left, right] => hash_pair(left, right),
                [single] => hash_pair(single, single),
                _ => unreachable!("chunks(2) yields one or two elements"),
            })
            .collect();

        current_level = next_level;
    }

    current_level[0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::sha256d;

    fn make_hashes(n: usize) -> Vec<Hash256> {
        (0..n).map(|i| sha256d(&i.to_le_bytes())).collect()
    }

    #[test]
    fn test_empty_merkle_root() {
        assert_eq!(compute_merkle_root(&[]), Hash256::zero());
    }

    #[test]
    fn test_single_element() {
        let hashes = make_hashes(1);
        assert_eq!(compute_merkle_root(&hashes), hashes[0]);
    }

    #[test]
    fn test_two_elements() {
        let hashes = make_hashes(2);
        let expected = hash_pair(&hashes[0], &hashes[1]);
        assert_eq!(compute_merkle_root(&hashes), expected);
    }

    #[test]
    fn test_odd_number_duplicates_last() {
        let hashes = make_hashes(3);
        let left = hash_pair(&hashes[0], &hashes[1]);
        let right = hash_pair(&hashes[2], &hashes[2]);
        assert_eq!(compute_merkle_root(&hashes), hash_pair(&left, &right));
    }

    #[test]
    fn test_merkle_root_deterministic() {
        let hashes = make_hashes(10);
        assert_eq!(compute_merkle_root(&hashes), compute_merkle_root(&hashes));
    }
}
