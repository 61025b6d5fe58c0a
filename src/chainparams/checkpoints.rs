//! Hardcoded checkpoints
//!
//! What makes a good checkpoint block?
//! - surrounded by blocks with reasonable timestamps (no earlier block with a
//!   later timestamp, no later block with an earlier one)
//! - contains no strange transactions

use serde::Serialize;
use std::collections::BTreeMap;
use crate::crypto::Hash256;
use crate::error::ParamsError;

/// How much more expensive a signature-checked transaction is than one below
/// the last checkpoint
const SIGCHECK_VERIFICATION_FACTOR: f64 = 5.0;

/// Ordered height -> block hash map plus sync-progress metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointTable {
    checkpoints: BTreeMap<u32, Hash256>,
    /// UNIX timestamp of the last checkpoint block
    pub time_last_checkpoint: i64,
    /// Total transactions between genesis and the last checkpoint
    pub transactions_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointTable {
    /// Build a table; `entries` must be in strictly increasing height order
    pub fn new(
        entries: &[(u32, Hash256)],
        time_last_checkpoint: i64,
        transactions_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Result<Self, ParamsError> {
        for pair in entries.windows(2) {
            if pair[1].0 <= pair[0].0 {
                return Err(ParamsError::InvalidCheckpoints {
                    previous: pair[0].0,
                    height: pair[1].0,
                });
            }
        }

        Ok(Self {
            checkpoints: entries.iter().copied().collect(),
            time_last_checkpoint,
            transactions_last_checkpoint,
            transactions_per_day,
        })
    }

    pub fn get(&self, height: u32) -> Option<&Hash256> {
        self.checkpoints.get(&height)
    }

    /// Checkpointed heights, ascending
    pub fn heights(&self) -> impl Iterator<Item = u32> + '_ {
        self.checkpoints.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &Hash256)> + '_ {
        self.checkpoints.iter().map(|(h, hash)| (*h, hash))
    }

    pub fn len(&self) -> usize {
        self.checkpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checkpoints.is_empty()
    }

    /// False only when a checkpoint exists at `height` with a different hash
    pub fn check_block(&self, height: u32, hash: &Hash256) -> bool {
        self.checkpoints.get(&height).map_or(true, |expected| expected == hash)
    }

    pub fn last_checkpoint(&self) -> Option<(u32, &Hash256)> {
        self.checkpoints.iter().next_back().map(|(h, hash)| (*h, hash))
    }

    /// Height of the last checkpoint (0 when there are none)
    pub fn total_blocks_estimate(&self) -> u32 {
        self.last_checkpoint().map_or(0, |(h, _)| h)
    }

    /// Rough fraction of the chain verified, for progress display only.
    ///
    /// `chain_tx` is the transaction count up to the tip, `tip_time` its block
    /// time and `now` the current time, all as seen by the caller.
    pub fn guess_verification_progress(&self, chain_tx: u64, tip_time: i64, now: i64, sigchecks: bool) -> f64 {
        let factor = if sigchecks { SIGCHECK_VERIFICATION_FACTOR } else { 1.0 };
        let per_day = self.transactions_per_day;
        let checkpoint_tx = self.transactions_last_checkpoint;

        let (work_before, work_after) = if chain_tx <= checkpoint_tx {
            let cheap_before = chain_tx as f64;
            let cheap_after = (checkpoint_tx - chain_tx) as f64;
            let expensive_after = (now - self.time_last_checkpoint) as f64 / 86400.0 * per_day;
            (cheap_before, cheap_after + expensive_after * factor)
        } else {
            let cheap_before = checkpoint_tx as f64;
            let expensive_before = (chain_tx - checkpoint_tx) as f64;
            let expensive_after = (now - tip_time) as f64 / 86400.0 * per_day;
            (cheap_before + expensive_before * factor, expensive_after * factor)
        };

        let total = work_before + work_after;
        if total <= 0.0 {
            return 0.0;
        }
        work_before / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hash(n: u8) -> Hash256 {
        Hash256([n; 32])
    }

    #[test]
    fn test_rejects_unordered_heights() {
        let err = CheckpointTable::new(&[(10, hash(1)), (5, hash(2))], 0, 0, 1.0).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidCheckpoints { previous: 10, height: 5 }));
        assert!(CheckpointTable::new(&[(3, hash(1)), (3, hash(2))], 0, 0, 1.0).is_err());
    }

    #[test]
    fn test_lookup_and_ordering() {
        let table = CheckpointTable::new(&[(0, hash(1)), (100, hash(2)), (250, hash(3))], 0, 0, 1.0).unwrap();
        assert_eq!(table.heights().collect::<Vec<_>>(), vec![0, 100, 250]);
        assert_eq!(table.get(100), Some(&hash(2)));
        assert_eq!(table.get(101), None);
        assert_eq!(table.last_checkpoint(), Some((250, &hash(3))));
        assert_eq!(table.total_blocks_estimate(), 250);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_check_block() {
        let table = CheckpointTable::new(&[(100, hash(2))], 0, 0, 1.0).unwrap();
        assert!(table.check_block(100, &hash(2)));
        assert!(!table.check_block(100, &hash(9)));
        assert!(table.check_block(99, &hash(9)));
    }

    #[test]
    fn test_empty_table() {
        let table = CheckpointTable::new(&[], 0, 0, 1.0).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total_blocks_estimate(), 0);
        assert!(table.last_checkpoint().is_none());
    }

    #[test]
    fn test_progress_before_checkpoint() {
        // 1000 tx at checkpoint, 100 tx/day, one day later: 500 verified
        let table = CheckpointTable::new(&[(0, hash(1))], 0, 1000, 100.0).unwrap();
        let progress = table.guess_verification_progress(500, 0, 86400, false);
        assert!((progress - 500.0 / 1100.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_after_checkpoint() {
        let table = CheckpointTable::new(&[(0, hash(1))], 0, 0, 100.0).unwrap();
        assert_eq!(table.guess_verification_progress(10, 1000, 1000, true), 1.0);
        let half = table.guess_verification_progress(10, 0, 864, false);
        assert!((half - 10.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_progress_degenerate_is_zero() {
        let table = CheckpointTable::new(&[], 0, 0, 0.0).unwrap();
        assert_eq!(table.guess_verification_progress(0, 0, 0, true), 0.0);
    }
}
