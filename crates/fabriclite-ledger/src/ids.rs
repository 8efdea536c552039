//! Transaction id and block number generators.
//!
//! `RandomIdGenerator` reproduces the observed network's identifier scheme
//! exactly, including its accepted weaknesses: no collision detection on tx
//! ids, and block numbers that are uniformly random rather than monotonic.
//! `SequentialIdGenerator` is the deterministic alternative for tests and
//! for deployments that want chain-like numbering behind the same trait.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use rand::Rng;

use fabriclite_core::traits::IdGenerator;

/// Lower bound of the simulated block range.
pub const BLOCK_BASE: u64 = 12_000;
/// Width of the random block offset; numbers fall in `BLOCK_BASE..BLOCK_BASE + BLOCK_SPAN`.
pub const BLOCK_SPAN: u64 = 1_000;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 9;

/// The pseudo-random id source matching the simulated network.
///
/// Tx ids are `tx_<epochMillis>_<9 base36 chars>`; distinctness at
/// sub-millisecond call rates relies entirely on the random suffix — a
/// collision is vanishingly unlikely but not detected. Block numbers are
/// drawn uniformly from `12000..13000` and carry NO monotonicity guarantee;
/// swap in `SequentialIdGenerator` where that matters.
#[derive(Debug, Default)]
pub struct RandomIdGenerator;

impl RandomIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for RandomIdGenerator {
    fn tx_id(&self) -> String {
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
            .collect();
        format!("tx_{}_{}", Utc::now().timestamp_millis(), suffix)
    }

    fn block_number(&self) -> u64 {
        BLOCK_BASE + rand::thread_rng().gen_range(0..BLOCK_SPAN)
    }
}

/// A deterministic, monotonic id source.
///
/// Tx ids count up from zero and block numbers climb one per transaction
/// from `BLOCK_BASE`. Used by tests that assert on provenance and offered
/// as the swap-in for hardened deployments that need real chain numbering.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn tx_id(&self) -> String {
        format!("tx_{}_sequential", self.next.fetch_add(1, Ordering::SeqCst))
    }

    fn block_number(&self) -> u64 {
        BLOCK_BASE + self.next.load(Ordering::SeqCst)
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use fabriclite_core::traits::IdGenerator;

    use super::{RandomIdGenerator, SequentialIdGenerator, BLOCK_BASE, BLOCK_SPAN};

    #[test]
    fn tx_id_has_the_expected_shape() {
        let ids = RandomIdGenerator::new();
        let tx_id = ids.tx_id();

        let parts: Vec<&str> = tx_id.splitn(3, '_').collect();
        assert_eq!(parts.len(), 3, "tx id must be tx_<millis>_<suffix>: {}", tx_id);
        assert_eq!(parts[0], "tx");
        assert!(parts[1].parse::<i64>().is_ok(), "millis segment must be numeric");
        assert_eq!(parts[2].len(), 9, "suffix must be 9 chars");
        assert!(parts[2]
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn tx_ids_are_distinct_within_a_run() {
        let ids = RandomIdGenerator::new();
        let generated: HashSet<String> = (0..100).map(|_| ids.tx_id()).collect();
        assert_eq!(generated.len(), 100);
    }

    #[test]
    fn block_numbers_stay_in_range() {
        let ids = RandomIdGenerator::new();
        for _ in 0..1000 {
            let block = ids.block_number();
            assert!(
                (BLOCK_BASE..BLOCK_BASE + BLOCK_SPAN).contains(&block),
                "block number {} outside simulated range",
                block
            );
        }
    }

    #[test]
    fn sequential_generator_is_monotonic() {
        let ids = SequentialIdGenerator::new();
        let first_tx = ids.tx_id();
        let first_block = ids.block_number();
        let second_tx = ids.tx_id();
        let second_block = ids.block_number();

        assert_ne!(first_tx, second_tx);
        assert!(second_block > first_block);
    }
}
