//! RNG oracle reproducing the on-chain pseudo-random draw.
//!
//! This is not a stream PRNG. Every draw is content-addressed: it hashes the
//! round seed together with a per-draw index, so the same seed and index
//! always produce the same value on the client and on the chain.
//!
//! # Draw indices
//!
//! The resolver assigns indices itself and callers must not reuse them
//! within a round:
//!
//! - `0..HAND_SIZE`: enemy target for the ability in that hand slot
//! - [`GOLD_DRAW_INDEX`]: victory gold
//! - [`REWARD_ABILITY_DRAW_INDEX`]: quest reward ability

use sha2::{Digest, Sha256};

use crate::config::GameConfig;
use crate::state::BattleId;

/// Draw index of the victory gold roll, after the per-slot target draws.
pub const GOLD_DRAW_INDEX: u64 = GameConfig::HAND_SIZE as u64;

/// Draw index of the quest reward ability roll.
pub const REWARD_ABILITY_DRAW_INDEX: u64 = GOLD_DRAW_INDEX + 1;

/// RNG oracle for deterministic draws.
///
/// Implementations must be pure: the same seed and index yield the same hash.
pub trait RngOracle: Send + Sync {
    /// Raw 256-bit draw for `(seed, index)`, big-endian.
    fn hash(&self, seed: &[u8], index: u64) -> [u8; 32];

    /// Value in `[min, max]` inclusive: `min + H(seed, index) mod (max - min + 1)`.
    ///
    /// The modulo is taken over the full 256-bit hash. An empty range
    /// (`min >= max`) collapses to `min`.
    fn draw(&self, seed: &[u8], index: u64, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        let span = u128::from(max - min) + 1;
        let remainder = self
            .hash(seed, index)
            .iter()
            .fold(0u128, |acc, byte| ((acc << 8) | u128::from(*byte)) % span);
        // remainder < span <= 2^64, and min + remainder <= max
        min + remainder as u64
    }
}

/// SHA-256 draw: `H(seed, index) = SHA-256(seed || index as u64 big-endian)`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Rng;

impl RngOracle for Sha256Rng {
    fn hash(&self, seed: &[u8], index: u64) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(seed);
        hasher.update(index.to_be_bytes());
        hasher.finalize().into()
    }
}

/// Seed for one combat round of a battle.
///
/// Mixes the battle id with the round number so every round draws fresh
/// targets while replays of the same round stay identical.
pub fn compute_round_seed(battle: &BattleId, round: u64) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(battle.as_bytes());
    hasher.update(round.to_be_bytes());
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Returns a fixed hash so the modulo arithmetic can be checked by hand.
    struct FixedRng([u8; 32]);

    impl RngOracle for FixedRng {
        fn hash(&self, _seed: &[u8], _index: u64) -> [u8; 32] {
            self.0
        }
    }

    #[test]
    fn draw_is_deterministic() {
        let rng = Sha256Rng;
        let seed = [7u8; 32];
        for index in 0..8 {
            assert_eq!(
                rng.draw(&seed, index, 50, 200),
                rng.draw(&seed, index, 50, 200)
            );
        }
    }

    #[test]
    fn draw_stays_in_range() {
        let rng = Sha256Rng;
        for index in 0..256 {
            let value = rng.draw(b"range-check", index, 50, 200);
            assert!((50..=200).contains(&value));
        }
    }

    #[test]
    fn distinct_indices_decorrelate() {
        let rng = Sha256Rng;
        let seed = b"seed";
        assert_ne!(rng.hash(seed, 0), rng.hash(seed, 1));
    }

    #[test]
    fn modulo_uses_full_width_hash() {
        // 2^8 mod 3 = 1, so a lone 0x01 in the second-to-last byte gives 1.
        let mut bytes = [0u8; 32];
        bytes[30] = 1;
        assert_eq!(FixedRng(bytes).draw(b"", 0, 0, 2), 1);

        // A high byte contributes through the whole fold: 2^248 mod 7 = 2^(248 mod 3) = 4.
        let mut bytes = [0u8; 32];
        bytes[0] = 1;
        assert_eq!(FixedRng(bytes).draw(b"", 0, 10, 16), 14);
    }

    #[test]
    fn empty_range_returns_min() {
        assert_eq!(Sha256Rng.draw(b"x", 0, 5, 5), 5);
        assert_eq!(Sha256Rng.draw(b"x", 0, 9, 3), 9);
    }

    #[test]
    fn full_u64_range_does_not_overflow() {
        let value = FixedRng([0xff; 32]).draw(b"", 0, 0, u64::MAX);
        assert_eq!(value, u64::MAX);
    }

    #[test]
    fn hash_matches_seed_then_index_layout() {
        let mut hasher = Sha256::new();
        hasher.update(b"abc");
        hasher.update([0, 0, 0, 0, 0, 0, 0, 3]);
        let expected: [u8; 32] = hasher.finalize().into();
        assert_eq!(Sha256Rng.hash(b"abc", 3), expected);
    }

    #[test]
    fn round_seed_changes_per_round() {
        let battle = BattleId([1; 32]);
        assert_ne!(compute_round_seed(&battle, 0), compute_round_seed(&battle, 1));
    }
}
