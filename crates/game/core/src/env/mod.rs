//! Traits describing read-only battle collaborators.
//!
//! Oracles expose the ability table, the level roster and the hash-based RNG.
//! The resolver only ever reads through them, which keeps a round a pure
//! function of its inputs and lets independent battles run side by side.
mod abilities;
mod levels;
mod rng;

pub use abilities::{AbilityOracle, AbilityRegistry};
pub use levels::LevelOracle;
pub use rng::{
    GOLD_DRAW_INDEX, REWARD_ABILITY_DRAW_INDEX, RngOracle, Sha256Rng, compute_round_seed,
};
