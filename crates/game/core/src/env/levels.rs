//! Level configuration oracle.

use crate::state::{Biome, EnemyStats, Level};

/// Provides the enemy rosters configured for each level.
pub trait LevelOracle: Send + Sync {
    /// Enemies of a regular battle on `level`, or `None` if the level is unknown.
    fn enemies(&self, level: &Level) -> Option<&[EnemyStats]>;

    /// Enemies of the boss battle a quest on `level` finalizes into.
    fn boss(&self, level: &Level) -> Option<&[EnemyStats]>;

    /// Highest difficulty configured for `biome`.
    fn max_difficulty(&self, biome: Biome) -> Option<u32>;
}
