use core::ops::RangeInclusive;

/// Game configuration constants and tunable parameters.
///
/// Keys missing from a `config.toml` fall back to the built-in defaults.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// HP every battle starts the player with.
    pub player_max_hp: u32,
    /// Per-slot advance applied to `deck_indices` between rounds.
    pub rotation_offsets: [u8; 3],
    /// Lower bound (inclusive) of the gold drawn on victory.
    pub victory_gold_min: u64,
    /// Upper bound (inclusive) of the gold drawn on victory.
    pub victory_gold_max: u64,
    /// Flat gold added when the defeated roster contained a boss.
    pub boss_gold_bonus: u64,
    /// Blocks a quest waits before it may be finalized into a boss battle.
    pub quest_duration: u64,
    /// Gold cost of an upgrade, as a multiple of the ability's value.
    pub upgrade_cost_multiplier: u64,
    /// Gold credited on registration.
    pub starting_gold: u64,
}

impl GameConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_ENEMIES: usize = 3;
    pub const LOADOUT_SIZE: usize = 7;
    pub const HAND_SIZE: usize = 3;
    pub const ENERGY_COLORS: usize = 3;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_PLAYER_MAX_HP: u32 = 100;
    pub const DEFAULT_ROTATION_OFFSETS: [u8; Self::HAND_SIZE] = [1, 2, 3];
    pub const DEFAULT_VICTORY_GOLD: RangeInclusive<u64> = 50..=200;
    pub const DEFAULT_BOSS_GOLD_BONUS: u64 = 100;
    pub const DEFAULT_QUEST_DURATION: u64 = 10;
    pub const DEFAULT_UPGRADE_COST_MULTIPLIER: u64 = 2;

    pub fn new() -> Self {
        Self {
            player_max_hp: Self::DEFAULT_PLAYER_MAX_HP,
            rotation_offsets: Self::DEFAULT_ROTATION_OFFSETS,
            victory_gold_min: *Self::DEFAULT_VICTORY_GOLD.start(),
            victory_gold_max: *Self::DEFAULT_VICTORY_GOLD.end(),
            boss_gold_bonus: Self::DEFAULT_BOSS_GOLD_BONUS,
            quest_duration: Self::DEFAULT_QUEST_DURATION,
            upgrade_cost_multiplier: Self::DEFAULT_UPGRADE_COST_MULTIPLIER,
            starting_gold: 0,
        }
    }

    /// Inclusive range the victory gold draw falls in.
    pub fn victory_gold(&self) -> RangeInclusive<u64> {
        self.victory_gold_min..=self.victory_gold_max
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
