//! Deterministic combat rules for Game2 battles.
//!
//! `game2-core` reproduces, off-chain, the round computation the battle
//! contract performs on-chain, so a client can predict (and animate) a round
//! before the verified result lands. Every function here is pure: the same
//! battle config, state, ability table and seed always yield the same state,
//! outcome and event sequence.
//!
//! Modules are organized leaves first:
//! - [`state`] holds the persistent data model (enemies, abilities, battles)
//! - [`identity`] derives content-addressed ids for abilities, battles, quests
//! - [`env`] provides the read-only collaborators (ability table, RNG, levels)
//! - [`combat`] hosts the effectiveness table and the round resolver
//! - [`lifecycle`] covers battle/quest creation, deck rotation and rewards
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod identity;
pub mod lifecycle;
pub mod state;

pub use combat::{
    CombatEnv, CombatEvent, CombatSink, EffectSource, Effectiveness, NullSink, RoundOutcome,
    RoundReport, RoundTotals, effectiveness, resolve_round, scale_damage,
};
pub use config::GameConfig;
pub use env::{
    AbilityOracle, AbilityRegistry, LevelOracle, RngOracle, Sha256Rng, compute_round_seed,
};
pub use error::{CombatError, ErrorSeverity, GameError};
pub use identity::{ContentId, content_hash};
pub use lifecycle::{
    Quest, ability_value, draw_reward_ability, initial_state, new_battle, rotate_deck,
    sell_price, upgrade_ability, upgrade_cost,
};
pub use state::{
    Ability, AbilityId, BattleConfig, BattleId, BattleState, Biome, BossType, Effect, EffectType,
    Element, EnemyRoster, EnemyStats, EnergyColor, EnergyColors, Level, Loadout, PlayerId,
    QuestId,
};
