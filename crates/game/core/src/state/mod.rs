//! Persistent data model the resolver operates over.
//!
//! Enemy profiles and abilities are immutable once created. A battle is an
//! immutable [`BattleConfig`] paired with a [`BattleState`] that changes once
//! per combat round, and is dropped when the battle reaches an outcome.
mod ability;
mod battle;
mod common;
mod enemy;

pub use ability::{Ability, Effect, EffectType, Element, EnergyColor, EnergyColors};
pub use battle::{BattleConfig, BattleState, Biome, Level, Loadout};
pub use common::{AbilityId, BattleId, PlayerId, QuestId};
pub use enemy::{BossType, EnemyRoster, EnemyStats};
