//! Data-driven content definitions and loaders.
//!
//! This crate houses static game content and provides loaders for RON/TOML data files:
//! - Ability catalog (starter grants and the quest reward pool, via RON)
//! - Level table (enemy rosters and boss rosters per biome/difficulty, via RON)
//! - Game configuration (data-driven via TOML)
//!
//! Content is consumed by runtime oracles and never appears in battle state.
//!
//! All loaders use game2-core types directly with serde for RON/TOML deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::{AbilityCatalog, LevelSpec, LevelTable, NamedAbility};

#[cfg(feature = "loaders")]
pub use loaders::{
    AbilityLoader, ConfigLoader, ContentFactory, GameContent, LevelLoader, LoadResult,
};
