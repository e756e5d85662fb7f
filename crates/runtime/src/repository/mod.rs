//! Repository layer for dynamic session data
//!
//! Repositories handle data that CHANGES during play:
//! - Player accounts (gold, owned abilities, level progress)
//! - Running battles and pending quests
//!
//! Static game content (abilities, levels, config) is handled by Oracles, not Repositories.

mod accounts;
mod battles;

pub use accounts::{AccountBook, FIRST_DIFFICULTY, PlayerAccount};
pub use battles::{BattleBook, BattleRecord};
