//! In-memory content tables built from data files.

mod abilities;
mod levels;

pub use abilities::{AbilityCatalog, NamedAbility};
pub use levels::{LevelSpec, LevelTable};
