//! Combat round resolution.
//!
//! # Architecture
//!
//! - **Pure Functions**: a round is a function of config, state, ability
//!   table and seed; state goes in and comes out by value
//! - **Event Sink**: sub-steps are reported through [`CombatSink`] in a fixed
//!   order so a client prediction can be animated step by step
//! - **Integer Math**: 64-bit unsigned arithmetic, subtraction clamps at zero
//!
//! # Core Functions
//!
//! - `resolve_round`: one full round (hand, targets, effects, enemy attacks, outcome)
//! - `effectiveness`: defense tier lookup for an attack element
//! - `scale_damage`: base amount scaled by effectiveness tier

pub mod effectiveness;
pub mod events;
pub mod resolver;

pub use effectiveness::{Effectiveness, effectiveness, scale_damage};
pub use events::{CombatEvent, CombatSink, EffectSource, NullSink, PlayerAttack};
pub use resolver::{CombatEnv, RoundOutcome, RoundReport, RoundTotals, resolve_round};
