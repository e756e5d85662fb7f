//! Battle and quest lifecycle rules.
//!
//! These sit one level above the resolver: creating a battle from a loadout,
//! rotating the hand between rounds, deferring battles into quests, and
//! pricing/upgrading abilities. They share the resolver's primitives (content
//! ids, the RNG adapter) but never run a round themselves.
mod battle;
mod deck;
mod quest;
mod reward;
mod value;

pub use battle::{initial_state, new_battle};
pub use deck::rotate_deck;
pub use quest::Quest;
pub use reward::draw_reward_ability;
pub use value::{ability_value, effect_value, sell_price, upgrade_ability, upgrade_cost};
