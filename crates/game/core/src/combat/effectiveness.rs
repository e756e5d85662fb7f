//! Defense/effectiveness table.

use crate::state::{Element, EnemyStats};

/// Damage multiplier tier of an attack against a defender.
///
/// Enemies store one tier per element, and the stored tier *is* the result
/// for any attack of that element: the lookup is a direct read, not a
/// computation over attacker and defender.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Effectiveness {
    Immune = 0,
    Weak = 1,
    #[default]
    Neutral = 2,
    Effective = 3,
    SuperEffective = 4,
}

impl Effectiveness {
    /// Multiplier numerator over [`Self::DENOMINATOR`].
    pub const fn numerator(self) -> u64 {
        self as u64
    }

    pub const DENOMINATOR: u64 = 2;
}

/// Effectiveness of an attack of `element` against `defender`.
pub const fn effectiveness(element: Element, defender: &EnemyStats) -> Effectiveness {
    defender.defense(element)
}

/// Scales base attack `amount` by `tier`, flooring the result.
///
/// ```text
/// Immune 0x   Weak 0.5x   Neutral 1x   Effective 1.5x   SuperEffective 2x
/// ```
pub const fn scale_damage(amount: u32, tier: Effectiveness) -> u64 {
    (amount as u64) * tier.numerator() / Effectiveness::DENOMINATOR
}
