//! Spirit abilities and the effects they resolve into.
//!
//! An ability has an optional base [`Effect`] that always resolves, plus one
//! optional bonus effect per [`EnergyColor`] that resolves only in a round
//! where some `generate` effect charged that color.

use bitflags::bitflags;

use crate::config::GameConfig;
use crate::error::CombatError;
use crate::identity::ContentId;
use crate::state::AbilityId;

/// Damage element of an attack effect.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    Physical,
    Fire,
    Ice,
}

/// What an [`Effect`] does when it resolves.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum EffectType {
    AttackFire = 0,
    AttackIce = 1,
    AttackPhys = 2,
    Block = 3,
    /// Charges the energy color encoded in `amount`.
    Generate = 4,
}

impl EffectType {
    /// Element of an attack effect, `None` for block and generate.
    pub const fn element(self) -> Option<Element> {
        match self {
            Self::AttackFire => Some(Element::Fire),
            Self::AttackIce => Some(Element::Ice),
            Self::AttackPhys => Some(Element::Physical),
            Self::Block | Self::Generate => None,
        }
    }

    pub const fn is_attack(self) -> bool {
        self.element().is_some()
    }
}

/// One of the three energy trigger channels.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum EnergyColor {
    Blue = 0,
    Green = 1,
    Red = 2,
}

impl EnergyColor {
    /// Resolution order of the energy phase.
    pub const ALL: [Self; GameConfig::ENERGY_COLORS] = [Self::Blue, Self::Green, Self::Red];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decodes the color a `generate` effect's amount refers to.
    pub const fn from_amount(amount: u32) -> Option<Self> {
        match amount {
            0 => Some(Self::Blue),
            1 => Some(Self::Green),
            2 => Some(Self::Red),
            _ => None,
        }
    }

    pub const fn flag(self) -> EnergyColors {
        match self {
            Self::Blue => EnergyColors::BLUE,
            Self::Green => EnergyColors::GREEN,
            Self::Red => EnergyColors::RED,
        }
    }
}

bitflags! {
    /// Energy colors charged so far in the current round.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct EnergyColors: u8 {
        const BLUE  = 1 << 0;
        const GREEN = 1 << 1;
        const RED   = 1 << 2;
    }
}

impl EnergyColors {
    pub fn charged(self, color: EnergyColor) -> bool {
        self.contains(color.flag())
    }
}

/// A single resolvable effect.
///
/// For attacks `amount` is the base damage before effectiveness scaling, for
/// block it is the absorbed damage, for generate it is the energy color index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Effect {
    pub effect_type: EffectType,
    pub amount: u32,
    #[serde(default)]
    pub is_aoe: bool,
}

impl Effect {
    pub const fn new(effect_type: EffectType, amount: u32, is_aoe: bool) -> Self {
        Self {
            effect_type,
            amount,
            is_aoe,
        }
    }

    pub const fn attack(element: Element, amount: u32) -> Self {
        let effect_type = match element {
            Element::Physical => EffectType::AttackPhys,
            Element::Fire => EffectType::AttackFire,
            Element::Ice => EffectType::AttackIce,
        };
        Self::new(effect_type, amount, false)
    }

    pub const fn block(amount: u32) -> Self {
        Self::new(EffectType::Block, amount, false)
    }

    pub const fn generate(color: EnergyColor) -> Self {
        Self::new(EffectType::Generate, color as u32, false)
    }

    pub const fn aoe(mut self) -> Self {
        self.is_aoe = true;
        self
    }

    /// Energy color charged by a generate effect.
    ///
    /// Returns `Ok(None)` for every other effect type.
    pub fn energy_color(&self) -> Result<Option<EnergyColor>, CombatError> {
        if self.effect_type != EffectType::Generate {
            return Ok(None);
        }
        EnergyColor::from_amount(self.amount)
            .map(Some)
            .ok_or(CombatError::InvalidEnergyColor {
                effect_type: self.effect_type,
                amount: self.amount,
            })
    }
}

/// A spirit's action: optional base effect plus per-color energy bonuses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Ability {
    pub effect: Option<Effect>,
    pub on_energy: [Option<Effect>; GameConfig::ENERGY_COLORS],
}

impl Ability {
    pub const fn new(effect: Option<Effect>) -> Self {
        Self {
            effect,
            on_energy: [None; GameConfig::ENERGY_COLORS],
        }
    }

    pub const fn with_energy(mut self, color: EnergyColor, effect: Effect) -> Self {
        self.on_energy[color as usize] = Some(effect);
        self
    }

    /// Base effect followed by the energy effects, skipping empty slots.
    pub fn effects(&self) -> impl Iterator<Item = &Effect> {
        self.effect.iter().chain(self.on_energy.iter().flatten())
    }

    /// Checks that every generate effect names a real color.
    pub fn validate(&self) -> Result<(), CombatError> {
        for effect in self.effects() {
            effect.energy_color()?;
        }
        Ok(())
    }

    /// Content-addressed identity of this ability.
    pub fn id(&self) -> AbilityId {
        AbilityId(self.content_id())
    }
}

impl ContentId for Ability {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_constructors_pick_matching_type() {
        assert_eq!(
            Effect::attack(Element::Fire, 3).effect_type,
            EffectType::AttackFire
        );
        assert_eq!(
            Effect::attack(Element::Physical, 3).effect_type.element(),
            Some(Element::Physical)
        );
        assert!(!EffectType::Block.is_attack());
    }

    #[test]
    fn generate_amount_decodes_color() {
        let effect = Effect::generate(EnergyColor::Red);
        assert_eq!(effect.energy_color(), Ok(Some(EnergyColor::Red)));
        assert_eq!(Effect::block(5).energy_color(), Ok(None));

        let broken = Effect::new(EffectType::Generate, 7, false);
        assert!(matches!(
            broken.energy_color(),
            Err(CombatError::InvalidEnergyColor { amount: 7, .. })
        ));
    }

    #[test]
    fn validate_checks_energy_slots_too() {
        let ability = Ability::new(Some(Effect::block(2))).with_energy(
            EnergyColor::Green,
            Effect::new(EffectType::Generate, 3, false),
        );
        assert!(ability.validate().is_err());
    }

    #[test]
    fn effects_skip_empty_slots() {
        let ability = Ability::new(None)
            .with_energy(EnergyColor::Blue, Effect::block(1))
            .with_energy(EnergyColor::Red, Effect::block(2));
        let amounts: Vec<u32> = ability.effects().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![1, 2]);
    }

    #[test]
    fn energy_flags_follow_color_order() {
        let mut colors = EnergyColors::empty();
        colors |= EnergyColor::Green.flag();
        assert!(colors.charged(EnergyColor::Green));
        assert!(!colors.charged(EnergyColor::Blue));
        assert_eq!(EnergyColor::ALL.map(EnergyColor::index), [0, 1, 2]);
    }
}
