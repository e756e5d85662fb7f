//! Ability scoring for the shop.
//!
//! The score is linear in attack and block amounts, so raising any amount
//! never lowers it. Base effects count double since they resolve every
//! round, while energy bonuses depend on a matching generate.
use crate::config::GameConfig;
use crate::state::{Ability, Effect, EffectType};

/// Fixed worth of a `generate` effect, whose amount is a color index.
const GENERATE_VALUE: u64 = 4;

/// AoE attacks hit every enemy slot.
const AOE_MULTIPLIER: u64 = GameConfig::MAX_ENEMIES as u64;

const BASE_EFFECT_WEIGHT: u64 = 2;

pub fn effect_value(effect: &Effect) -> u64 {
    let amount = u64::from(effect.amount);
    match effect.effect_type {
        EffectType::Generate => GENERATE_VALUE,
        EffectType::Block => amount,
        EffectType::AttackFire | EffectType::AttackIce | EffectType::AttackPhys => {
            if effect.is_aoe {
                amount * AOE_MULTIPLIER
            } else {
                amount
            }
        }
    }
}

/// Deterministic score of an ability.
pub fn ability_value(ability: &Ability) -> u64 {
    let base = ability.effect.as_ref().map_or(0, effect_value) * BASE_EFFECT_WEIGHT;
    let energy: u64 = ability.on_energy.iter().flatten().map(effect_value).sum();
    base + energy
}

/// Gold paid out when an ability is sold.
pub fn sell_price(ability: &Ability) -> u64 {
    ability_value(ability)
}

/// Gold charged to upgrade an ability.
pub fn upgrade_cost(ability: &Ability, config: &GameConfig) -> u64 {
    ability_value(ability).saturating_mul(config.upgrade_cost_multiplier)
}

/// The upgraded form of `ability`.
///
/// Every present attack and block amount rises by one; generate effects keep
/// their color.
pub fn upgrade_ability(ability: &Ability) -> Ability {
    let bump = |effect: Option<Effect>| {
        effect.map(|mut effect| {
            if effect.effect_type != EffectType::Generate {
                effect.amount = effect.amount.saturating_add(1);
            }
            effect
        })
    };

    Ability {
        effect: bump(ability.effect),
        on_energy: ability.on_energy.map(bump),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Element, EnergyColor};

    #[test]
    fn base_effects_count_double() {
        let base = Ability::new(Some(Effect::block(5)));
        let bonus = Ability::new(None).with_energy(EnergyColor::Blue, Effect::block(5));
        assert_eq!(ability_value(&base), 10);
        assert_eq!(ability_value(&bonus), 5);
    }

    #[test]
    fn aoe_attacks_score_per_enemy() {
        let single = Ability::new(Some(Effect::attack(Element::Fire, 4)));
        let aoe = Ability::new(Some(Effect::attack(Element::Fire, 4).aoe()));
        assert_eq!(ability_value(&single), 8);
        assert_eq!(ability_value(&aoe), 24);
    }

    #[test]
    fn generate_has_fixed_worth() {
        let blue = Ability::new(Some(Effect::generate(EnergyColor::Blue)));
        let red = Ability::new(Some(Effect::generate(EnergyColor::Red)));
        assert_eq!(ability_value(&blue), ability_value(&red));
    }

    #[test]
    fn empty_ability_is_worthless() {
        assert_eq!(ability_value(&Ability::default()), 0);
        assert_eq!(sell_price(&Ability::default()), 0);
    }

    #[test]
    fn upgrade_cost_scales_with_multiplier() {
        let ability = Ability::new(Some(Effect::attack(Element::Ice, 3)));
        let config = GameConfig {
            upgrade_cost_multiplier: 5,
            ..GameConfig::default()
        };
        assert_eq!(upgrade_cost(&ability, &config), 30);
    }

    #[test]
    fn upgrade_bumps_amounts_but_not_colors() {
        let ability = Ability::new(Some(Effect::generate(EnergyColor::Green)))
            .with_energy(EnergyColor::Red, Effect::attack(Element::Physical, 2).aoe());
        let upgraded = upgrade_ability(&ability);

        assert_eq!(upgraded.effect, Some(Effect::generate(EnergyColor::Green)));
        assert_eq!(
            upgraded.on_energy[EnergyColor::Red.index()],
            Some(Effect::attack(Element::Physical, 3).aoe())
        );
        assert_eq!(upgraded.on_energy[EnergyColor::Blue.index()], None);
        assert!(ability_value(&upgraded) > ability_value(&ability));
        assert_ne!(upgraded.id(), ability.id());
    }
}
