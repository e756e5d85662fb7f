use game2_core::{Ability, AbilityId, AbilityRegistry, CombatError};
use serde::{Deserialize, Serialize};

fn one() -> u32 {
    1
}

/// A catalog entry: an ability plus the label it is shown under.
///
/// `count` only matters for starters, where it is the number of copies a
/// fresh account receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedAbility {
    pub name: String,
    #[serde(default = "one")]
    pub count: u32,
    pub ability: Ability,
}

/// Every ability the game knows about, split by how players obtain it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityCatalog {
    /// Granted on registration.
    pub starters: Vec<NamedAbility>,
    /// Pool the quest reward draw picks from.
    #[serde(default)]
    pub rewards: Vec<NamedAbility>,
}

impl AbilityCatalog {
    pub fn iter(&self) -> impl Iterator<Item = &NamedAbility> {
        self.starters.iter().chain(self.rewards.iter())
    }

    /// Checks every generate effect in the catalog names a real color.
    pub fn validate(&self) -> Result<(), CombatError> {
        self.iter().try_for_each(|entry| entry.ability.validate())
    }

    /// Ability table seeded with the whole catalog.
    pub fn registry(&self) -> AbilityRegistry {
        self.iter().map(|entry| entry.ability).collect()
    }

    /// `(id, copies)` pairs a new account starts with.
    pub fn starter_grants(&self) -> Vec<(AbilityId, u32)> {
        self.starters
            .iter()
            .map(|entry| (entry.ability.id(), entry.count))
            .collect()
    }

    /// Abilities the quest reward draw picks from, in catalog order.
    pub fn reward_pool(&self) -> Vec<Ability> {
        self.rewards.iter().map(|entry| entry.ability).collect()
    }

    pub fn find(&self, name: &str) -> Option<&NamedAbility> {
        self.iter().find(|entry| entry.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game2_core::{AbilityOracle, Effect, EffectType, Element};

    fn entry(name: &str, count: u32, effect: Effect) -> NamedAbility {
        NamedAbility {
            name: name.to_owned(),
            count,
            ability: Ability::new(Some(effect)),
        }
    }

    #[test]
    fn registry_covers_starters_and_rewards() {
        let catalog = AbilityCatalog {
            starters: vec![entry("jab", 3, Effect::attack(Element::Physical, 2))],
            rewards: vec![entry("frost", 1, Effect::attack(Element::Ice, 6).aoe())],
        };
        let registry = catalog.registry();

        assert_eq!(registry.len(), 2);
        for named in catalog.iter() {
            assert!(registry.ability(&named.ability.id()).is_some());
        }
        assert_eq!(catalog.starter_grants()[0].1, 3);
        assert_eq!(catalog.reward_pool().len(), 1);
        assert_eq!(catalog.find("frost").map(|e| e.count), Some(1));
    }

    #[test]
    fn validate_rejects_bad_generate() {
        let catalog = AbilityCatalog {
            starters: vec![entry("broken", 1, Effect::new(EffectType::Generate, 9, false))],
            rewards: Vec::new(),
        };
        assert!(catalog.validate().is_err());
    }
}
