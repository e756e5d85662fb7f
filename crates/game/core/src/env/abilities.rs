//! Ability table oracle.

use std::collections::HashMap;

use crate::state::{Ability, AbilityId};

/// Read access to the ability table a battle resolves against.
pub trait AbilityOracle: Send + Sync {
    fn ability(&self, id: &AbilityId) -> Option<&Ability>;
}

/// Append-only, content-addressed ability table.
///
/// Owned by a session and passed into the resolver explicitly rather than
/// living in a process-wide map. Registering an ability that is already
/// present is a no-op that returns the existing id.
#[derive(Clone, Debug, Default)]
pub struct AbilityRegistry {
    abilities: HashMap<AbilityId, Ability>,
}

impl AbilityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `ability` under its content id and returns that id.
    pub fn register(&mut self, ability: Ability) -> AbilityId {
        let id = ability.id();
        self.abilities.entry(id).or_insert(ability);
        id
    }

    pub fn contains(&self, id: &AbilityId) -> bool {
        self.abilities.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.abilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.abilities.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&AbilityId, &Ability)> {
        self.abilities.iter()
    }
}

impl AbilityOracle for AbilityRegistry {
    fn ability(&self, id: &AbilityId) -> Option<&Ability> {
        self.abilities.get(id)
    }
}

impl FromIterator<Ability> for AbilityRegistry {
    fn from_iter<I: IntoIterator<Item = Ability>>(iter: I) -> Self {
        let mut registry = Self::new();
        for ability in iter {
            registry.register(ability);
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Effect, Element};

    #[test]
    fn registering_twice_keeps_one_entry() {
        let ability = Ability::new(Some(Effect::attack(Element::Physical, 3)));
        let mut registry = AbilityRegistry::new();

        let first = registry.register(ability);
        let second = registry.register(ability);

        assert_eq!(first, second);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.ability(&first), Some(&ability));
    }

    #[test]
    fn lookup_miss_returns_none() {
        let registry = AbilityRegistry::new();
        assert!(registry.ability(&AbilityId([9; 32])).is_none());
    }
}
