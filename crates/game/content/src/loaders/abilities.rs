//! Ability catalog loader.

use std::path::Path;

use crate::catalog::AbilityCatalog;
use crate::loaders::{LoadResult, read_file};

/// Loader for the ability catalog from RON files.
pub struct AbilityLoader;

impl AbilityLoader {
    /// Load the ability catalog from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing an AbilityCatalog
    ///
    /// Generate effects are checked here so a bad color fails at load time
    /// instead of mid-battle.
    pub fn load(path: &Path) -> LoadResult<AbilityCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid ability catalog {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<AbilityCatalog> {
        let catalog: AbilityCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse ability catalog RON: {}", e))?;
        catalog.validate()?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game2_core::{Effect, EnergyColor};

    #[test]
    fn parses_compact_entries() {
        let catalog = AbilityLoader::parse(
            r#"(
                starters: [
                    (
                        name: "spark",
                        count: 2,
                        ability: (
                            effect: Some((effect_type: generate, amount: 2)),
                            on_energy: (None, None, Some((effect_type: attack_fire, amount: 4, is_aoe: true))),
                        ),
                    ),
                    (name: "guard", ability: (effect: Some((effect_type: block, amount: 3)))),
                ],
            )"#,
        )
        .unwrap();

        assert_eq!(catalog.starters.len(), 2);
        assert!(catalog.rewards.is_empty());

        let spark = &catalog.starters[0].ability;
        assert_eq!(spark.effect, Some(Effect::generate(EnergyColor::Red)));
        assert_eq!(spark.on_energy[EnergyColor::Red.index()].map(|e| e.is_aoe), Some(true));

        // count and on_energy fall back to their defaults
        assert_eq!(catalog.starters[1].count, 1);
        assert_eq!(catalog.starters[1].ability.on_energy, [None, None, None]);
    }

    #[test]
    fn rejects_unknown_color() {
        let result = AbilityLoader::parse(
            r#"(starters: [(name: "bad", ability: (effect: Some((effect_type: generate, amount: 3))))])"#,
        );
        assert!(result.is_err());
    }
}
