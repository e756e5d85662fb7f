//! Level table loader.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{LevelSpec, LevelTable};
use crate::loaders::{LoadResult, read_file};

/// Level file structure for RON files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelFile {
    pub levels: Vec<LevelSpec>,
}

/// Loader for the level table from RON files.
pub struct LevelLoader;

impl LevelLoader {
    /// Load every level from a RON file, validating roster sizes.
    pub fn load(path: &Path) -> LoadResult<LevelTable> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level table {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LevelTable> {
        let file: LevelFile = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level table RON: {}", e))?;

        let count = file.levels.len();
        let table = LevelTable::new(file.levels);
        if table.len() != count {
            anyhow::bail!("level table lists the same biome/difficulty twice");
        }
        table.validate()?;

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game2_core::{Biome, BossType, Effectiveness, Level, LevelOracle};

    #[test]
    fn parses_levels_with_defaults() {
        let table = LevelLoader::parse(
            r#"(levels: [
                (
                    biome: tundra,
                    difficulty: 1,
                    enemies: [(hp: 20, attack: 4, fire_def: super_effective)],
                    boss: [(hp: 80, attack: 9, block: 3, boss_type: boss)],
                ),
            ])"#,
        )
        .unwrap();

        let level = Level::new(Biome::Tundra, 1);
        let enemy = table.enemies(&level).unwrap()[0];
        assert_eq!(enemy.fire_def, Effectiveness::SuperEffective);
        assert_eq!(enemy.ice_def, Effectiveness::Neutral);
        assert_eq!(enemy.block, 0);
        assert_eq!(table.boss(&level).unwrap()[0].boss_type, BossType::Boss);
    }

    #[test]
    fn rejects_duplicate_levels() {
        let entry = "(biome: cave, difficulty: 1, enemies: [(hp: 1)])";
        let result = LevelLoader::parse(&format!("(levels: [{entry}, {entry}])"));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_empty_roster() {
        let result = LevelLoader::parse("(levels: [(biome: cave, difficulty: 1, enemies: [])])");
        assert!(result.is_err());
    }
}
