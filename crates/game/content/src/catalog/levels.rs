use std::collections::HashMap;

use game2_core::{Biome, CombatError, EnemyRoster, EnemyStats, Level, LevelOracle};
use serde::{Deserialize, Serialize};

/// One level's rosters as written in `levels.ron`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSpec {
    pub biome: Biome,
    pub difficulty: u32,
    /// Regular battle roster.
    pub enemies: Vec<EnemyStats>,
    /// Roster of the boss battle a quest on this level turns into.
    #[serde(default)]
    pub boss: Vec<EnemyStats>,
}

impl LevelSpec {
    pub const fn level(&self) -> Level {
        Level::new(self.biome, self.difficulty)
    }

    /// Both rosters must hold 1 to 3 enemies (an empty boss roster is allowed).
    pub fn validate(&self) -> Result<(), CombatError> {
        EnemyRoster::new(&self.enemies)?;
        if !self.boss.is_empty() {
            EnemyRoster::new(&self.boss)?;
        }
        Ok(())
    }
}

/// Level lookup keyed by biome and difficulty.
#[derive(Debug, Clone, Default)]
pub struct LevelTable {
    levels: HashMap<Level, LevelSpec>,
}

impl LevelTable {
    pub fn new(specs: impl IntoIterator<Item = LevelSpec>) -> Self {
        Self {
            levels: specs.into_iter().map(|spec| (spec.level(), spec)).collect(),
        }
    }

    pub fn get(&self, level: &Level) -> Option<&LevelSpec> {
        self.levels.get(level)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn validate(&self) -> Result<(), CombatError> {
        self.levels.values().try_for_each(LevelSpec::validate)
    }
}

impl LevelOracle for LevelTable {
    fn enemies(&self, level: &Level) -> Option<&[EnemyStats]> {
        self.levels.get(level).map(|spec| spec.enemies.as_slice())
    }

    fn boss(&self, level: &Level) -> Option<&[EnemyStats]> {
        self.levels
            .get(level)
            .map(|spec| spec.boss.as_slice())
            .filter(|boss| !boss.is_empty())
    }

    fn max_difficulty(&self, biome: Biome) -> Option<u32> {
        self.levels
            .keys()
            .filter(|level| level.biome == biome)
            .map(|level| level.difficulty)
            .max()
    }
}
