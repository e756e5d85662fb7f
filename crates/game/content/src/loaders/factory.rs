//! Content factory for building oracles from data files.

use std::path::{Path, PathBuf};

use game2_core::GameConfig;

use crate::catalog::{AbilityCatalog, LevelTable};
use crate::loaders::{AbilityLoader, ConfigLoader, LevelLoader, LoadResult};

/// Everything a session needs from the data directory.
#[derive(Debug, Clone)]
pub struct GameContent {
    pub config: GameConfig,
    pub abilities: AbilityCatalog,
    pub levels: LevelTable,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── abilities.ron
/// └── levels.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the ability catalog from `abilities.ron`.
    pub fn load_abilities(&self) -> LoadResult<AbilityCatalog> {
        AbilityLoader::load(&self.data_dir.join("abilities.ron"))
    }

    /// Load the level table from `levels.ron`.
    pub fn load_levels(&self) -> LoadResult<LevelTable> {
        LevelLoader::load(&self.data_dir.join("levels.ron"))
    }

    pub fn load_all(&self) -> LoadResult<GameContent> {
        Ok(GameContent {
            config: self.load_config()?,
            abilities: self.load_abilities()?,
            levels: self.load_levels()?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let factory = ContentFactory::new("/nonexistent/game2");
        let err = factory.load_config().unwrap_err();
        assert!(err.to_string().contains("/nonexistent/game2/config.toml"));
    }
}
