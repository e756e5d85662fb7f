//! Game configuration loader.

use std::path::Path;

use game2_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing GameConfig
    ///
    /// Missing keys keep their built-in defaults. An empty victory gold
    /// range is rejected here rather than on the first won battle.
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.victory_gold_min > config.victory_gold_max {
            anyhow::bail!(
                "victory gold range {}..={} is empty",
                config.victory_gold_min,
                config.victory_gold_max
            );
        }

        Ok(config)
    }
}
