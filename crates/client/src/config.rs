//! Environment-driven client configuration.
use std::env;
use std::path::PathBuf;

use game2_core::{Biome, Level};

/// Everything the client needs to pick content, a player and a battle.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Content directory; the bundled content is used when unset.
    pub content_dir: Option<PathBuf>,
    /// Key the player id is derived from.
    pub seed: String,
    pub max_rounds: u64,
    pub level: Level,
    pub event_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            content_dir: None,
            seed: "game2-local-player".to_owned(),
            max_rounds: 50,
            level: Level::new(Biome::Grasslands, 1),
            event_capacity: 4096,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `GAME2_CONTENT_DIR`
    /// - `GAME2_SEED`
    /// - `GAME2_MAX_ROUNDS`
    /// - `GAME2_BIOME` / `GAME2_DIFFICULTY`
    /// - `GAME2_EVENT_CAPACITY`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = env::var_os("GAME2_CONTENT_DIR") {
            config.content_dir = Some(PathBuf::from(dir));
        }

        if let Ok(seed) = env::var("GAME2_SEED")
            && !seed.is_empty()
        {
            config.seed = seed;
        }

        if let Some(rounds) = read_env::<u64>("GAME2_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        if let Some(biome) = read_env::<Biome>("GAME2_BIOME") {
            config.level.biome = biome;
        }

        if let Some(difficulty) = read_env::<u32>("GAME2_DIFFICULTY") {
            config.level.difficulty = difficulty;
        }

        if let Some(capacity) = read_env::<usize>("GAME2_EVENT_CAPACITY") {
            config.event_capacity = capacity.max(1);
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
