//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the
//! catalog types and oracle implementations in [`crate::catalog`].

pub mod abilities;
pub mod config;
pub mod factory;
pub mod levels;

pub use abilities::AbilityLoader;
pub use config::ConfigLoader;
pub use factory::{ContentFactory, GameContent};
pub use levels::LevelLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
