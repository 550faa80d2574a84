//! Content loaders for reading game data from files.
//!
//! Catalogs are RON, rule constants are TOML. Both decode straight into
//! game-core types through their serde derives.

pub mod catalog;
pub mod config;

pub use catalog::CatalogLoader;
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
