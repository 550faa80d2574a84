//! Catalog loader.

use std::path::Path;

use game_core::Catalog;

use crate::loaders::{LoadResult, read_file};

/// Loader for system, event and tech tables from RON files.
///
/// The file holds a `CatalogTables` struct; validation runs while decoding,
/// so a catalog with no home system or a dangling prerequisite is rejected
/// here rather than mid-game.
pub struct CatalogLoader;

impl CatalogLoader {
    /// Load and validate a catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Catalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse and validate a catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Catalog> {
        let catalog: Catalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse catalog RON: {}", e))?;

        Ok(catalog)
    }

    /// Render a catalog back to RON, e.g. to seed a custom catalog file.
    pub fn to_ron(catalog: &Catalog) -> LoadResult<String> {
        ron::ser::to_string_pretty(catalog, ron::ser::PrettyConfig::default())
            .map_err(|e| anyhow::anyhow!("Failed to encode catalog RON: {}", e))
    }
}
