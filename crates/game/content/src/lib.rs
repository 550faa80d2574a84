//! Static game content and loaders for data files.
//!
//! This crate houses the standard catalog (11 systems, 8 event cards, 8
//! technologies) and, behind the `loaders` feature, readers for:
//! - Alternative catalogs (data-driven via RON)
//! - Rule constants (data-driven via TOML)
//!
//! Content is handed to the runtime once at startup and never appears in
//! game state except as copied system cards.

mod standard;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use standard::{standard_catalog, standard_tables};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ConfigLoader};
