//! Deterministic rules and data types for a two-year space empire session.
//!
//! `game-core` defines the canonical rules (catalog, decks, production,
//! combat, build economy, events) and exposes pure APIs that the runtime
//! drives one phase at a time. All state mutation flows through
//! [`engine::TurnEngine`], and randomness is always injected through
//! [`RngOracle`] so every transition is reproducible given its rolls.
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod prompt;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use catalog::{
    Catalog, CatalogTables, EventCard, EventEffect, EventId, EventKind, SystemCard,
    SystemCategory, SystemId, Tech, TechId, TechSet,
};
pub use config::GameConfig;
pub use engine::{AttackOrder, BuildOrder, Outcome, Score, TurnEngine, rules};
pub use env::{PcgRng, RngOracle};
pub use error::{CatalogError, DeckKind, EngineError};
pub use prompt::{Choice, Prompt, Status, keys};
pub use state::{BoardSnapshot, Deck, DeckSizes, GameState, Phase, System, TechDisplay};
