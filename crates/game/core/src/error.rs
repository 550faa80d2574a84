//! Error infrastructure for game-core.
//!
//! Player mistakes never reach this module: an invalid choice key is rejected
//! by the interaction layer before the engine sees it. Everything here is a
//! broken precondition (a catalog miss, a draw from an empty deck) and is
//! treated as fatal for the session that hit it.

use crate::catalog::{EventId, SystemId, TechId};
use crate::state::Phase;

/// Which deck a draw was attempted from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DeckKind {
    Near,
    Distant,
    Event,
}

/// Reference data lookups and catalog validation failures.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("system {0} is not in the catalog")]
    UnknownSystem(SystemId),

    #[error("event {0} is not in the catalog")]
    UnknownEvent(EventId),

    #[error("tech {0} is not in the catalog")]
    UnknownTech(TechId),

    #[error("catalog must define exactly one home system, found {found}")]
    HomeSystem { found: usize },

    #[error("system id {0} is defined more than once")]
    DuplicateSystem(SystemId),

    #[error("event id {0} is defined more than once")]
    DuplicateEvent(EventId),

    #[error("tech {0} is defined more than once")]
    DuplicateTech(TechId),

    #[error("tech {tech} requires {prerequisite}, which is not in the catalog")]
    UnknownPrerequisite { tech: TechId, prerequisite: TechId },
}

/// Errors surfaced while advancing the turn engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("cannot draw from the empty {0} deck")]
    EmptyDeck(DeckKind),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("{phase} requires a player choice")]
    MissingChoice { phase: Phase },

    #[error("the game has already ended")]
    Finished,
}
