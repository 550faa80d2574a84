//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from session workers, the turn engine and the catalog so
//! clients can bubble them up with consistent context.
use thiserror::Error;

use super::GameId;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The key matched no choice of the outstanding prompt. Nothing changed;
    /// the caller may submit another key.
    #[error("invalid choice {key:?}")]
    InvalidChoice { key: String },

    #[error("game {0} not found")]
    GameNotFound(GameId),

    /// The session's driving task is gone (finished or cancelled).
    #[error("game session closed")]
    SessionClosed,

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Engine(#[from] game_core::EngineError),

    #[error(transparent)]
    Catalog(#[from] game_core::CatalogError),
}

impl RuntimeError {
    /// True for errors the caller can fix by retrying with different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidChoice { .. })
    }
}
