//! Async runtime for Space Empire game sessions.
//!
//! This crate wraps the pure turn engine of `game-core` in tokio tasks and
//! exposes each game through a cloneable [`SessionHandle`]. Consumers embed
//! [`Runtime`] to start, look up and cancel games.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the session registry and its builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`autoplay`] drives a session with a [`DecisionProvider`]
//! - `bridge` and `workers` stay internal to the crate
pub mod api;
pub mod autoplay;
pub mod runtime;

mod bridge;
mod workers;

pub use api::{
    BideProvider, DecisionProvider, FirstChoiceProvider, GameId, PromptEvent, Result,
    RuntimeError, ScriptedProvider, SessionHandle, StatusEvent,
};
pub use autoplay::autoplay;
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
