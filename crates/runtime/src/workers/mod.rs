//! Worker tasks that back the runtime orchestration.
//!
//! Each game session is driven by exactly one [`SessionWorker`], which owns
//! the authoritative game state for the lifetime of the session.

mod session;

pub(crate) use session::SessionWorker;
