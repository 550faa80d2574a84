//! High-level runtime orchestrator.
//!
//! The runtime is a registry of independent game sessions. Each session is
//! driven by its own worker task; the registry only stores the client handle
//! and the task handle needed to cancel it.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use game_core::{Catalog, GameConfig, GameState, PcgRng};

use crate::api::{GameId, Result, RuntimeError, SessionHandle};
use crate::bridge;
use crate::workers::SessionWorker;

/// Runtime configuration shared by every session it starts.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Seed for every session's RNG. `None` draws a fresh seed per session.
    pub seed: Option<u64>,
    pub game_config: GameConfig,
    pub choice_capacity: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            game_config: GameConfig::default(),
            choice_capacity: 1,
        }
    }
}

struct Session {
    handle: SessionHandle,
    task: JoinHandle<()>,
}

/// Main runtime that owns the running game sessions.
///
/// [`SessionHandle`] provides the cloneable façade for clients of one game.
pub struct Runtime {
    config: RuntimeConfig,
    catalog: Arc<Catalog>,
    sessions: RwLock<HashMap<GameId, Session>>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sets up a new game and spawns the task that drives it.
    pub async fn start_game(&self) -> Result<SessionHandle> {
        let id = GameId::new();
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = PcgRng::new(seed);

        let state = GameState::new(&self.catalog, &self.config.game_config, &mut rng)?;
        let board = state.board(&self.catalog)?;
        let (bridge, client) = bridge::channel(id, board, self.config.choice_capacity);
        let handle = SessionHandle::new(id, client);

        let worker = SessionWorker::new(
            id,
            state,
            Arc::clone(&self.catalog),
            self.config.game_config.clone(),
            rng,
            bridge,
        );
        let task = tokio::spawn(worker.run());

        let mut sessions = self.sessions.write().await;
        prune_finished(&mut sessions);
        sessions.insert(
            id,
            Session {
                handle: handle.clone(),
                task,
            },
        );
        info!(target: "runtime::registry", game = %id, seed, "game started");
        Ok(handle)
    }

    /// Looks up a running game.
    ///
    /// Games whose worker has finished are dropped from the registry here.
    pub async fn session(&self, id: GameId) -> Result<SessionHandle> {
        {
            let sessions = self.sessions.read().await;
            match sessions.get(&id) {
                Some(session) if !session.task.is_finished() => return Ok(session.handle.clone()),
                Some(_) => {}
                None => return Err(RuntimeError::GameNotFound(id)),
            }
        }

        self.sessions.write().await.remove(&id);
        debug!(target: "runtime::registry", game = %id, "pruned finished game");
        Err(RuntimeError::GameNotFound(id))
    }

    /// Cancels a game.
    ///
    /// The worker is aborted, which drops its side of every mailbox: blocked
    /// and future receives observe the end markers, and choice submissions
    /// fail with [`RuntimeError::SessionClosed`].
    pub async fn end_game(&self, id: GameId) -> Result<()> {
        let session = self
            .sessions
            .write()
            .await
            .remove(&id)
            .ok_or(RuntimeError::GameNotFound(id))?;

        session.task.abort();
        match session.task.await {
            Ok(()) => {}
            Err(err) if err.is_cancelled() => {}
            Err(err) => return Err(RuntimeError::WorkerJoin(err)),
        }
        info!(target: "runtime::registry", game = %id, "game ended");
        Ok(())
    }

    /// Ids of the games whose worker is still running.
    ///
    /// Finished games are dropped from the registry on the way.
    pub async fn active_games(&self) -> Vec<GameId> {
        let mut sessions = self.sessions.write().await;
        prune_finished(&mut sessions);
        sessions.keys().copied().collect()
    }

    /// Cancels every game still registered.
    pub async fn shutdown(self) -> Result<()> {
        let sessions = self.sessions.into_inner();
        for (id, session) in sessions {
            session.task.abort();
            match session.task.await {
                Ok(()) => {}
                Err(err) if err.is_cancelled() => {
                    debug!(target: "runtime::registry", game = %id, "game cancelled on shutdown")
                }
                Err(err) => return Err(RuntimeError::WorkerJoin(err)),
            }
        }
        Ok(())
    }
}

fn prune_finished(sessions: &mut HashMap<GameId, Session>) {
    sessions.retain(|id, session| {
        let finished = session.task.is_finished();
        if finished {
            debug!(target: "runtime::registry", game = %id, "pruned finished game");
        }
        !finished
    });
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    catalog: Option<Catalog>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            catalog: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Use a fixed seed for every session.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Play with a custom catalog instead of the standard one.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> Result<Runtime> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => game_content::standard_catalog()?,
        };

        Ok(Runtime {
            config: self.config,
            catalog: Arc::new(catalog),
            sessions: RwLock::new(HashMap::new()),
        })
    }
}
