//! Session worker that owns the authoritative [`game_core::GameState`].
//!
//! Runs the turn engine one phase at a time and moves its results across the
//! bridge: statuses and prompts out, choices in, one board snapshot per
//! completed phase.

use std::sync::Arc;

use game_core::{Catalog, GameConfig, GameState, Outcome, PcgRng, Phase, TurnEngine};
use tracing::{debug, error, info, warn};

use crate::api::{GameId, Result, RuntimeError};
use crate::bridge::Bridge;

/// Background task driving one game.
///
/// All mutation of the game state happens here; clients only ever see
/// the values the worker hands them.
pub(crate) struct SessionWorker {
    game: GameId,
    state: GameState,
    catalog: Arc<Catalog>,
    config: GameConfig,
    rng: PcgRng,
    bridge: Bridge,
}

impl SessionWorker {
    pub(crate) fn new(
        game: GameId,
        state: GameState,
        catalog: Arc<Catalog>,
        config: GameConfig,
        rng: PcgRng,
        bridge: Bridge,
    ) -> Self {
        Self {
            game,
            state,
            catalog,
            config,
            rng,
            bridge,
        }
    }

    /// Main worker loop.
    pub(crate) async fn run(mut self) {
        info!(target: "runtime::session", game = %self.game, "session started");

        match self.drive().await {
            Ok(()) => info!(
                target: "runtime::session",
                game = %self.game,
                year = self.state.year,
                "session finished"
            ),
            Err(RuntimeError::SessionClosed) => {
                debug!(target: "runtime::session", game = %self.game, "clients went away")
            }
            Err(err) => {
                error!(target: "runtime::session", game = %self.game, error = %err, "session aborted")
            }
        }
    }

    async fn drive(&mut self) -> Result<()> {
        loop {
            if self.state.phase.is_terminal() {
                return self.bridge.finish().await;
            }

            let choice = if self.state.phase.awaits_choice() {
                Some(self.bridge.await_choice().await?)
            } else {
                None
            };

            let phase = self.state.phase;
            let result = TurnEngine::new(&mut self.state, &self.catalog, &self.config, &mut self.rng)
                .advance(choice.as_ref());

            match result {
                Ok(outcome) => self.publish(phase, outcome).await?,
                Err(err) => {
                    error!(
                        target: "runtime::session",
                        game = %self.game,
                        %phase,
                        error = %err,
                        "turn engine failed, ending game"
                    );
                    self.state.phase = Phase::End;
                }
            }

            match self.state.board(&self.catalog) {
                Ok(board) => self.bridge.ready(board).await?,
                Err(err) => {
                    error!(
                        target: "runtime::session",
                        game = %self.game,
                        error = %err,
                        "board projection failed, ending game"
                    );
                    self.state.phase = Phase::End;
                }
            }
        }
    }

    async fn publish(&mut self, phase: Phase, outcome: Outcome) -> Result<()> {
        debug!(
            target: "runtime::session",
            game = %self.game,
            from = %phase,
            to = %outcome.next,
            year = self.state.year,
            "phase advanced"
        );

        if let Some(key) = &outcome.rejected {
            warn!(target: "runtime::session", game = %self.game, %phase, key = %key, "choice rejected by engine");
        }

        for line in outcome.log {
            self.bridge.log(line).await?;
        }

        if let Some(prompt) = outcome.prompt {
            self.bridge.issue_prompt(prompt).await?;
        }
        Ok(())
    }
}
