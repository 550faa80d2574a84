//! Turn engine: one pure transition per phase.
//!
//! [`TurnEngine::advance`] runs the handler for the game's current phase and
//! returns an [`Outcome`]: the next phase, the narrative lines produced on
//! the way, and at most one prompt to issue. The engine never blocks; the
//! caller decides how statuses and prompts reach the player and when the
//! next choice is supplied.
mod attack;
mod build;
mod events;
mod orders;
pub mod rules;
mod year;

pub use orders::{AttackOrder, BuildOrder};
pub use rules::Score;

use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::env::RngOracle;
use crate::error::EngineError;
use crate::prompt::{Choice, Prompt};
use crate::state::{GameState, Phase};

/// Result of advancing one phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Outcome {
    pub next: Phase,
    pub log: Vec<String>,
    pub prompt: Option<Prompt>,
    /// Choice key the handler refused to act on, if any.
    pub rejected: Option<String>,
}

/// What a single handler decided.
struct Step {
    next: Phase,
    prompt: Option<Prompt>,
}

impl Step {
    fn to(next: Phase) -> Self {
        Self { next, prompt: None }
    }

    fn ask(next: Phase, prompt: Prompt) -> Self {
        Self {
            next,
            prompt: Some(prompt),
        }
    }
}

/// Borrowed view over everything a transition needs.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
    catalog: &'a Catalog,
    config: &'a GameConfig,
    rng: &'a mut dyn RngOracle,
    log: Vec<String>,
    rejected: Option<String>,
}

impl<'a> TurnEngine<'a> {
    pub fn new(
        state: &'a mut GameState,
        catalog: &'a Catalog,
        config: &'a GameConfig,
        rng: &'a mut dyn RngOracle,
    ) -> Self {
        Self {
            state,
            catalog,
            config,
            rng,
            log: Vec::new(),
            rejected: None,
        }
    }

    /// Runs the current phase's handler and moves the game to its next phase.
    ///
    /// `choice` must be supplied for phases that [`Phase::awaits_choice`]; it
    /// is ignored elsewhere. On error the game state may be partially
    /// updated and the session should be ended.
    pub fn advance(mut self, choice: Option<&Choice>) -> Result<Outcome, EngineError> {
        let phase = self.state.phase;
        let step = match phase {
            Phase::StartOfTurn => self.start_of_turn(),
            Phase::PhaseOne => self.phase_one(Self::require(phase, choice)?)?,
            Phase::Collect => self.collect()?,
            Phase::ChooseBuild => self.choose_build(),
            Phase::DoBuild => self.do_build(Self::require(phase, choice)?)?,
            Phase::Event => self.event()?,
            Phase::Revolt => self.revolt()?,
            Phase::SmallInvasion | Phase::LargeInvasion => self.invasion()?,
            Phase::EndOfTurn => self.end_of_turn()?,
            Phase::Win => self.win(),
            Phase::Lose => self.lose(),
            Phase::End => return Err(EngineError::Finished),
        };
        self.state.phase = step.next;
        Ok(Outcome {
            next: step.next,
            log: self.log,
            prompt: step.prompt,
            rejected: self.rejected,
        })
    }

    fn require(phase: Phase, choice: Option<&Choice>) -> Result<&Choice, EngineError> {
        choice.ok_or(EngineError::MissingChoice { phase })
    }

    fn say(&mut self, message: impl Into<String>) {
        self.log.push(message.into());
    }

    /// Records a key that reached a handler without matching anything it
    /// can act on. The state is left untouched.
    fn reject(&mut self, key: &str, message: String) {
        self.rejected = Some(key.to_string());
        self.say(message);
    }

    fn roll(&mut self) -> u32 {
        self.rng.roll_die(self.config.die_sides)
    }
}
