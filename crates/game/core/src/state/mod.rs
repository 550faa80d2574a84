//! The game aggregate and its parts.
mod board;
mod deck;
mod phase;
mod system;

pub use board::{BoardSnapshot, DeckSizes, TechDisplay};
pub use deck::Deck;
pub use phase::Phase;
pub use system::System;

use crate::catalog::{Catalog, EventId, EventKind, SystemId, TechSet};
use crate::config::GameConfig;
use crate::engine::rules;
use crate::env::RngOracle;
use crate::error::{DeckKind, EngineError};

/// Aggregate root of one session. Mutated only by the turn engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub phase: Phase,
    pub year: u32,
    pub event_deck: Deck<EventId>,
    pub near_deck: Deck<SystemId>,
    pub distant_deck: Deck<SystemId>,
    /// Conquered systems; index 0 is always the home system.
    pub empire: Vec<System>,
    /// Discovered but unconquered systems.
    pub explored: Vec<System>,
    pub active_event: Option<EventId>,
    pub techs: TechSet,
    /// Once-per-turn abilities already used this turn.
    pub used_techs: TechSet,
    /// Armed by Interstellar Diplomacy, consumed by the next attack.
    pub free_conquest: bool,
    pub metal_storage: u32,
    pub wealth_storage: u32,
    pub military_strength: u32,
    pub metal_production: u32,
    pub wealth_production: u32,
}

impl GameState {
    /// Sets up a fresh game: home system in the Empire, decks shuffled, the
    /// opening event discards drawn, production computed.
    pub fn new(
        catalog: &Catalog,
        config: &GameConfig,
        rng: &mut dyn RngOracle,
    ) -> Result<Self, EngineError> {
        let home = catalog.system(catalog.home_system())?;

        let mut event_deck = Deck::shuffled(catalog.event_deck(), rng);
        discard(&mut event_deck, config.opening_event_discards)?;
        let near_deck = Deck::shuffled(catalog.near_deck(), rng);
        let distant_deck = Deck::shuffled(catalog.distant_deck(), rng);

        let mut state = Self {
            phase: Phase::StartOfTurn,
            year: 1,
            event_deck,
            near_deck,
            distant_deck,
            empire: vec![System::from(home)],
            explored: Vec::new(),
            active_event: None,
            techs: TechSet::empty(),
            used_techs: TechSet::empty(),
            free_conquest: false,
            metal_storage: 0,
            wealth_storage: 0,
            military_strength: 0,
            metal_production: 0,
            wealth_production: 0,
        };
        state.refresh_production(catalog)?;
        Ok(state)
    }

    /// True while the active event is a strike.
    pub fn strike_active(&self, catalog: &Catalog) -> Result<bool, EngineError> {
        match self.active_event {
            Some(id) => Ok(catalog.event(id)?.kind == EventKind::Strike),
            None => Ok(false),
        }
    }

    /// Recomputes production from the Empire and the active event.
    pub fn refresh_production(&mut self, catalog: &Catalog) -> Result<(), EngineError> {
        let strike = self.strike_active(catalog)?;
        let production = rules::production(&self.empire, strike, self.techs);
        self.metal_production = production.metal;
        self.wealth_production = production.wealth;
        Ok(())
    }

    /// Every system id currently placed somewhere: Empire, Explored, or a deck.
    pub fn system_ids(&self) -> Vec<SystemId> {
        self.empire
            .iter()
            .chain(&self.explored)
            .map(|s| s.id)
            .chain(self.near_deck.iter())
            .chain(self.distant_deck.iter())
            .collect()
    }
}

/// Draws and drops `count` cards.
pub(crate) fn discard<T: Copy + PartialEq>(
    deck: &mut Deck<T>,
    count: usize,
) -> Result<(), EngineError> {
    for _ in 0..count {
        deck.draw().ok_or(EngineError::EmptyDeck(DeckKind::Event))?;
    }
    Ok(())
}
