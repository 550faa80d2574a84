//! Fixtures shared by the unit tests.

use std::collections::VecDeque;

use crate::catalog::{
    Catalog, CatalogTables, EventCard, EventEffect, EventKind, SystemCard, SystemCategory,
    SystemId, Tech, TechId,
};
use crate::config::GameConfig;
use crate::engine::{Outcome, TurnEngine};
use crate::env::RngOracle;
use crate::error::EngineError;
use crate::prompt::Choice;
use crate::state::{GameState, System};

/// Oracle that replays queued values and yields 0 once they run out, which
/// leaves shuffled decks in catalog order.
#[derive(Debug, Default)]
pub struct ScriptedRng {
    values: VecDeque<u32>,
    consumed: usize,
}

impl ScriptedRng {
    /// Queues a die result (1-based).
    pub fn push_roll(&mut self, roll: u32) {
        self.values.push_back(roll - 1);
    }

    pub fn consumed(&self) -> usize {
        self.consumed
    }
}

impl RngOracle for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.consumed += 1;
        self.values.pop_front().unwrap_or(0)
    }
}

/// Small catalog: home, three near systems, one distant system, the full
/// event set and the full tech tree.
pub fn catalog() -> Catalog {
    use EventEffect::*;
    use SystemCategory::*;
    use TechId::*;

    let revolt_note = "+1 System Resistance With Hyper Television";
    let invasion_note = "Add +1 Resistance With Planetary Defenses";
    let tables = CatalogTables {
        systems: vec![
            SystemCard::new(1, "Home World", Home, 0, 1, 1, 0),
            SystemCard::new(2, "Cygnus", Near, 5, 0, 1, 1),
            SystemCard::new(3, "Epsilon Eridani", Near, 8, 0, 0, 1),
            SystemCard::new(4, "Procyon", Near, 7, 0, 1, 1),
            SystemCard::new(9, "Canopus", Distant, 9, 0, 1, 2),
        ],
        events: vec![
            EventCard::new(1, EventKind::Asteroid, GainWealth(1), GainWealth(1)),
            EventCard::new(2, EventKind::DerelictShip, GainMetal(1), GainMetal(1)),
            EventCard::new(3, EventKind::LargeInvasionForce, Force(2), Force(3)).with_modifier(invasion_note),
            EventCard::new(4, EventKind::PeaceAndQuiet, NoEffect, NoEffect),
            EventCard::new(5, EventKind::Revolt, Force(1), Force(2)).with_modifier(revolt_note),
            EventCard::new(6, EventKind::Revolt, Force(1), Force(3)).with_modifier(revolt_note),
            EventCard::new(7, EventKind::SmallInvasionForce, Force(1), Force(2)).with_modifier(invasion_note),
            EventCard::new(8, EventKind::Strike, NoResources, NoResources),
        ],
        techs: vec![
            Tech::new(CapitalShips, "Capital Ships", "Advance beyond military strength 3", 3, None, 1),
            Tech::new(RobotWorkers, "Robot Workers", "Receive 1/2 production during strike", 2, None, 1),
            Tech::new(HyperTelevision, "Hyper Television", "+1 to resistance during revolt", 3, None, 1),
            Tech::new(InterspeciesCommerce, "Interspecies Commerce", "Exchange 2 of one resource for 1 of the other", 2, None, 1),
            Tech::new(ForwardStarbases, "Forward Starbases", "Required to explore distant systems", 4, Some(CapitalShips), 2),
            Tech::new(PlanetaryDefenses, "Planetary Defenses", "+1 to resistance during invasion", 4, Some(RobotWorkers), 2),
            Tech::new(InterstellarDiplomacy, "Interstellar Diplomacy", "Next planet is conquered for free", 5, Some(HyperTelevision), 2),
            Tech::new(InterstellarBanking, "Interstellar Banking", "Advance beyond storage value 3", 3, Some(InterspeciesCommerce), 2),
        ],
    };
    Catalog::new(tables).expect("fixture catalog is valid")
}

/// Fresh game over [`catalog`] with decks in catalog order.
pub fn new_game() -> (GameState, Catalog) {
    let catalog = catalog();
    let state = GameState::new(&catalog, &GameConfig::default(), &mut ScriptedRng::default())
        .expect("new game");
    (state, catalog)
}

/// Asserts every catalog system sits in exactly one place.
pub fn assert_conserved(state: &GameState, catalog: &Catalog) {
    let mut placed = state.system_ids();
    placed.sort();
    let mut all: Vec<SystemId> = catalog.systems().iter().map(|s| s.id).collect();
    all.sort();
    assert_eq!(placed, all, "systems are not conserved");
}

/// A game plus everything needed to advance it one phase at a time.
pub struct Harness {
    pub state: GameState,
    pub catalog: Catalog,
    pub config: GameConfig,
    pub rng: ScriptedRng,
}

impl Harness {
    pub fn new() -> Self {
        let (state, catalog) = new_game();
        Self {
            state,
            catalog,
            config: GameConfig::default(),
            rng: ScriptedRng::default(),
        }
    }

    pub fn try_advance(&mut self, choice: Option<&Choice>) -> Result<Outcome, EngineError> {
        TurnEngine::new(&mut self.state, &self.catalog, &self.config, &mut self.rng).advance(choice)
    }

    pub fn advance(&mut self, choice: Option<&Choice>) -> Outcome {
        self.try_advance(choice).expect("phase advances")
    }

    /// Pulls a system out of its deck and places it in Explored.
    pub fn explore_into_explored(&mut self, id: SystemId) {
        let system = self.take_from_deck(id);
        self.state.explored.push(system);
    }

    /// Pulls a system out of its deck and places it in the Empire.
    pub fn conquer(&mut self, id: SystemId) {
        let system = self.take_from_deck(id);
        self.state.empire.push(system);
    }

    fn take_from_deck(&mut self, id: SystemId) -> System {
        for deck in [&mut self.state.near_deck, &mut self.state.distant_deck] {
            if deck.contains(id) {
                let rest: Vec<SystemId> = deck.iter().filter(|&c| c != id).collect();
                *deck = crate::state::Deck::new(rest);
            }
        }
        System::from(self.catalog.system(id).expect("fixture system"))
    }
}
