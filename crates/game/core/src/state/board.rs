use super::{GameState, Phase, System};
use crate::catalog::{Catalog, EventCard, TechId};
use crate::error::CatalogError;

/// One row of the tech display.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TechDisplay {
    pub id: TechId,
    pub cost: u32,
    pub name: String,
    pub ability: String,
    pub owned: bool,
}

/// Cards left in each deck.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DeckSizes {
    pub near: usize,
    pub distant: usize,
    pub events: usize,
}

/// Read-only projection of a game, taken at the end of a phase.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSnapshot {
    pub phase: Phase,
    pub year: u32,
    pub metal_production: u32,
    pub wealth_production: u32,
    pub metal_storage: u32,
    pub wealth_storage: u32,
    pub military_strength: u32,
    pub empire: Vec<System>,
    pub explored: Vec<System>,
    pub gen1_techs: Vec<TechDisplay>,
    pub gen2_techs: Vec<TechDisplay>,
    pub active_event: Option<EventCard>,
    pub decks: DeckSizes,
}

impl GameState {
    pub fn board(&self, catalog: &Catalog) -> Result<BoardSnapshot, CatalogError> {
        let display = |generation: u8| -> Vec<TechDisplay> {
            catalog
                .techs()
                .iter()
                .filter(|t| t.generation == generation)
                .map(|t| TechDisplay {
                    id: t.id,
                    cost: t.cost,
                    name: t.name.clone(),
                    ability: t.ability.clone(),
                    owned: self.techs.has(t.id),
                })
                .collect()
        };

        let active_event = self
            .active_event
            .map(|id| catalog.event(id).cloned())
            .transpose()?;

        Ok(BoardSnapshot {
            phase: self.phase,
            year: self.year,
            metal_production: self.metal_production,
            wealth_production: self.wealth_production,
            metal_storage: self.metal_storage,
            wealth_storage: self.wealth_storage,
            military_strength: self.military_strength,
            empire: self.empire.clone(),
            explored: self.explored.clone(),
            gen1_techs: display(1),
            gen2_techs: display(2),
            active_event,
            decks: DeckSizes {
                near: self.near_deck.len(),
                distant: self.distant_deck.len(),
                events: self.event_deck.len(),
            },
        })
    }
}
