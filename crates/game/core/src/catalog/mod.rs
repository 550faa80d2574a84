//! Immutable reference data: systems, event cards and technologies.
//!
//! A [`Catalog`] is validated once at construction and then shared read-only
//! by every session. Deck templates are derived from it on demand; the engine
//! shuffles and drains its own copies.
mod event;
mod system;
mod tech;

use std::collections::HashSet;

pub use event::{EventCard, EventEffect, EventId, EventKind};
pub use system::{SystemCard, SystemCategory, SystemId};
pub use tech::{Tech, TechId, TechSet};

use crate::error::CatalogError;

/// Raw tables as they appear in a catalog file, before validation.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogTables {
    pub systems: Vec<SystemCard>,
    pub events: Vec<EventCard>,
    pub techs: Vec<Tech>,
}

/// Validated, immutable game reference data.
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CatalogTables", into = "CatalogTables")
)]
pub struct Catalog {
    home: SystemId,
    systems: Vec<SystemCard>,
    events: Vec<EventCard>,
    techs: Vec<Tech>,
}

impl Catalog {
    /// Validates the tables: exactly one home system, unique ids, and every
    /// prerequisite resolvable.
    pub fn new(tables: CatalogTables) -> Result<Self, CatalogError> {
        let CatalogTables {
            systems,
            events,
            techs,
        } = tables;

        let homes: Vec<SystemId> = systems
            .iter()
            .filter(|s| s.category == SystemCategory::Home)
            .map(|s| s.id)
            .collect();
        let [home] = homes[..] else {
            return Err(CatalogError::HomeSystem { found: homes.len() });
        };

        let mut seen = HashSet::new();
        for system in &systems {
            if !seen.insert(system.id) {
                return Err(CatalogError::DuplicateSystem(system.id));
            }
        }
        let mut seen = HashSet::new();
        for event in &events {
            if !seen.insert(event.id) {
                return Err(CatalogError::DuplicateEvent(event.id));
            }
        }
        let mut seen = HashSet::new();
        for tech in &techs {
            if !seen.insert(tech.id) {
                return Err(CatalogError::DuplicateTech(tech.id));
            }
        }
        for tech in &techs {
            match tech.prerequisite {
                Some(prerequisite) if !seen.contains(&prerequisite) => {
                    return Err(CatalogError::UnknownPrerequisite {
                        tech: tech.id,
                        prerequisite,
                    });
                }
                _ => {}
            }
        }

        Ok(Self {
            home,
            systems,
            events,
            techs,
        })
    }

    pub fn home_system(&self) -> SystemId {
        self.home
    }

    pub fn system(&self, id: SystemId) -> Result<&SystemCard, CatalogError> {
        self.systems
            .iter()
            .find(|s| s.id == id)
            .ok_or(CatalogError::UnknownSystem(id))
    }

    pub fn event(&self, id: EventId) -> Result<&EventCard, CatalogError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or(CatalogError::UnknownEvent(id))
    }

    pub fn tech(&self, id: TechId) -> Result<&Tech, CatalogError> {
        self.techs
            .iter()
            .find(|t| t.id == id)
            .ok_or(CatalogError::UnknownTech(id))
    }

    pub fn systems(&self) -> &[SystemCard] {
        &self.systems
    }

    pub fn events(&self) -> &[EventCard] {
        &self.events
    }

    /// Technologies in catalog order, which is also build menu order.
    pub fn techs(&self) -> &[Tech] {
        &self.techs
    }

    /// Unshuffled near-system deck.
    pub fn near_deck(&self) -> Vec<SystemId> {
        self.system_ids(SystemCategory::Near)
    }

    /// Unshuffled distant-system deck.
    pub fn distant_deck(&self) -> Vec<SystemId> {
        self.system_ids(SystemCategory::Distant)
    }

    /// Unshuffled event deck, one entry per card.
    pub fn event_deck(&self) -> Vec<EventId> {
        self.events.iter().map(|e| e.id).collect()
    }

    fn system_ids(&self, category: SystemCategory) -> Vec<SystemId> {
        self.systems
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.id)
            .collect()
    }
}

impl TryFrom<CatalogTables> for Catalog {
    type Error = CatalogError;

    fn try_from(tables: CatalogTables) -> Result<Self, Self::Error> {
        Self::new(tables)
    }
}

impl From<Catalog> for CatalogTables {
    fn from(catalog: Catalog) -> Self {
        Self {
            systems: catalog.systems,
            events: catalog.events,
            techs: catalog.techs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn decks_follow_categories() {
        let catalog = testing::catalog();
        assert_eq!(catalog.home_system(), SystemId(1));
        assert_eq!(catalog.near_deck(), vec![SystemId(2), SystemId(3), SystemId(4)]);
        assert_eq!(catalog.distant_deck(), vec![SystemId(9)]);
        assert_eq!(catalog.event_deck().len(), catalog.events().len());
    }

    #[test]
    fn lookup_miss_is_an_error() {
        let catalog = testing::catalog();
        assert_eq!(
            catalog.system(SystemId(42)),
            Err(CatalogError::UnknownSystem(SystemId(42)))
        );
        assert!(catalog.tech(TechId::CapitalShips).is_ok());
    }

    #[test]
    fn rejects_missing_home() {
        let tables = CatalogTables {
            systems: vec![SystemCard::new(2, "Cygnus", SystemCategory::Near, 5, 0, 1, 1)],
            ..CatalogTables::default()
        };
        assert_eq!(
            Catalog::new(tables).map(|_| ()),
            Err(CatalogError::HomeSystem { found: 0 })
        );
    }

    #[test]
    fn rejects_dangling_prerequisite() {
        let tables = CatalogTables {
            systems: vec![SystemCard::new(1, "Home World", SystemCategory::Home, 0, 1, 1, 0)],
            events: Vec::new(),
            techs: vec![Tech::new(
                TechId::ForwardStarbases,
                "Forward Starbases",
                "Required to explore distant systems",
                4,
                Some(TechId::CapitalShips),
                2,
            )],
        };
        assert_eq!(
            Catalog::new(tables).map(|_| ()),
            Err(CatalogError::UnknownPrerequisite {
                tech: TechId::ForwardStarbases,
                prerequisite: TechId::CapitalShips,
            })
        );
    }
}
