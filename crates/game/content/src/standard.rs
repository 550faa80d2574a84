//! The standard two-year game.

use game_core::{
    Catalog, CatalogError, CatalogTables, EventCard, EventEffect, EventKind, SystemCard,
    SystemCategory, Tech, TechId,
};

const INVASION_NOTE: &str = "Add +1 Resistance With Planetary Defenses";
const REVOLT_NOTE: &str = "+1 System Resistance With Hyper Television";
const STRIKE_NOTE: &str = "With Robot Workers, gain 1/2 instead of zero (round up)";

/// Raw tables of the standard game.
pub fn standard_tables() -> CatalogTables {
    use EventEffect::{Force, GainMetal, GainWealth, NoEffect, NoResources};
    use SystemCategory::{Distant, Home, Near};

    let systems = vec![
        SystemCard::new(1, "Home World", Home, 0, 1, 1, 0),
        SystemCard::new(2, "Cygnus", Near, 5, 0, 1, 1),
        SystemCard::new(3, "Epsilon Eridani", Near, 8, 0, 0, 1),
        SystemCard::new(4, "Procyon", Near, 7, 0, 1, 1),
        SystemCard::new(5, "Proxima", Near, 6, 1, 0, 1),
        SystemCard::new(6, "Sirius", Near, 6, 0, 0, 1),
        SystemCard::new(7, "Wolf 359", Near, 5, 1, 0, 1),
        SystemCard::new(8, "Tau Ceti", Near, 4, 0, 0, 1),
        SystemCard::new(9, "Canopus", Distant, 9, 0, 1, 2),
        SystemCard::new(10, "Galaxy's Edge", Distant, 10, 0, 0, 3),
        SystemCard::new(11, "Polaris", Distant, 9, 0, 0, 2),
    ];

    let events = vec![
        EventCard::new(1, EventKind::Asteroid, GainWealth(1), GainWealth(1)),
        EventCard::new(2, EventKind::DerelictShip, GainMetal(1), GainMetal(1)),
        EventCard::new(3, EventKind::LargeInvasionForce, Force(2), Force(3))
            .with_modifier(INVASION_NOTE),
        EventCard::new(4, EventKind::PeaceAndQuiet, NoEffect, NoEffect),
        EventCard::new(5, EventKind::Revolt, Force(1), Force(2)).with_modifier(REVOLT_NOTE),
        EventCard::new(6, EventKind::Revolt, Force(1), Force(3)).with_modifier(REVOLT_NOTE),
        EventCard::new(7, EventKind::SmallInvasionForce, Force(1), Force(2))
            .with_modifier(INVASION_NOTE),
        EventCard::new(8, EventKind::Strike, NoResources, NoResources).with_modifier(STRIKE_NOTE),
    ];

    let techs = vec![
        Tech::new(
            TechId::CapitalShips,
            "Capital Ships",
            "Advance beyond military strength 3",
            3,
            None,
            1,
        ),
        Tech::new(
            TechId::RobotWorkers,
            "Robot Workers",
            "Receive 1/2 production during strike",
            2,
            None,
            1,
        ),
        Tech::new(
            TechId::HyperTelevision,
            "Hyper Television",
            "+1 to resistance during revolt",
            3,
            None,
            1,
        ),
        Tech::new(
            TechId::InterspeciesCommerce,
            "Interspecies Commerce",
            "Exchange 2 of one resource for 1 of the other",
            2,
            None,
            1,
        ),
        Tech::new(
            TechId::ForwardStarbases,
            "Forward Starbases",
            "Required to explore distant systems",
            4,
            Some(TechId::CapitalShips),
            2,
        ),
        Tech::new(
            TechId::PlanetaryDefenses,
            "Planetary Defenses",
            "+1 to resistance during invasion",
            4,
            Some(TechId::RobotWorkers),
            2,
        ),
        Tech::new(
            TechId::InterstellarDiplomacy,
            "Interstellar Diplomacy",
            "Next planet is conquered for free",
            5,
            Some(TechId::HyperTelevision),
            2,
        ),
        Tech::new(
            TechId::InterstellarBanking,
            "Interstellar Banking",
            "Advance beyond storage value 3",
            3,
            Some(TechId::InterspeciesCommerce),
            2,
        ),
    ];

    CatalogTables {
        systems,
        events,
        techs,
    }
}

/// The validated standard catalog.
pub fn standard_catalog() -> Result<Catalog, CatalogError> {
    Catalog::new(standard_tables())
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{GameConfig, GameState, PcgRng, SystemId};

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = standard_catalog().expect("standard catalog");
        assert_eq!(catalog.systems().len(), 11);
        assert_eq!(catalog.events().len(), 8);
        assert_eq!(catalog.techs().len(), 8);
        assert_eq!(catalog.home_system(), SystemId(1));
        assert_eq!(catalog.near_deck().len(), 7);
        assert_eq!(catalog.distant_deck().len(), 3);
    }

    #[test]
    fn new_game_over_the_standard_catalog() {
        let catalog = standard_catalog().expect("standard catalog");
        let mut rng = PcgRng::new(2024);
        let state = GameState::new(&catalog, &GameConfig::default(), &mut rng).expect("new game");

        assert_eq!(state.empire.len(), 1);
        assert_eq!(state.empire[0].name, "Home World");
        assert_eq!((state.metal_production, state.wealth_production), (1, 1));
        assert_eq!(state.near_deck.len(), 7);
        assert_eq!(state.distant_deck.len(), 3);
        assert_eq!(state.event_deck.len(), 7);
    }

    #[test]
    fn tech_generations_split_evenly() {
        let tables = standard_tables();
        let first = tables.techs.iter().filter(|t| t.generation == 1).count();
        assert_eq!(first, 4);
        assert!(
            tables
                .techs
                .iter()
                .filter(|t| t.generation == 2)
                .all(|t| t.prerequisite.is_some())
        );
    }
}
