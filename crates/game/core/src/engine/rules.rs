//! Pure rule functions: caps, production, combat and scoring.
//!
//! Nothing here mutates a game. Handlers in the engine call these and apply
//! the results.

use crate::catalog::{Catalog, TechId, TechSet};
use crate::config::GameConfig;
use crate::state::{GameState, System};

/// Metal and wealth generated per collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Production {
    pub metal: u32,
    pub wealth: u32,
}

/// Storage ceiling for both resources.
pub fn storage_cap(techs: TechSet, config: &GameConfig) -> u32 {
    if techs.has(TechId::InterstellarBanking) {
        config.banking_storage_cap
    } else {
        config.base_storage_cap
    }
}

/// Military strength ceiling.
pub fn military_cap(techs: TechSet, config: &GameConfig) -> u32 {
    if techs.has(TechId::CapitalShips) {
        config.capital_ships_military_cap
    } else {
        config.base_military_cap
    }
}

/// Sums Empire yields. During a strike yields drop to zero, or to half
/// (rounded up) with Robot Workers.
pub fn production(empire: &[System], strike: bool, techs: TechSet) -> Production {
    let mut total = empire.iter().fold(Production::default(), |acc, s| Production {
        metal: acc.metal + s.metal,
        wealth: acc.wealth + s.wealth,
    });
    if strike {
        if techs.has(TechId::RobotWorkers) {
            total.metal = total.metal.div_ceil(2);
            total.wealth = total.wealth.div_ceil(2);
        } else {
            total = Production::default();
        }
    }
    total
}

/// Adds `amount` to `storage` without exceeding `cap`; returns what was added.
pub fn add_capped(storage: &mut u32, amount: u32, cap: u32) -> u32 {
    let before = *storage;
    *storage = before.saturating_add(amount).min(cap).max(before);
    *storage - before
}

/// Shared success predicate for attacks, revolts and invasions.
pub fn attack_succeeds(roll: u32, bonus: u32, resistance: u32) -> bool {
    roll + bonus >= resistance
}

/// Effective resistance of a target when the player attacks it, plus the
/// note describing any modifiers applied.
pub fn attack_resistance(target: &System, techs: TechSet) -> (u32, String) {
    let mut resistance = target.resistance;
    let mut note = String::new();
    if target.revolted && techs.has(TechId::HyperTelevision) {
        resistance += 1;
        note.push_str(" +1 (Hyper Television)");
    }
    if target.invaded && techs.has(TechId::PlanetaryDefenses) {
        resistance += 1;
        note.push_str(" +1 (Planetary Defenses)");
    }
    (resistance, note)
}

/// Index of the revolt target: the non-home Empire system with the lowest
/// base resistance. Ties are broken with `pick(count)`, which must return an
/// index below `count`.
pub fn revolt_target(empire: &[System], pick: impl FnOnce(u32) -> u32) -> Option<usize> {
    let lowest = empire
        .iter()
        .filter(|s| !s.is_home())
        .map(|s| s.resistance)
        .min()?;
    let tied: Vec<usize> = empire
        .iter()
        .enumerate()
        .filter(|(_, s)| !s.is_home() && s.resistance == lowest)
        .map(|(i, _)| i)
        .collect();
    let chosen = pick(tied.len() as u32) as usize;
    tied.get(chosen).or(tied.first()).copied()
}

/// Index of the invasion target: the most recently conquered system, never
/// the home system.
pub fn invasion_target(empire: &[System]) -> Option<usize> {
    match empire.last() {
        Some(last) if !last.is_home() => Some(empire.len() - 1),
        _ => None,
    }
}

/// Final score breakdown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Score {
    pub empire: u32,
    pub techs: u32,
    pub exploration_bonus: u32,
    pub scientific_bonus: u32,
    pub warlord_bonus: u32,
}

impl Score {
    pub fn total(&self) -> u32 {
        self.empire + self.techs + self.exploration_bonus + self.scientific_bonus + self.warlord_bonus
    }
}

/// Scores a finished game.
///
/// The exploration bonus only checks that the distant deck is drained and the
/// warlord bonus additionally that nothing is left in Explored. Neither looks
/// at the near deck.
pub fn score(state: &GameState, catalog: &Catalog) -> Score {
    let explored_all = state.distant_deck.is_empty();
    Score {
        empire: state.empire.iter().map(|s| s.victory_points).sum(),
        techs: state.techs.count(),
        exploration_bonus: u32::from(explored_all),
        scientific_bonus: u32::from(state.techs.count() as usize == catalog.techs().len()),
        warlord_bonus: if explored_all && state.explored.is_empty() {
            3
        } else {
            0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{SystemCard, SystemCategory};

    fn system(id: u8, resistance: u32, metal: u32, wealth: u32) -> System {
        let category = if id == 1 {
            SystemCategory::Home
        } else {
            SystemCategory::Near
        };
        System::from(&SystemCard::new(id, format!("S{id}"), category, resistance, metal, wealth, 1))
    }

    #[test]
    fn banking_raises_storage_cap() {
        let config = GameConfig::default();
        assert_eq!(storage_cap(TechSet::empty(), &config), 3);
        assert_eq!(storage_cap(TechSet::INTERSTELLAR_BANKING, &config), 5);
        assert_eq!(military_cap(TechSet::CAPITAL_SHIPS, &config), 5);
    }

    #[test]
    fn strike_zeroes_production_without_robot_workers() {
        let empire = vec![system(1, 0, 1, 1), system(5, 6, 1, 0), system(7, 5, 1, 0)];
        assert_eq!(production(&empire, false, TechSet::empty()), Production { metal: 3, wealth: 1 });
        assert_eq!(production(&empire, true, TechSet::empty()), Production::default());
        assert_eq!(
            production(&empire, true, TechSet::ROBOT_WORKERS),
            Production { metal: 2, wealth: 1 }
        );
    }

    #[test]
    fn add_capped_reports_the_clamped_delta() {
        let mut storage = 2;
        assert_eq!(add_capped(&mut storage, 3, 3), 1);
        assert_eq!(storage, 3);
        assert_eq!(add_capped(&mut storage, 1, 3), 0);
        assert_eq!(storage, 3);
    }

    #[test]
    fn combat_predicate_holds_for_every_triple() {
        for roll in 1..=6 {
            for bonus in 0..=5 {
                for resistance in 0..=12 {
                    assert_eq!(
                        attack_succeeds(roll, bonus, resistance),
                        roll + bonus >= resistance
                    );
                }
            }
        }
    }

    #[test]
    fn modifiers_only_apply_with_history_and_tech() {
        let mut target = system(4, 7, 0, 1);
        assert_eq!(attack_resistance(&target, TechSet::all()).0, 7);

        target.revolted = true;
        assert_eq!(attack_resistance(&target, TechSet::empty()).0, 7);
        let (resistance, note) = attack_resistance(&target, TechSet::HYPER_TELEVISION);
        assert_eq!(resistance, 8);
        assert!(note.contains("Hyper Television"));

        target.invaded = true;
        assert_eq!(attack_resistance(&target, TechSet::all()).0, 9);
    }

    #[test]
    fn revolt_prefers_lowest_resistance_and_skips_home() {
        let empire = vec![system(1, 0, 1, 1), system(2, 5, 0, 1), system(8, 4, 0, 0), system(7, 5, 1, 0)];
        assert_eq!(revolt_target(&empire, |_| 0), Some(2));
        assert_eq!(revolt_target(&empire[..1], |_| 0), None);
    }

    #[test]
    fn revolt_ties_use_the_picker() {
        let empire = vec![system(1, 0, 1, 1), system(2, 5, 0, 1), system(7, 5, 1, 0)];
        assert_eq!(revolt_target(&empire, |n| n - 1), Some(2));
        assert_eq!(revolt_target(&empire, |_| 0), Some(1));
    }

    #[test]
    fn invasion_hits_the_latest_conquest() {
        let empire = vec![system(1, 0, 1, 1), system(2, 5, 0, 1), system(7, 5, 1, 0)];
        assert_eq!(invasion_target(&empire), Some(2));
        assert_eq!(invasion_target(&empire[..1]), None);
    }
}
