use super::{Step, TurnEngine, rules};
use crate::catalog::{EventEffect, EventKind, TechId};
use crate::error::EngineError;
use crate::state::Phase;

/// Gains carried by a resource event.
fn gain(effect: EventEffect) -> u32 {
    match effect {
        EventEffect::GainWealth(n) | EventEffect::GainMetal(n) => n,
        _ => 0,
    }
}

impl TurnEngine<'_> {
    pub(super) fn event(&mut self) -> Result<Step, EngineError> {
        let Some(id) = self.state.event_deck.draw() else {
            // Only reachable after a suppressed year-one revolt skipped
            // year-end handling; let EndOfTurn rebuild the deck.
            return Ok(Step::to(Phase::EndOfTurn));
        };
        let catalog = self.catalog;
        let card = catalog.event(id)?;
        self.state.active_event = Some(id);
        self.say(format!("Drew event: {}", card.name()));

        let effect = card.effect_for(self.state.year);
        let cap = rules::storage_cap(self.state.techs, self.config);
        match card.kind {
            EventKind::Asteroid => {
                let added = rules::add_capped(&mut self.state.wealth_storage, gain(effect), cap);
                self.say(format!("Added {added} wealth"));
            }
            EventKind::DerelictShip => {
                let added = rules::add_capped(&mut self.state.metal_storage, gain(effect), cap);
                self.say(format!("Added {added} metal"));
            }
            EventKind::PeaceAndQuiet => self.say("No effect"),
            EventKind::Strike => {
                if self.state.techs.has(TechId::RobotWorkers) {
                    self.say("Production halved next turn.");
                } else {
                    self.say("No production next turn.");
                }
            }
            EventKind::Revolt => return Ok(Step::to(Phase::Revolt)),
            EventKind::SmallInvasionForce => return Ok(Step::to(Phase::SmallInvasion)),
            EventKind::LargeInvasionForce => return Ok(Step::to(Phase::LargeInvasion)),
        }
        Ok(Step::to(Phase::EndOfTurn))
    }

    pub(super) fn revolt(&mut self) -> Result<Step, EngineError> {
        if self.state.empire.len() == 1 {
            return Ok(self.home_world_threatened(
                "The Home World won't revolt in year 1.",
                "The Home World has revolted.",
            ));
        }
        let rng = &mut *self.rng;
        let Some(index) = rules::revolt_target(&self.state.empire, |n| rng.below(n)) else {
            return Ok(Step::to(Phase::EndOfTurn));
        };

        let force = self.active_force()?;
        let (note, bonus) = if self.state.techs.has(TechId::HyperTelevision) {
            (" +1 (Hyper Television)", 1)
        } else {
            ("", 0)
        };
        let outcome = self.uprising(index, force, bonus);
        if outcome.success {
            let mut system = self.state.empire.remove(index);
            system.revolted = true;
            self.state.explored.push(system);
        }
        self.say(format!(
            "Revolt on {}: {}, Resistance of {}{note}, rolled {}...revolt {}!",
            outcome.name,
            EventEffect::Force(force),
            outcome.base,
            outcome.roll,
            if outcome.success { "succeeded" } else { "failed" }
        ));
        Ok(Step::to(Phase::EndOfTurn))
    }

    pub(super) fn invasion(&mut self) -> Result<Step, EngineError> {
        if self.state.empire.len() == 1 {
            return Ok(self.home_world_threatened(
                "Invasion force won't attack the Home World in year 1.",
                "The Home World has been invaded.",
            ));
        }
        let Some(index) = rules::invasion_target(&self.state.empire) else {
            return Ok(Step::to(Phase::EndOfTurn));
        };

        let force = self.active_force()?;
        let (note, bonus) = if self.state.techs.has(TechId::PlanetaryDefenses) {
            (" +1 (Planetary Defenses)", 1)
        } else {
            ("", 0)
        };
        let outcome = self.uprising(index, force, bonus);
        if outcome.success {
            let mut system = self.state.empire.remove(index);
            system.invaded = true;
            self.state.explored.push(system);
        }
        self.say(format!(
            "Invasion on {}: {}, Resistance of {}{note}, rolled {}...invasion {}!",
            outcome.name,
            EventEffect::Force(force),
            outcome.base,
            outcome.roll,
            if outcome.success { "succeeded" } else { "failed" }
        ));
        Ok(Step::to(Phase::EndOfTurn))
    }

    /// The home world is spared in year one and lost afterwards.
    fn home_world_threatened(&mut self, spared: &str, lost: &str) -> Step {
        if self.state.year <= 1 {
            self.say(spared);
            Step::to(Phase::StartOfTurn)
        } else {
            self.say(lost);
            Step::to(Phase::Lose)
        }
    }

    /// Force bonus of the active event for the current year.
    fn active_force(&self) -> Result<u32, EngineError> {
        match self.state.active_event {
            Some(id) => Ok(self.catalog.event(id)?.effect_for(self.state.year).force()),
            None => Ok(0),
        }
    }

    /// Rolls an uprising against an Empire system defended at base
    /// resistance plus `bonus`.
    fn uprising(&mut self, index: usize, force: u32, bonus: u32) -> Uprising {
        let (name, base) = {
            let system = &self.state.empire[index];
            (system.name.clone(), system.resistance)
        };
        let roll = self.roll();
        Uprising {
            name,
            base,
            roll,
            success: rules::attack_succeeds(roll, force, base + bonus),
        }
    }
}

struct Uprising {
    name: String,
    base: u32,
    roll: u32,
    success: bool,
}
