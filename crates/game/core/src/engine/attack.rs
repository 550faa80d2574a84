use super::{AttackOrder, Step, TurnEngine, rules};
use crate::catalog::{SystemId, TechId, TechSet};
use crate::error::{DeckKind, EngineError};
use crate::prompt::{Choice, Prompt, keys};
use crate::state::{Phase, System};

impl TurnEngine<'_> {
    pub(super) fn start_of_turn(&mut self) -> Step {
        self.state.used_techs.remove(TechSet::INTERSPECIES_COMMERCE);

        let mut prompt = Prompt::new(
            Phase::StartOfTurn,
            "Select a system to attack, or bide your time.",
        );
        if self.can_explore() {
            prompt.push(Choice::new(keys::EXPLORE, "Explore and attack"));
        }
        for system in &self.state.explored {
            prompt.push(Choice::new(
                system.id.to_string(),
                format!("Conquer {}", system.name),
            ));
        }
        prompt.push(Choice::new(keys::BIDE, "Bide your time"));

        Step::ask(Phase::PhaseOne, prompt)
    }

    pub(super) fn phase_one(&mut self, choice: &Choice) -> Result<Step, EngineError> {
        let target = match AttackOrder::from_key(&choice.key) {
            Some(AttackOrder::Bide) => {
                self.say("Biding time...");
                return Ok(Step::to(Phase::Collect));
            }
            Some(AttackOrder::Explore) if self.can_explore() => self.explore()?,
            Some(AttackOrder::Conquer(id)) if self.explored_index(id).is_some() => id,
            _ => {
                // Restart the turn so a fresh menu goes out.
                self.reject(&choice.key, format!("Unknown attack key \"{}\".", choice.key));
                return Ok(Step::to(Phase::StartOfTurn));
            }
        };
        let Some(index) = self.explored_index(target) else {
            return Ok(Step::to(Phase::StartOfTurn));
        };

        if self.state.free_conquest {
            self.state.free_conquest = false;
            let system = self.conquer(index);
            self.say(format!("{system} conquered through interstellar diplomacy."));
            return Ok(Step::to(Phase::Collect));
        }

        let (name, base) = {
            let system = &self.state.explored[index];
            (system.name.clone(), system.resistance)
        };
        self.say(format!("Attacking {name}..."));

        let (resistance, note) = rules::attack_resistance(&self.state.explored[index], self.state.techs);
        let strength = self.state.military_strength;
        let roll = self.roll();
        let success = rules::attack_succeeds(roll, strength, resistance);
        if success {
            self.conquer(index);
        }
        self.say(format!(
            "Resistance = {base}{note}, military strength = {strength}, roll = {roll}...{}!",
            if success { "success" } else { "failed" }
        ));
        if !success && strength > 0 {
            self.state.military_strength -= 1;
            self.say(format!(
                "Military strength reduced to {}.",
                self.state.military_strength
            ));
        }

        Ok(Step::to(Phase::Collect))
    }

    /// Explore is offered while a near card remains, or a distant card with
    /// Forward Starbases.
    fn can_explore(&self) -> bool {
        !self.state.near_deck.is_empty()
            || (self.state.techs.has(TechId::ForwardStarbases) && !self.state.distant_deck.is_empty())
    }

    /// Draws the next system, near deck first, and places it in Explored.
    fn explore(&mut self) -> Result<SystemId, EngineError> {
        let id = match self.state.near_deck.draw() {
            Some(id) => id,
            None => self
                .state
                .distant_deck
                .draw()
                .ok_or(EngineError::EmptyDeck(DeckKind::Distant))?,
        };
        let system = System::from(self.catalog.system(id)?);
        self.say(format!("Explored {}.", system.name));
        self.state.explored.push(system);
        Ok(id)
    }

    fn explored_index(&self, id: SystemId) -> Option<usize> {
        self.state.explored.iter().position(|s| s.id == id)
    }

    /// Moves an Explored system into the Empire, clearing its history.
    /// Returns its name.
    fn conquer(&mut self, index: usize) -> String {
        let mut system = self.state.explored.remove(index);
        system.revolted = false;
        system.invaded = false;
        let name = system.name.clone();
        self.state.empire.push(system);
        name
    }
}
