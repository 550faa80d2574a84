use super::{Step, TurnEngine, rules};
use crate::error::EngineError;
use crate::state::{Deck, Phase, discard};

impl TurnEngine<'_> {
    pub(super) fn end_of_turn(&mut self) -> Result<Step, EngineError> {
        if !self.state.event_deck.is_empty() {
            return Ok(Step::to(Phase::StartOfTurn));
        }

        self.say(format!("End of Year {}.", self.state.year));
        if self.state.year >= self.config.final_year {
            return Ok(Step::to(Phase::Win));
        }

        self.state.year += 1;
        let mut deck = Deck::shuffled(self.catalog.event_deck(), &mut *self.rng);
        discard(&mut deck, self.config.new_year_event_discards)?;
        self.state.event_deck = deck;
        Ok(Step::to(Phase::StartOfTurn))
    }

    pub(super) fn win(&mut self) -> Step {
        let score = rules::score(self.state, self.catalog);

        self.say(format!("{} VPs from your empire.", score.empire));
        self.say(format!("{} VPs from discovered technologies.", score.techs));
        if score.exploration_bonus > 0 {
            self.say("Exploration Bonus (1VP) for exploring all systems.");
        }
        if score.scientific_bonus > 0 {
            self.say("Scientific Bonus (1VP) for researching all technologies.");
        }
        if score.warlord_bonus > 0 {
            self.say("Warlord Bonus (3VP) for conquering all systems.");
        }
        self.say(format!("Final score: {} VPs.", score.total()));
        Step::to(Phase::End)
    }

    pub(super) fn lose(&mut self) -> Step {
        self.say("You lose.");
        Step::to(Phase::End)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{SystemId, TechSet};
    use crate::state::{Deck, Phase};
    use crate::testing::Harness;

    #[test]
    fn end_of_turn_continues_while_events_remain() {
        let mut game = Harness::new();
        game.state.phase = Phase::EndOfTurn;
        let outcome = game.advance(None);
        assert_eq!(outcome.next, Phase::StartOfTurn);
        assert!(outcome.log.is_empty());
        assert_eq!(game.state.year, 1);
    }

    #[test]
    fn first_year_end_rebuilds_the_event_deck() {
        let mut game = Harness::new();
        game.state.phase = Phase::EndOfTurn;
        game.state.event_deck = Deck::new(Vec::new());

        let outcome = game.advance(None);

        assert_eq!(outcome.next, Phase::StartOfTurn);
        assert_eq!(outcome.log, vec!["End of Year 1.".to_string()]);
        assert_eq!(game.state.year, 2);
        assert_eq!(game.state.event_deck.len(), game.catalog.events().len() - 2);
    }

    #[test]
    fn second_year_end_wins() {
        let mut game = Harness::new();
        game.state.phase = Phase::EndOfTurn;
        game.state.year = 2;
        game.state.event_deck = Deck::new(Vec::new());
        assert_eq!(game.advance(None).next, Phase::Win);
    }

    #[test]
    fn win_reports_each_component_and_the_total() {
        let mut game = Harness::new();
        game.state.phase = Phase::Win;
        game.conquer(SystemId(2));
        game.state.techs.insert(TechSet::CAPITAL_SHIPS | TechSet::ROBOT_WORKERS);

        let outcome = game.advance(None);

        assert_eq!(outcome.next, Phase::End);
        assert_eq!(
            outcome.log,
            vec![
                "1 VPs from your empire.".to_string(),
                "2 VPs from discovered technologies.".to_string(),
                "Final score: 3 VPs.".to_string(),
            ]
        );
    }

    // Bonuses follow the literal deck checks: the near deck is never
    // consulted, so draining the distant deck alone earns the exploration
    // and warlord bonuses.
    #[test]
    fn bonuses_only_look_at_the_distant_deck_and_explored() {
        let mut game = Harness::new();
        game.state.phase = Phase::Win;
        game.conquer(SystemId(9));
        assert!(!game.state.near_deck.is_empty());
        game.state.techs = TechSet::all();

        let log = game.advance(None).log;

        assert!(log.contains(&"Exploration Bonus (1VP) for exploring all systems.".to_string()));
        assert!(log.contains(&"Scientific Bonus (1VP) for researching all technologies.".to_string()));
        assert!(log.contains(&"Warlord Bonus (3VP) for conquering all systems.".to_string()));
        assert_eq!(log.last().map(String::as_str), Some("Final score: 15 VPs."));
    }

    #[test]
    fn explored_leftovers_forfeit_the_warlord_bonus() {
        let mut game = Harness::new();
        game.state.phase = Phase::Win;
        game.explore_into_explored(SystemId(9));
        let log = game.advance(None).log;
        assert!(log.contains(&"Exploration Bonus (1VP) for exploring all systems.".to_string()));
        assert!(!log.iter().any(|l| l.starts_with("Warlord")));
    }

    #[test]
    fn lose_then_end() {
        let mut game = Harness::new();
        game.state.phase = Phase::Lose;
        let outcome = game.advance(None);
        assert_eq!(outcome.next, Phase::End);
        assert_eq!(outcome.log, vec!["You lose.".to_string()]);
    }
}
