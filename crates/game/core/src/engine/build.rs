use super::{BuildOrder, Step, TurnEngine, rules};
use crate::catalog::{TechId, TechSet};
use crate::error::EngineError;
use crate::prompt::{Choice, Prompt};
use crate::state::Phase;

impl TurnEngine<'_> {
    pub(super) fn collect(&mut self) -> Result<Step, EngineError> {
        self.state.refresh_production(self.catalog)?;

        let cap = rules::storage_cap(self.state.techs, self.config);
        let metal = rules::add_capped(&mut self.state.metal_storage, self.state.metal_production, cap);
        let wealth = rules::add_capped(&mut self.state.wealth_storage, self.state.wealth_production, cap);
        self.say(format!("Collected {metal} metal and {wealth} wealth."));

        Ok(Step::to(Phase::ChooseBuild))
    }

    pub(super) fn choose_build(&mut self) -> Step {
        let mut prompt = Prompt::new(Phase::ChooseBuild, "Select build:");
        for order in self.legal_builds() {
            prompt.push(Choice::new(order.key(), self.build_label(order)));
        }
        Step::ask(Phase::DoBuild, prompt)
    }

    pub(super) fn do_build(&mut self, choice: &Choice) -> Result<Step, EngineError> {
        let order = match BuildOrder::from_key(&choice.key) {
            Some(order) if self.legal_builds().contains(&order) => order,
            Some(_) => {
                self.reject(&choice.key, format!("Build {} is not available.", choice.key));
                return Ok(Step::to(Phase::ChooseBuild));
            }
            None => {
                self.reject(&choice.key, format!("Unknown build key \"{}\"", choice.key));
                return Ok(Step::to(Phase::ChooseBuild));
            }
        };

        match order {
            BuildOrder::Done => return Ok(Step::to(Phase::Event)),
            BuildOrder::Military => {
                self.state.military_strength += 1;
                self.state.metal_storage -= 1;
                self.state.wealth_storage -= 1;
                self.say("Built 1 military.");
            }
            BuildOrder::WealthFromMetal => {
                self.state.metal_storage -= 2;
                self.state.wealth_storage += 1;
                self.state.used_techs.insert(TechSet::INTERSPECIES_COMMERCE);
                self.say("Swapped 2 metal for 1 wealth.");
            }
            BuildOrder::MetalFromWealth => {
                self.state.wealth_storage -= 2;
                self.state.metal_storage += 1;
                self.state.used_techs.insert(TechSet::INTERSPECIES_COMMERCE);
                self.say("Swapped 2 wealth for 1 metal.");
            }
            BuildOrder::Research(id) => {
                let catalog = self.catalog;
                let tech = catalog.tech(id)?;
                self.state.techs.insert(id.flag());
                self.state.wealth_storage -= tech.cost;
                self.say(format!("Bought {}.", tech.name));
                if id == TechId::InterstellarDiplomacy {
                    self.state.free_conquest = true;
                    self.say("If you attack next turn, it will automatically succeed.");
                }
            }
        }
        Ok(Step::to(Phase::ChooseBuild))
    }

    /// Every build the player may take right now, in menu order.
    fn legal_builds(&self) -> Vec<BuildOrder> {
        let state = &*self.state;
        let cap = rules::storage_cap(state.techs, self.config);
        let mut orders = vec![BuildOrder::Done];

        if state.metal_storage > 0
            && state.wealth_storage > 0
            && state.military_strength < rules::military_cap(state.techs, self.config)
        {
            orders.push(BuildOrder::Military);
        }

        if state.techs.has(TechId::InterspeciesCommerce)
            && !state.used_techs.has(TechId::InterspeciesCommerce)
        {
            if state.metal_storage >= 2 && state.wealth_storage < cap {
                orders.push(BuildOrder::WealthFromMetal);
            }
            if state.wealth_storage >= 2 && state.metal_storage < cap {
                orders.push(BuildOrder::MetalFromWealth);
            }
        }

        orders.extend(
            self.catalog
                .techs()
                .iter()
                .filter(|t| !state.techs.has(t.id))
                .filter(|t| t.prerequisite.is_none_or(|p| state.techs.has(p)))
                .filter(|t| t.cost <= state.wealth_storage)
                .map(|t| BuildOrder::Research(t.id)),
        );
        orders
    }

    fn build_label(&self, order: BuildOrder) -> String {
        match order {
            BuildOrder::Done => "Done building".to_string(),
            BuildOrder::Military => "Increase military strength (cost: 1 wealth, 1 metal)".to_string(),
            BuildOrder::WealthFromMetal => "Exchange 2 metal for 1 wealth".to_string(),
            BuildOrder::MetalFromWealth => "Exchange 2 wealth for 1 metal".to_string(),
            BuildOrder::Research(id) => match self.catalog.tech(id) {
                Ok(tech) => format!("Build {}", tech.name),
                Err(_) => format!("Build {id}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::{EventId, SystemId, TechId, TechSet};
    use crate::prompt::{Choice, keys};
    use crate::state::Phase;
    use crate::testing::Harness;

    fn build_keys(game: &mut Harness) -> Vec<String> {
        game.state.phase = Phase::ChooseBuild;
        let prompt = game.advance(None).prompt.expect("build menu");
        assert_eq!(prompt.phase, Phase::ChooseBuild);
        prompt.choices.into_iter().map(|c| c.key).collect()
    }

    #[test]
    fn collect_adds_production_up_to_the_cap() {
        let mut game = Harness::new();
        game.state.phase = Phase::Collect;
        game.state.metal_storage = 3;
        game.state.wealth_storage = 1;

        let outcome = game.advance(None);

        assert_eq!(outcome.next, Phase::ChooseBuild);
        assert_eq!((game.state.metal_storage, game.state.wealth_storage), (3, 2));
        assert_eq!(outcome.log, vec!["Collected 0 metal and 1 wealth.".to_string()]);
    }

    #[test]
    fn collect_after_strike_adds_nothing() {
        let mut game = Harness::new();
        game.state.phase = Phase::Collect;
        game.state.active_event = Some(EventId(8));
        game.conquer(SystemId(2));

        let outcome = game.advance(None);
        assert_eq!((game.state.metal_storage, game.state.wealth_storage), (0, 0));
        assert_eq!(outcome.log, vec!["Collected 0 metal and 0 wealth.".to_string()]);
    }

    #[test]
    fn robot_workers_halve_strike_production_rounding_up() {
        let mut game = Harness::new();
        game.state.phase = Phase::Collect;
        game.state.active_event = Some(EventId(8));
        game.state.techs.insert(TechSet::ROBOT_WORKERS);
        game.conquer(SystemId(2));

        game.advance(None);
        assert_eq!((game.state.metal_production, game.state.wealth_production), (1, 1));
        assert_eq!((game.state.metal_storage, game.state.wealth_storage), (1, 1));
    }

    #[test]
    fn banking_lifts_the_storage_cap() {
        let mut game = Harness::new();
        game.state.phase = Phase::Collect;
        game.state.techs.insert(TechSet::INTERSTELLAR_BANKING);
        game.state.metal_storage = 4;

        game.advance(None);
        assert_eq!(game.state.metal_storage, 5);
    }

    #[test]
    fn military_needs_both_resources() {
        let mut game = Harness::new();
        game.state.wealth_storage = 3;

        let keys = build_keys(&mut game);
        assert!(!keys.contains(&keys::MILITARY.to_string()));
        for tech in ["CS", "RW", "HT", "IC"] {
            assert!(keys.contains(&tech.to_string()), "missing {tech}");
        }
        assert!(!keys.contains(&"FS".to_string()));
    }

    #[test]
    fn military_respects_the_strength_cap() {
        let mut game = Harness::new();
        game.state.metal_storage = 1;
        game.state.wealth_storage = 1;
        game.state.military_strength = 3;
        assert!(!build_keys(&mut game).contains(&keys::MILITARY.to_string()));

        game.state.techs.insert(TechSet::CAPITAL_SHIPS);
        assert!(build_keys(&mut game).contains(&keys::MILITARY.to_string()));
    }

    #[test]
    fn owned_and_locked_techs_are_not_offered() {
        let mut game = Harness::new();
        game.state.wealth_storage = 5;
        game.state.techs.insert(TechSet::CAPITAL_SHIPS);

        let keys = build_keys(&mut game);
        assert!(!keys.contains(&"CS".to_string()));
        assert!(keys.contains(&"FS".to_string()));
        assert!(!keys.contains(&"PD".to_string()));
    }

    #[test]
    fn commerce_exchanges_once_per_turn() {
        let mut game = Harness::new();
        game.state.techs.insert(TechSet::INTERSPECIES_COMMERCE);
        game.state.metal_storage = 2;
        game.state.wealth_storage = 2;
        let keys = build_keys(&mut game);
        assert!(keys.contains(&"Wealth".to_string()));
        assert!(keys.contains(&"Metal".to_string()));

        let outcome = game.advance(Some(&Choice::new("wealth", "Exchange")));
        assert_eq!(outcome.next, Phase::ChooseBuild);
        assert_eq!((game.state.metal_storage, game.state.wealth_storage), (0, 3));
        assert!(game.state.used_techs.has(TechId::InterspeciesCommerce));

        let keys = build_keys(&mut game);
        assert!(!keys.contains(&"Metal".to_string()));
    }

    #[test]
    fn research_deducts_cost_and_grows_ownership() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        game.state.wealth_storage = 3;

        let outcome = game.advance(Some(&Choice::new("hT", "Build Hyper Television")));

        assert_eq!(outcome.next, Phase::ChooseBuild);
        assert!(game.state.techs.has(TechId::HyperTelevision));
        assert_eq!(game.state.wealth_storage, 0);
        assert_eq!(outcome.log, vec!["Bought Hyper Television.".to_string()]);
    }

    #[test]
    fn diplomacy_arms_free_conquest() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        game.state.wealth_storage = 5;
        game.state.techs.insert(TechSet::HYPER_TELEVISION | TechSet::INTERSTELLAR_BANKING);

        let outcome = game.advance(Some(&Choice::new("ID", "Build Interstellar Diplomacy")));
        assert!(game.state.free_conquest);
        assert_eq!(outcome.log.len(), 2);
    }

    #[test]
    fn military_build_spends_one_of_each() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        game.state.metal_storage = 2;
        game.state.wealth_storage = 1;

        game.advance(Some(&Choice::new(keys::MILITARY, "Increase")));
        assert_eq!(game.state.military_strength, 1);
        assert_eq!((game.state.metal_storage, game.state.wealth_storage), (1, 0));
    }

    #[test]
    fn unknown_build_key_is_logged_without_mutation() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        game.state.wealth_storage = 1;
        let before = game.state.clone();

        let outcome = game.advance(Some(&Choice::new("XYZ", "Mystery")));

        assert_eq!(outcome.next, Phase::ChooseBuild);
        assert_eq!(outcome.log, vec!["Unknown build key \"XYZ\"".to_string()]);
        assert_eq!(outcome.rejected.as_deref(), Some("XYZ"));
        assert_eq!(game.state.techs, before.techs);
        assert_eq!(game.state.wealth_storage, before.wealth_storage);
    }

    #[test]
    fn unaffordable_tech_is_refused() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        game.state.wealth_storage = 1;

        game.advance(Some(&Choice::new("CS", "Build Capital Ships")));
        assert!(game.state.techs.is_empty());
        assert_eq!(game.state.wealth_storage, 1);
    }

    #[test]
    fn done_moves_on_to_the_event() {
        let mut game = Harness::new();
        game.state.phase = Phase::DoBuild;
        let outcome = game.advance(Some(&Choice::new(keys::DONE, "Done building")));
        assert_eq!(outcome.next, Phase::Event);
    }
}
