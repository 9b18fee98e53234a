//! The data-driven strategy behind every preset.

use super::config::StrategyConfig;
use super::{BuildPlan, BuildRequest, PlayerView, Strategy};
use crate::board::{Board, ColorGroup, Property, PropertyId};
use crate::core::{ConfigError, GameRng};
use crate::development::{DevelopmentLedger, HOTEL_LEVEL};

/// Strategy driven entirely by a validated `StrategyConfig`.
#[derive(Clone, Debug)]
pub struct ConfiguredStrategy {
    config: StrategyConfig,
}

impl ConfiguredStrategy {
    /// Validate the configuration and wrap it.
    pub fn new(config: StrategyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &StrategyConfig {
        &self.config
    }

    /// First color in the priority list the player has not completed.
    fn target_color(&self, view: &PlayerView<'_>) -> Option<ColorGroup> {
        self.config
            .color_priority
            .iter()
            .copied()
            .find(|&c| !view.ownership.holds_group(view.board, view.player, c))
    }

    /// Probability of buying once the cash gate has passed.
    fn buy_probability(&self, property: &Property, view: &PlayerView<'_>) -> f64 {
        let group = property.group;
        let size = view.board.group(group).len().max(1) as f64;
        let held = view.ownership.count_in_group(view.board, view.player, group) as f64;
        let share = held / size;

        if self.config.color_priority.is_empty() {
            return (self.config.buy.probability + self.config.buy.group_bonus * share).min(1.0);
        }

        match self.target_color(view) {
            None => 0.15,
            Some(target) if target == group => (0.85 + 0.1 * share).min(0.95),
            Some(_) => match self.config.color_priority.iter().position(|&c| c == group) {
                Some(rank) => (0.4 - 0.1 * rank as f64).max(0.1),
                None => 0.1,
            },
        }
    }

    /// Streets the player could raise one level right now.
    fn build_candidates(
        &self,
        view: &PlayerView<'_>,
        scratch: &DevelopmentLedger,
        cash: i64,
    ) -> Vec<PropertyId> {
        ColorGroup::STREETS
            .iter()
            .filter(|&&group| view.ownership.holds_group(view.board, view.player, group))
            .flat_map(|&group| view.board.group(group).iter().copied())
            .filter(|&id| {
                let level = scratch.level(id);
                let hotel_step = level + 1 == HOTEL_LEVEL;
                (self.config.develop.allow_hotel || !hotel_step)
                    && view.board.property(id).house_cost <= cash
                    && scratch.can_build(view.ownership, id, 1)
            })
            .collect()
    }

    /// Priority colors first, then the best rent gain per dollar.
    fn choose_build(
        &self,
        board: &Board,
        scratch: &DevelopmentLedger,
        candidates: &[PropertyId],
    ) -> Option<PropertyId> {
        for &color in &self.config.color_priority {
            if let Some(&id) = candidates.iter().find(|&&id| board.property(id).group == color) {
                return Some(id);
            }
        }

        let mut best: Option<(PropertyId, f64)> = None;
        for &id in candidates {
            let property = board.property(id);
            let level = usize::from(scratch.level(id));
            let gain = (property.rents[level + 1] - property.rents[level]) as f64;
            let ratio = gain / property.house_cost.max(1) as f64;
            if best.map_or(true, |(_, b)| ratio > b) {
                best = Some((id, ratio));
            }
        }
        best.map(|(id, _)| id).or_else(|| candidates.first().copied())
    }
}

impl Strategy for ConfiguredStrategy {
    fn name(&self) -> &str {
        &self.config.name
    }

    fn decide_buy(&self, property: &Property, view: &PlayerView<'_>, rng: &mut GameRng) -> bool {
        let buy = &self.config.buy;
        if view.money < property.price {
            return false;
        }
        let required = property.price as f64 * buy.price_multiple + buy.cash_reserve as f64;
        if (view.money as f64) < required {
            return false;
        }

        let p = self.buy_probability(property, view);
        p >= 1.0 || rng.gen_bool(p)
    }

    fn decide_develop(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> BuildPlan {
        let rule = &self.config.develop;
        let mut plan = BuildPlan::new();
        let mut scratch = view.ledger.clone();
        let mut cash = view.money;

        while plan.len() < rule.max_builds_per_turn && cash > rule.cash_threshold {
            if rule.probability < 1.0 && !rng.gen_bool(rule.probability) {
                break;
            }

            let candidates = self.build_candidates(view, &scratch, cash);
            let Some(property) = self.choose_build(view.board, &scratch, &candidates) else {
                break;
            };
            let Ok(kind) = scratch.apply_build(view.ownership, property) else {
                break;
            };

            cash -= view.board.property(property).house_cost;
            plan.push(BuildRequest { property, kind });
        }

        plan
    }

    fn pays_jail_fine(&self, money: i64, fine: i64) -> bool {
        money >= fine + self.config.jail_fine_reserve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Ownership;
    use crate::core::PlayerId;
    use crate::development::BuildKind;
    use std::sync::Arc;

    struct Table {
        board: Arc<Board>,
        ownership: Ownership,
        ledger: DevelopmentLedger,
    }

    impl Table {
        fn new() -> Self {
            let board = Arc::new(Board::standard());
            Self {
                ownership: Ownership::new(&board),
                ledger: DevelopmentLedger::new(Arc::clone(&board)),
                board,
            }
        }

        fn give(&mut self, group: ColorGroup, player: PlayerId) {
            for &id in self.board.group(group) {
                self.ownership.purchase(id, player);
            }
        }

        fn view(&self, money: i64) -> PlayerView<'_> {
            PlayerView {
                player: PlayerId::new(0),
                money,
                board: &self.board,
                ownership: &self.ownership,
                ledger: &self.ledger,
            }
        }
    }

    fn strategy(config: StrategyConfig) -> ConfiguredStrategy {
        ConfiguredStrategy::new(config).unwrap()
    }

    #[test]
    fn test_conservative_buy_gate() {
        let table = Table::new();
        let boardwalk = table.board.find("Boardwalk").unwrap();
        let s = strategy(StrategyConfig::conservative());
        let mut rng = GameRng::new(1);

        assert!(!s.decide_buy(boardwalk, &table.view(1199), &mut rng));
        assert!(s.decide_buy(boardwalk, &table.view(1200), &mut rng));
    }

    #[test]
    fn test_never_buys_unaffordable() {
        let table = Table::new();
        let boardwalk = table.board.find("Boardwalk").unwrap();
        let s = strategy(StrategyConfig::new("Any").with_buy(crate::strategy::BuyRule {
            cash_reserve: -1000,
            ..Default::default()
        }));
        assert!(!s.decide_buy(boardwalk, &table.view(399), &mut GameRng::new(1)));
    }

    #[test]
    fn test_color_priority_probabilities() {
        let mut table = Table::new();
        let s = strategy(StrategyConfig::color_focused(
            "Greens",
            &[ColorGroup::Green, ColorGroup::Yellow, ColorGroup::Red, ColorGroup::Orange],
        ));
        let green = table.board.find("Pacific Avenue").unwrap().clone();
        let orange = table.board.find("New York Avenue").unwrap().clone();
        let brown = table.board.find("Baltic Avenue").unwrap().clone();

        let view = table.view(2000);
        assert!((s.buy_probability(&green, &view) - 0.85).abs() < 1e-9);
        assert!((s.buy_probability(&orange, &view) - 0.1).abs() < 1e-9);
        assert!((s.buy_probability(&brown, &view) - 0.1).abs() < 1e-9);

        let north_carolina = table.board.find("North Carolina Avenue").unwrap().id;
        table.ownership.purchase(north_carolina, PlayerId::new(0));
        let view = table.view(2000);
        let expected = 0.85 + 0.1 / 3.0;
        assert!((s.buy_probability(&green, &view) - expected).abs() < 1e-9);

        table.give(ColorGroup::Green, PlayerId::new(0));
        table.give(ColorGroup::Yellow, PlayerId::new(0));
        table.give(ColorGroup::Red, PlayerId::new(0));
        table.give(ColorGroup::Orange, PlayerId::new(0));
        assert!((s.buy_probability(&brown, &table.view(2000)) - 0.15).abs() < 1e-9);
    }

    #[test]
    fn test_develop_respects_threshold_and_cap() {
        let mut table = Table::new();
        table.give(ColorGroup::Orange, PlayerId::new(0));
        let s = strategy(StrategyConfig::aggressive());
        let mut rng = GameRng::new(1);

        assert!(s.decide_develop(&table.view(500), &mut rng).is_empty());

        let plan = s.decide_develop(&table.view(5000), &mut rng);
        assert_eq!(plan.len(), 3);
        let mut streets: Vec<_> = plan.iter().map(|r| r.property).collect();
        streets.sort();
        streets.dedup();
        assert_eq!(streets.len(), 3, "even development spreads the three houses");
    }

    #[test]
    fn test_develop_stops_when_cash_runs_low() {
        let mut table = Table::new();
        table.give(ColorGroup::DarkBlue, PlayerId::new(0));
        let s = strategy(StrategyConfig::aggressive());

        // $650: first house leaves $450, under the $500 threshold.
        let plan = s.decide_develop(&table.view(650), &mut GameRng::new(1));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_hoarder_never_plans_hotel() {
        let mut table = Table::new();
        table.give(ColorGroup::DarkBlue, PlayerId::new(0));
        for _ in 0..4 {
            for id in table.board.group(ColorGroup::DarkBlue).to_vec() {
                table.ledger.apply_build(&table.ownership, id).unwrap();
            }
        }
        let hoarder = strategy(StrategyConfig::house_hoarder());
        assert!(hoarder.decide_develop(&table.view(10_000), &mut GameRng::new(1)).is_empty());

        // The flag alone turns any preset into a hoarder.
        let capped = strategy(StrategyConfig::aggressive().with_allow_hotel(false));
        assert!(capped.decide_develop(&table.view(10_000), &mut GameRng::new(1)).is_empty());

        let builder = strategy(StrategyConfig::aggressive());
        let plan = builder.decide_develop(&table.view(10_000), &mut GameRng::new(1));
        assert!(plan.iter().all(|r| r.kind == BuildKind::Hotel));
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn test_priority_order_chooses_builds() {
        let mut table = Table::new();
        table.give(ColorGroup::Brown, PlayerId::new(0));
        table.give(ColorGroup::DarkBlue, PlayerId::new(0));
        let groups = |colors: &[ColorGroup]| {
            let s = strategy(StrategyConfig::color_focused("Focused", colors));
            let plan = s.decide_develop(&table.view(5000), &mut GameRng::new(1));
            plan.iter().map(|r| table.board.property(r.property).group).collect::<Vec<_>>()
        };

        assert_eq!(groups(&[ColorGroup::Brown, ColorGroup::DarkBlue]), vec![ColorGroup::Brown; 3]);
        assert_eq!(groups(&[ColorGroup::DarkBlue]), vec![ColorGroup::DarkBlue; 3]);
    }

    #[test]
    fn test_jail_fine_reserve() {
        let s = strategy(StrategyConfig::aggressive().with_jail_fine_reserve(200));
        assert!(!s.pays_jail_fine(249, 50));
        assert!(s.pays_jail_fine(250, 50));
    }
}
