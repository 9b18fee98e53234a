//! Strategy configuration.
//!
//! All play styles share one algorithm; these structs are the knobs. Presets
//! reproduce the classic lineup: random, aggressive, conservative,
//! color-focused (any priority list), and the house hoarder.

use serde::{Deserialize, Serialize};

use crate::board::ColorGroup;
use crate::core::ConfigError;

/// When to buy an unowned property.
///
/// A purchase needs `money >= price * price_multiple + cash_reserve` (and
/// always `money >= price`). Past that gate the buy happens with a
/// probability: `probability + group_bonus * held/size` without a color
/// priority list, or the priority curve with one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BuyRule {
    pub price_multiple: f64,
    pub cash_reserve: i64,
    pub probability: f64,
    /// Extra buy probability scaled by the share of the group already held.
    pub group_bonus: f64,
}

impl Default for BuyRule {
    fn default() -> Self {
        Self {
            price_multiple: 1.0,
            cash_reserve: 0,
            probability: 1.0,
            group_bonus: 0.0,
        }
    }
}

/// When and how much to build.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DevelopRule {
    /// Cash must stay above this for another build to be planned.
    pub cash_threshold: i64,
    /// Chance of planning each further build.
    pub probability: f64,
    pub max_builds_per_turn: usize,
    /// `false` caps streets at four houses.
    pub allow_hotel: bool,
}

impl Default for DevelopRule {
    fn default() -> Self {
        Self {
            cash_threshold: 500,
            probability: 1.0,
            max_builds_per_turn: 3,
            allow_hotel: true,
        }
    }
}

/// Complete configuration of a `ConfiguredStrategy`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrategyConfig {
    pub name: String,
    pub buy: BuyRule,
    pub develop: DevelopRule,
    /// Street colors in the order the player tries to complete them.
    #[serde(default)]
    pub color_priority: Vec<ColorGroup>,
    /// Cash kept back when deciding whether to pay the jail fine.
    #[serde(default)]
    pub jail_fine_reserve: i64,
}

impl StrategyConfig {
    /// A strategy that buys anything affordable and builds above $500.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            buy: BuyRule::default(),
            develop: DevelopRule::default(),
            color_priority: Vec::new(),
            jail_fine_reserve: 0,
        }
    }

    /// Buys 60% of affordable properties; plans each build with 30% chance above $400.
    pub fn random() -> Self {
        Self::new("Random")
            .with_buy(BuyRule { probability: 0.6, ..BuyRule::default() })
            .with_develop(DevelopRule { cash_threshold: 400, probability: 0.3, ..DevelopRule::default() })
    }

    /// Buys while $100 would remain; builds above $500.
    pub fn aggressive() -> Self {
        Self::new("Aggressive")
            .with_buy(BuyRule { cash_reserve: 100, ..BuyRule::default() })
            .with_develop(DevelopRule { cash_threshold: 500, ..DevelopRule::default() })
    }

    /// Buys only with three times the price in hand; builds above $1000.
    /// Rolls for doubles in jail unless $500 would remain after the fine.
    pub fn conservative() -> Self {
        Self::new("Conservative")
            .with_buy(BuyRule { price_multiple: 3.0, ..BuyRule::default() })
            .with_develop(DevelopRule { cash_threshold: 1000, ..DevelopRule::default() })
            .with_jail_fine_reserve(500)
    }

    /// Chases color groups in the given order; builds above $300.
    ///
    /// With an empty list it buys 40% of the time, more once part of a group
    /// is held.
    pub fn color_focused(name: impl Into<String>, colors: &[ColorGroup]) -> Self {
        Self::new(name)
            .with_buy(BuyRule { probability: 0.4, group_bonus: 0.3, ..BuyRule::default() })
            .with_develop(DevelopRule { cash_threshold: 300, ..DevelopRule::default() })
            .with_color_priority(colors.to_vec())
            .with_jail_fine_reserve(200)
    }

    /// `color_focused` with colors given by name (`"dark_blue"`, `"green"`, ...).
    pub fn color_focused_named(name: impl Into<String>, colors: &[&str]) -> Result<Self, ConfigError> {
        let colors = colors
            .iter()
            .map(|c| c.parse::<ColorGroup>())
            .collect::<Result<Vec<_>, _>>()?;
        let config = Self::color_focused(name, &colors);
        config.validate()?;
        Ok(config)
    }

    /// Buys while $10 would remain, builds above $200, never builds hotels.
    /// Keeps $300 back before paying its way out of jail.
    pub fn house_hoarder() -> Self {
        Self::new("House Hoarder")
            .with_buy(BuyRule { cash_reserve: 10, ..BuyRule::default() })
            .with_develop(DevelopRule { cash_threshold: 200, ..DevelopRule::default() })
            .with_allow_hotel(false)
            .with_jail_fine_reserve(300)
    }

    /// The eight-player comparison lineup.
    pub fn standard_lineup() -> Vec<Self> {
        use ColorGroup::*;

        vec![
            Self::random().with_name("Random Player"),
            Self::aggressive().with_name("Aggressive Player"),
            Self::conservative().with_name("Conservative Player"),
            Self::color_focused(
                "Expensive->Cheap",
                &[DarkBlue, Green, Yellow, Red, Orange, Pink, LightBlue, Brown],
            ),
            Self::color_focused(
                "Cheap->Expensive",
                &[Brown, LightBlue, Pink, Orange, Red, Yellow, Green, DarkBlue],
            ),
            Self::color_focused("Expensive->Cheaper", &[DarkBlue, Green, Yellow, Red]),
            Self::color_focused("2nd Expensive->Cheaper", &[Green, Yellow, Red, Orange]),
            Self::house_hoarder(),
        ]
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_buy(mut self, buy: BuyRule) -> Self {
        self.buy = buy;
        self
    }

    #[must_use]
    pub fn with_develop(mut self, develop: DevelopRule) -> Self {
        self.develop = develop;
        self
    }

    #[must_use]
    pub fn with_color_priority(mut self, colors: Vec<ColorGroup>) -> Self {
        self.color_priority = colors;
        self
    }

    #[must_use]
    pub fn with_allow_hotel(mut self, allow: bool) -> Self {
        self.develop.allow_hotel = allow;
        self
    }

    #[must_use]
    pub fn with_jail_fine_reserve(mut self, reserve: i64) -> Self {
        self.jail_fine_reserve = reserve;
        self
    }

    /// Check thresholds, probabilities and the priority list.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }

        let probability = |field: &'static str, value: f64| {
            if value.is_finite() && (0.0..=1.0).contains(&value) {
                Ok(())
            } else {
                Err(ConfigError::Probability { strategy: self.name.clone(), field })
            }
        };
        probability("buy.probability", self.buy.probability)?;
        probability("buy.group_bonus", self.buy.group_bonus)?;
        probability("develop.probability", self.develop.probability)?;

        if !(self.buy.price_multiple.is_finite() && self.buy.price_multiple >= 0.0) {
            return Err(ConfigError::Negative {
                strategy: self.name.clone(),
                field: "buy.price_multiple",
            });
        }

        for (i, &color) in self.color_priority.iter().enumerate() {
            if !color.is_street() {
                return Err(ConfigError::NotAStreetColor { strategy: self.name.clone(), color });
            }
            if self.color_priority[..i].contains(&color) {
                return Err(ConfigError::DuplicateColor { strategy: self.name.clone(), color });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_lineup_is_valid() {
        let lineup = StrategyConfig::standard_lineup();
        assert_eq!(lineup.len(), 8);
        for config in &lineup {
            assert_eq!(config.validate(), Ok(()), "{}", config.name);
        }
        assert!(!lineup[7].develop.allow_hotel);
        assert_eq!(lineup[1].jail_fine_reserve, 0);
        assert_eq!(lineup[2].jail_fine_reserve, 500);
        assert_eq!(lineup[5].color_priority.len(), 4);
    }

    #[test]
    fn test_named_colors() {
        let config = StrategyConfig::color_focused_named("Greens", &["green", "yellow"]).unwrap();
        assert_eq!(config.color_priority, vec![ColorGroup::Green, ColorGroup::Yellow]);

        assert_eq!(
            StrategyConfig::color_focused_named("Bad", &["teal"]),
            Err(ConfigError::UnknownColor("teal".to_string()))
        );
    }

    #[test]
    fn test_rejects_duplicate_and_non_street_colors() {
        let dup = StrategyConfig::color_focused("Dup", &[ColorGroup::Red, ColorGroup::Red]);
        assert!(matches!(dup.validate(), Err(ConfigError::DuplicateColor { color: ColorGroup::Red, .. })));

        let rail = StrategyConfig::color_focused("Rail", &[ColorGroup::Railroad]);
        assert!(matches!(rail.validate(), Err(ConfigError::NotAStreetColor { .. })));
    }

    #[test]
    fn test_rejects_bad_thresholds() {
        let config = StrategyConfig::random().with_buy(BuyRule { probability: 1.5, ..BuyRule::default() });
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Probability { field: "buy.probability", .. })
        ));

        let config = StrategyConfig::aggressive().with_buy(BuyRule { price_multiple: f64::NAN, ..BuyRule::default() });
        assert!(matches!(config.validate(), Err(ConfigError::Negative { .. })));

        assert_eq!(StrategyConfig::new(" ").validate(), Err(ConfigError::EmptyName));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = StrategyConfig::house_hoarder();
        let json = serde_json::to_string(&config).unwrap();
        let back: StrategyConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
