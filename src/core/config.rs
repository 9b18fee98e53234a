//! Game configuration.
//!
//! A `GameConfig` names the players (one `StrategyConfig` per seat, in turn
//! order) and the house rules the engine needs: starting cash, salary, jail
//! fine, and the round limit. Everything is validated once, up front; a game
//! never starts from a bad configuration.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::strategy::StrategyConfig;

/// Fewest players a game accepts.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game accepts.
pub const MAX_PLAYERS: usize = 8;

/// Complete configuration for one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Seats in turn order.
    pub players: Vec<StrategyConfig>,

    /// Rounds played before the game is decided on net worth.
    pub max_turns: u32,

    /// Log a summary of each finished game at `info`.
    #[serde(default)]
    pub verbose: bool,

    pub starting_money: i64,

    /// Paid once per move that passes or lands on GO.
    pub go_salary: i64,

    pub jail_fine: i64,

    /// Failed doubles attempts after which the fine is forced.
    pub max_failed_jail_rolls: u8,
}

/// Per-turn rule constants carried by a running game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseRules {
    pub go_salary: i64,
    pub jail_fine: i64,
    pub max_failed_jail_rolls: u8,
}

impl Default for HouseRules {
    fn default() -> Self {
        GameConfig::default().house_rules()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            max_turns: 1000,
            verbose: false,
            starting_money: 1500,
            go_salary: 200,
            jail_fine: 50,
            max_failed_jail_rolls: 3,
        }
    }
}

impl GameConfig {
    /// Default rules with the given seats.
    pub fn new(players: Vec<StrategyConfig>) -> Self {
        Self {
            players,
            ..Self::default()
        }
    }

    /// The eight-strategy comparison game.
    pub fn standard() -> Self {
        Self::new(StrategyConfig::standard_lineup())
    }

    #[must_use]
    pub fn with_player(mut self, player: StrategyConfig) -> Self {
        self.players.push(player);
        self
    }

    #[must_use]
    pub fn with_max_turns(mut self, max_turns: u32) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    #[must_use]
    pub fn with_starting_money(mut self, money: i64) -> Self {
        self.starting_money = money;
        self
    }

    #[must_use]
    pub fn with_jail_fine(mut self, fine: i64) -> Self {
        self.jail_fine = fine;
        self
    }

    /// The money rules the turn engine applies.
    #[must_use]
    pub fn house_rules(&self) -> HouseRules {
        HouseRules {
            go_salary: self.go_salary,
            jail_fine: self.jail_fine,
            max_failed_jail_rolls: self.max_failed_jail_rolls,
        }
    }

    /// Number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Check seat count, limits, and every strategy.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let got = self.players.len();
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&got) {
            return Err(ConfigError::PlayerCount {
                min: MIN_PLAYERS,
                max: MAX_PLAYERS,
                got,
            });
        }
        if self.max_turns == 0 {
            return Err(ConfigError::ZeroTurnLimit);
        }
        if self.starting_money < 0 {
            return Err(ConfigError::StartingMoney(self.starting_money));
        }
        for (field, value) in [("go_salary", self.go_salary), ("jail_fine", self.jail_fine)] {
            if value < 0 {
                return Err(ConfigError::Negative {
                    strategy: "game".to_string(),
                    field,
                });
            }
        }

        self.players.iter().try_for_each(StrategyConfig::validate)
    }
}
