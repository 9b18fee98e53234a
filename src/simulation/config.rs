//! Batch configuration.

use serde::{Deserialize, Serialize};

use crate::core::{ConfigError, GameConfig};
use crate::strategy::StrategyConfig;

/// Games that get a full summary at `info` when `verbose` is set.
pub const VERBOSE_GAMES: usize = 5;

/// How many games to play and with whom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub num_games: usize,

    /// Round limit for each game.
    pub max_turns: u32,

    /// Log summaries of the first few games and batch progress.
    pub verbose: bool,

    /// Base seed. Game seeds are forked from it in game-index order.
    pub seed: u64,

    /// Seats in turn order, the same for every game.
    pub players: Vec<StrategyConfig>,

    /// Play games on the rayon thread pool.
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_games: 100,
            max_turns: 1000,
            verbose: false,
            seed: 0,
            players: StrategyConfig::standard_lineup(),
            parallel: true,
        }
    }
}

impl SimulationConfig {
    #[must_use]
    pub fn with_num_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
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
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn with_players(mut self, players: Vec<StrategyConfig>) -> Self {
        self.players = players;
        self
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Configuration of the game at `index`.
    #[must_use]
    pub fn game_config(&self, index: usize) -> GameConfig {
        GameConfig::new(self.players.clone())
            .with_max_turns(self.max_turns)
            .with_verbose(self.verbose && index < VERBOSE_GAMES)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_games == 0 {
            return Err(ConfigError::ZeroGames);
        }
        self.game_config(0).validate()
    }
}
