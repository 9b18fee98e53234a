//! Running many games.
//!
//! Seeds are forked from the base seed in game-index order before any game
//! starts, and results are collected in index order, so a parallel batch
//! returns exactly what a sequential one does.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::config::SimulationConfig;
use super::stats::{aggregate, StrategyStats};
use crate::board::Board;
use crate::core::{GameRng, Result};
use crate::game::{Game, GameRecord};

/// Everything a batch produced.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// One record per game, in game-index order.
    pub records: Vec<GameRecord>,
    /// One entry per strategy name, in seat order of first appearance.
    pub stats: Vec<StrategyStats>,
}

impl SimulationReport {
    #[must_use]
    pub fn games(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn stats_for(&self, name: &str) -> Option<&StrategyStats> {
        self.stats.iter().find(|s| s.name == name)
    }
}

/// A validated batch, ready to run.
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    board: Arc<Board>,
}

impl Simulation {
    /// Validate the configuration once for the whole batch.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            board: Arc::new(Board::standard()),
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Per-game seeds, in game-index order.
    #[must_use]
    pub fn seeds(&self) -> Vec<u64> {
        let mut root = GameRng::new(self.config.seed);
        (0..self.config.num_games).map(|_| root.fork().seed()).collect()
    }

    /// Play every game and aggregate the results.
    pub fn run(&self) -> Result<SimulationReport> {
        let seeds = self.seeds();
        log::info!(
            "running {} games, max {} rounds each{}",
            seeds.len(),
            self.config.max_turns,
            if self.config.parallel { " (parallel)" } else { "" }
        );

        let records = if self.config.parallel {
            seeds
                .par_iter()
                .enumerate()
                .map(|(index, &seed)| self.play_one(index, seed))
                .collect::<Result<Vec<_>>>()?
        } else {
            seeds
                .iter()
                .enumerate()
                .map(|(index, &seed)| self.play_one(index, seed))
                .collect::<Result<Vec<_>>>()?
        };

        let stats = aggregate(&records);
        Ok(SimulationReport { records, stats })
    }

    fn play_one(&self, index: usize, seed: u64) -> Result<GameRecord> {
        let config = self.config.game_config(index);
        let record = Game::with_board(&config, Arc::clone(&self.board), seed)?.play();

        if self.config.verbose && (index + 1) % 10 == 0 {
            log::info!("game {}/{} done", index + 1, self.config.num_games);
        }
        log::debug!(
            "game {index} (seed {seed}): {:?} after {} rounds, winner {:?}",
            record.end,
            record.rounds,
            record.winning_strategy()
        );
        Ok(record)
    }
}

/// Validate, play, and aggregate in one call.
pub fn run(config: SimulationConfig) -> Result<SimulationReport> {
    Simulation::new(config)?.run()
}
