//! Runs one game from setup to a terminal state.

use im::Vector;
use std::sync::Arc;

use super::record::{EndReason, GameRecord, PlayerRecord};
use crate::board::Board;
use crate::core::{GameConfig, GameState, PlayerId, PlayerMap, PlayerState, Result};
use crate::rules::{self, GameEvent, TurnSummary};
use crate::strategy::{ConfiguredStrategy, Strategy};

/// A single game.
#[derive(Clone, Debug)]
pub struct Game {
    seed: u64,
    max_turns: u32,
    verbose: bool,
    state: GameState,
}

impl Game {
    /// Set up a game on the standard board.
    pub fn new(config: &GameConfig, seed: u64) -> Result<Self> {
        Self::with_board(config, Arc::new(Board::standard()), seed)
    }

    /// Set up a game on a shared board.
    ///
    /// Fails with `Error::InvalidConfiguration` before anything is built if
    /// the configuration does not validate.
    pub fn with_board(config: &GameConfig, board: Arc<Board>, seed: u64) -> Result<Self> {
        config.validate()?;

        let seats = config
            .players
            .iter()
            .map(|c| -> Result<PlayerState> {
                let strategy: Arc<dyn Strategy> = Arc::new(ConfiguredStrategy::new(c.clone())?);
                Ok(PlayerState::new(strategy, config.starting_money))
            })
            .collect::<Result<Vec<_>>>()?;

        let state = GameState::new(board, PlayerMap::from_vec(seats), config.house_rules(), seed);
        Ok(Self {
            seed,
            max_turns: config.max_turns,
            verbose: config.verbose,
            state,
        })
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    #[must_use]
    pub fn events(&self) -> &Vector<GameEvent> {
        &self.state.events
    }

    /// `Some` once the game is over.
    #[must_use]
    pub fn is_terminal(&self) -> Option<EndReason> {
        if self.state.active_count() <= 1 {
            Some(EndReason::LastPlayerStanding)
        } else if self.state.round >= self.max_turns {
            Some(EndReason::TurnLimit)
        } else {
            None
        }
    }

    /// Play the current player's turn and pass play to the next seat still in
    /// the game. Returns `None` if the game was already over.
    pub fn play_turn(&mut self) -> Option<TurnSummary> {
        if self.is_terminal().is_some() {
            return None;
        }

        let summary = rules::play_turn(&mut self.state);
        self.advance_turn();
        Some(summary)
    }

    /// Move `current` to the next non-eliminated seat, counting a round each
    /// time seat order wraps.
    fn advance_turn(&mut self) {
        let count = self.state.player_count();
        let from = self.state.current;
        let mut seat = from;
        for _ in 0..count {
            seat = seat.next(count);
            if !self.state.player(seat).eliminated {
                break;
            }
        }

        if seat <= from {
            self.state.round += 1;
        }
        self.state.current = seat;
    }

    /// Play to the end and return the result.
    pub fn play(mut self) -> GameRecord {
        while self.play_turn().is_some() {}

        let record = self.record();
        if self.verbose {
            log_summary(&record);
        }
        record
    }

    /// Winner under the current state.
    ///
    /// With one player left, that player. On the turn limit, the surviving
    /// player with the highest net worth; ties go to the lowest seat.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        let mut best: Option<(PlayerId, i64)> = None;
        for player in self.state.active_players() {
            let worth = self.state.net_worth(player);
            if best.map_or(true, |(_, b)| worth > b) {
                best = Some((player, worth));
            }
        }
        best.map(|(player, _)| player)
    }

    /// Snapshot the result record. `end` reads as `TurnLimit` while the game
    /// is still running.
    #[must_use]
    pub fn record(&self) -> GameRecord {
        let state = &self.state;
        let players = state
            .players
            .iter()
            .map(|(id, seat)| {
                let (houses, hotels) = state.ledger.buildings_of(&state.ownership, id);
                PlayerRecord {
                    id,
                    strategy: seat.strategy().name().to_string(),
                    final_money: seat.money,
                    properties_owned: state.ownership.holdings_count(id),
                    houses_built: houses,
                    hotels_built: hotels,
                    net_worth: state.net_worth(id),
                    eliminated: seat.eliminated,
                }
            })
            .collect();

        GameRecord {
            seed: self.seed,
            rounds: state.round,
            end: self.is_terminal().unwrap_or(EndReason::TurnLimit),
            winner: self.winner(),
            players,
            houses_available: state.ledger.bank().houses_available(),
            hotels_available: state.ledger.bank().hotels_available(),
        }
    }
}

fn log_summary(record: &GameRecord) {
    log::info!("game {} over after {} rounds ({:?})", record.seed, record.rounds, record.end);
    if let Some(winner) = record.winning_player() {
        log::info!(
            "winner: {} ({}) with ${}, {} properties, {} houses, {} hotels",
            winner.id,
            winner.strategy,
            winner.final_money,
            winner.properties_owned,
            winner.houses_built,
            winner.hotels_built
        );
    }
    log::info!(
        "bank: {} houses, {} hotels remaining",
        record.houses_available,
        record.hotels_available
    );
}
