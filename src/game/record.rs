//! Per-game result record.
//!
//! This is the only thing a finished game hands to the outside: statistics
//! aggregation and reporting read these records and nothing else.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// Every other player went bankrupt.
    LastPlayerStanding,
    /// The round limit was reached; the winner is decided on net worth.
    TurnLimit,
}

/// Final standing of one seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: PlayerId,
    /// Strategy name.
    pub strategy: String,
    pub final_money: i64,
    pub properties_owned: usize,
    /// Houses standing on the player's streets at the end.
    pub houses_built: u32,
    /// Hotels standing on the player's streets at the end.
    pub hotels_built: u32,
    pub net_worth: i64,
    pub eliminated: bool,
}

/// Outcome of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub seed: u64,
    /// Completed rounds.
    pub rounds: u32,
    pub end: EndReason,
    pub winner: Option<PlayerId>,
    pub players: Vec<PlayerRecord>,
    pub houses_available: u32,
    pub hotels_available: u32,
}

impl GameRecord {
    /// The winner's record, if there is a winner.
    #[must_use]
    pub fn winning_player(&self) -> Option<&PlayerRecord> {
        let winner = self.winner?;
        self.players.iter().find(|p| p.id == winner)
    }

    /// Strategy name of the winner.
    #[must_use]
    pub fn winning_strategy(&self) -> Option<&str> {
        self.winning_player().map(|p| p.strategy.as_str())
    }
}
