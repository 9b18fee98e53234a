//! Strategy trait for automated players.
//!
//! The turn engine asks a player's strategy two questions:
//!
//! - `decide_buy`: buy the unowned property just landed on?
//! - `decide_develop`: which builds to attempt this turn, in order?
//!
//! A strategy sees the board through a read-only `PlayerView` and draws any
//! randomness from the generator it is handed. It never reaches for global
//! state, so a seeded game replays exactly.
//!
//! Every described play style is one `ConfiguredStrategy` with different
//! `StrategyConfig` data: thresholds, probabilities, a color priority list,
//! and the `allow_hotel` flag.

pub mod config;
pub mod configured;

pub use config::{BuyRule, DevelopRule, StrategyConfig};
pub use configured::ConfiguredStrategy;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Ownership, Property, PropertyId};
use crate::core::{GameRng, PlayerId};
use crate::development::{BuildKind, DevelopmentLedger};

/// One build the strategy wants the engine to attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRequest {
    pub property: PropertyId,
    /// What the strategy expects the step to put down.
    pub kind: BuildKind,
}

/// Ordered build requests for one turn.
pub type BuildPlan = SmallVec<[BuildRequest; 4]>;

/// Read-only view of the game from one player's seat.
#[derive(Clone, Copy, Debug)]
pub struct PlayerView<'a> {
    pub player: PlayerId,
    pub money: i64,
    pub board: &'a Board,
    pub ownership: &'a Ownership,
    pub ledger: &'a DevelopmentLedger,
}

/// Decision-maker for one player.
///
/// Assigned at game setup and never swapped. `Send + Sync` so one strategy
/// value can back players in games running on different threads.
pub trait Strategy: Send + Sync + std::fmt::Debug {
    /// Display name, carried into game records.
    fn name(&self) -> &str;

    /// Whether to buy `property` at its list price.
    fn decide_buy(&self, property: &Property, view: &PlayerView<'_>, rng: &mut GameRng) -> bool;

    /// Builds to attempt this turn, in order. May be empty.
    fn decide_develop(&self, view: &PlayerView<'_>, rng: &mut GameRng) -> BuildPlan;

    /// Whether to pay the jail fine instead of rolling for doubles.
    fn pays_jail_fine(&self, money: i64, fine: i64) -> bool {
        money >= fine
    }
}
