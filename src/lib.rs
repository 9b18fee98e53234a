//! # monopoly-sim
//!
//! A property-trading board game engine for comparing automated strategies
//! over many simulated games.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: every game owns seeded RNG streams for dice, cards,
//!    and strategy decisions. The same seed and configuration replay the same
//!    game, in a single thread or on the rayon pool.
//!
//! 2. **Shared catalog, owned state**: the `Board` is built once and shared
//!    behind an `Arc`; ownership, the development ledger, the bank, the decks,
//!    and the players belong to one game.
//!
//! 3. **Configuration Over Code**: every play style is one
//!    `ConfiguredStrategy` driven by a `StrategyConfig`.
//!
//! ## Modules
//!
//! - `core`: player ids, RNG, configuration, errors, per-game state
//! - `board`: the property catalog and the ownership map
//! - `development`: house/hotel levels and the bank inventory
//! - `cards`: Community Chest and Chance decks
//! - `strategy`: the `Strategy` trait and its configured implementation
//! - `rules`: rent, the turn engine, and the event log
//! - `game`: one game from setup to result record
//! - `simulation`: batches of games and per-strategy statistics

pub mod board;
pub mod cards;
pub mod core;
pub mod development;
pub mod game;
pub mod rules;
pub mod simulation;
pub mod strategy;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DevelopmentDenied, Error, GameConfig, GameRng, GameState, HouseRules, JailStatus, PlayerId,
    PlayerMap, PlayerState, Result,
};

pub use crate::board::{Board, ColorGroup, Deed, Ownership, Property, PropertyId, PropertyKind, Space};

pub use crate::development::{BankInventory, BuildKind, Development, DevelopmentLedger};

pub use crate::cards::{Card, CardEffect, Deck, DeckKind};

pub use crate::strategy::{
    BuildPlan, BuildRequest, BuyRule, ConfiguredStrategy, DevelopRule, PlayerView, Strategy, StrategyConfig,
};

pub use crate::rules::{rent_due, DiceRoll, GameEvent, JailExit, Settlement, TurnEngine, TurnPhase, TurnSummary};

pub use crate::game::{EndReason, Game, GameRecord, PlayerRecord};

pub use crate::simulation::{Simulation, SimulationConfig, SimulationReport, StrategyStats};
