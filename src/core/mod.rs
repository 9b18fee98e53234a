//! Core engine types: players, RNG, configuration, errors, and the
//! per-game state that ties the board, ledger, and decks together.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use config::{GameConfig, HouseRules, MAX_PLAYERS, MIN_PLAYERS};
pub use error::{ConfigError, DevelopmentDenied, Error, Result};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{GameState, JailStatus, PlayerState};
