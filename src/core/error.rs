//! Error taxonomy for the engine.
//!
//! Three kinds of failure exist:
//!
//! - `DevelopmentDenied`: a build request broke the monopoly, even-development,
//!   or bank-inventory rules. The turn engine recovers locally by abandoning
//!   the remaining build requests for the turn.
//! - `InsufficientFunds`: a purchase or payment could not be covered. A
//!   purchase becomes a declined buy; a debt becomes a bankruptcy.
//! - `InvalidConfiguration`: strategy or game settings are malformed. This is
//!   fatal and surfaces before any game starts.
//!
//! Declining to buy, rolling doubles, or going to jail are ordinary state
//! transitions and never travel through these types.

use thiserror::Error;

use crate::board::{ColorGroup, PropertyId};

/// Crate-level result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Crate-level error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("development denied: {0}")]
    DevelopmentDenied(#[from] DevelopmentDenied),

    #[error("insufficient funds: needed ${needed}, had ${available}")]
    InsufficientFunds { needed: i64, available: i64 },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Reasons the development ledger refuses a build.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DevelopmentDenied {
    #[error("{0} is not a street")]
    NotAStreet(PropertyId),

    #[error("{0} has no owner")]
    Unowned(PropertyId),

    #[error("owner does not hold every {0} street")]
    NoMonopoly(ColorGroup),

    #[error("{property} would reach level {target} while a {group} street sits at level {lowest}")]
    Uneven {
        property: PropertyId,
        group: ColorGroup,
        target: u8,
        lowest: u8,
    },

    #[error("{0} already has a hotel")]
    AtMaximum(PropertyId),

    #[error("bank has {available} houses, build needs {needed}")]
    HousesExhausted { needed: u32, available: u32 },

    #[error("bank has no hotels left")]
    HotelsExhausted,

    #[error("build increment must be at least 1")]
    ZeroIncrement,
}

/// Malformed game, simulation, or strategy settings.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be between {min} and {max} (got {got})")]
    PlayerCount { min: usize, max: usize, got: usize },

    #[error("turn limit must be at least 1")]
    ZeroTurnLimit,

    #[error("game count must be at least 1")]
    ZeroGames,

    #[error("{field} must be finite and within [0, 1] in strategy '{strategy}'")]
    Probability {
        strategy: String,
        field: &'static str,
    },

    #[error("{field} must be finite and non-negative in strategy '{strategy}'")]
    Negative {
        strategy: String,
        field: &'static str,
    },

    #[error("strategy name must not be empty")]
    EmptyName,

    #[error("color '{0}' is not a known color group")]
    UnknownColor(String),

    #[error("{color} is not a street color group (strategy '{strategy}')")]
    NotAStreetColor { strategy: String, color: ColorGroup },

    #[error("{color} appears more than once in the priority list of '{strategy}'")]
    DuplicateColor { strategy: String, color: ColorGroup },

    #[error("starting money must be positive (got {0})")]
    StartingMoney(i64),
}
