//! Board model: the property catalog and the ownership map.
//!
//! - `Board`: immutable spaces and property definitions, shared across games
//! - `Ownership`: per-game property -> owner map

pub mod catalog;
pub mod ownership;

pub use catalog::{
    Board, ColorGroup, Property, PropertyId, PropertyKind, Space, BOARD_SIZE, GO_POSITION,
    JAIL_POSITION,
};
pub use ownership::{Deed, Ownership};
