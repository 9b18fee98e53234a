//! Community Chest and Chance decks.
//!
//! Cards carry simplified effects: money in or out, a move to a space, or a
//! trip to jail. The turn engine applies them.

pub mod deck;
pub mod effect;

pub use deck::Deck;
pub use effect::{chance_cards, community_chest_cards, Card, CardEffect, DeckKind};
