//! Card definitions for the Community Chest and Chance decks.

use serde::Serialize;

/// What a drawn card does to the player who drew it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum CardEffect {
    /// Receive money from the bank.
    Collect(i64),
    /// Pay money to the bank.
    Pay(i64),
    /// Pay every other player still in the game.
    PayEachPlayer(i64),
    /// Move forward to a position, collecting salary if GO is passed, then
    /// resolve the space.
    AdvanceTo(u8),
    GoToJail,
    GetOutOfJailFree,
}

/// A single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Card {
    pub title: &'static str,
    pub effect: CardEffect,
}

impl Card {
    const fn new(title: &'static str, effect: CardEffect) -> Self {
        Self { title, effect }
    }
}

/// Which deck a card-draw space uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeckKind {
    CommunityChest,
    Chance,
}

impl std::fmt::Display for DeckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeckKind::CommunityChest => f.write_str("Community Chest"),
            DeckKind::Chance => f.write_str("Chance"),
        }
    }
}

/// The Community Chest cards.
#[must_use]
pub fn community_chest_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO", CardEffect::AdvanceTo(0)),
        Card::new("Bank error in your favor", CardEffect::Collect(200)),
        Card::new("Pay hospital fees", CardEffect::Pay(100)),
        Card::new("Doctor's fee", CardEffect::Pay(50)),
        Card::new("Get out of jail free", CardEffect::GetOutOfJailFree),
    ]
}

/// The Chance cards.
#[must_use]
pub fn chance_cards() -> Vec<Card> {
    vec![
        Card::new("Advance to GO", CardEffect::AdvanceTo(0)),
        Card::new("Go to Jail", CardEffect::GoToJail),
        Card::new("Pay each player $50", CardEffect::PayEachPlayer(50)),
        Card::new("Collect $150", CardEffect::Collect(150)),
        Card::new("Advance to Illinois Avenue", CardEffect::AdvanceTo(24)),
        Card::new("Take a trip to Reading Railroad", CardEffect::AdvanceTo(5)),
    ]
}
