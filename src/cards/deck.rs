//! Decks drawn without replacement.
//!
//! Each draw is uniform over the cards not yet drawn. Once every card has
//! been drawn the deck reshuffles itself and starts over.

use smallvec::SmallVec;

use super::effect::{chance_cards, community_chest_cards, Card, DeckKind};
use crate::core::GameRng;

/// A deck of cards with its draw pile.
#[derive(Clone, Debug)]
pub struct Deck {
    kind: DeckKind,
    cards: Vec<Card>,
    /// Indices into `cards` not yet drawn this cycle.
    remaining: SmallVec<[u8; 16]>,
    reshuffles: u32,
}

impl Deck {
    /// A full deck of the given cards.
    #[must_use]
    pub fn new(kind: DeckKind, cards: Vec<Card>) -> Self {
        assert!(!cards.is_empty(), "Deck must contain at least 1 card");
        assert!(cards.len() <= usize::from(u8::MAX), "Deck too large");
        let remaining = (0..cards.len() as u8).collect();
        Self {
            kind,
            cards,
            remaining,
            reshuffles: 0,
        }
    }

    /// The standard deck of a kind.
    #[must_use]
    pub fn standard(kind: DeckKind) -> Self {
        match kind {
            DeckKind::CommunityChest => Self::new(kind, community_chest_cards()),
            DeckKind::Chance => Self::new(kind, chance_cards()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> DeckKind {
        self.kind
    }

    /// Cards not yet drawn this cycle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    /// How many times the deck has been exhausted and reshuffled.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Draw one card uniformly from the remaining pile.
    pub fn draw(&mut self, rng: &mut GameRng) -> Card {
        if self.remaining.is_empty() {
            self.remaining.extend(0..self.cards.len() as u8);
            self.reshuffles += 1;
        }
        let pick = rng.gen_index(self.remaining.len());
        let index = self.remaining.swap_remove(pick);
        self.cards[usize::from(index)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardEffect;

    #[test]
    fn test_draws_every_card_once_per_cycle() {
        let mut deck = Deck::standard(DeckKind::Chance);
        let mut rng = GameRng::new(5);
        let size = deck.remaining();

        let mut titles: Vec<_> = (0..size).map(|_| deck.draw(&mut rng).title).collect();
        titles.sort_unstable();
        titles.dedup();

        assert_eq!(titles.len(), size);
        assert_eq!(deck.remaining(), 0);
        assert_eq!(deck.reshuffles(), 0);
    }

    #[test]
    fn test_reshuffles_when_exhausted() {
        let mut deck = Deck::standard(DeckKind::CommunityChest);
        let mut rng = GameRng::new(5);
        let size = deck.remaining();

        for _ in 0..size {
            deck.draw(&mut rng);
        }
        deck.draw(&mut rng);

        assert_eq!(deck.reshuffles(), 1);
        assert_eq!(deck.remaining(), size - 1);
    }

    #[test]
    fn test_single_card_deck() {
        let card = Card { title: "Collect", effect: CardEffect::Collect(10) };
        let mut deck = Deck::new(DeckKind::Chance, vec![card]);
        let mut rng = GameRng::new(1);
        for _ in 0..3 {
            assert_eq!(deck.draw(&mut rng), card);
        }
        assert_eq!(deck.reshuffles(), 2);
    }
}
