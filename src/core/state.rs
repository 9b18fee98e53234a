//! Per-game mutable state.
//!
//! ## PlayerState
//!
//! Cash, position, jail status, held jail cards, and the strategy assigned at
//! setup. Owned properties are not stored here; the `Ownership` map is the
//! single source of truth.
//!
//! ## GameState
//!
//! Everything one game mutates:
//! - Ownership map and development ledger (with the bank)
//! - Both card decks
//! - Independent RNG streams for dice, cards, and strategy decisions
//! - Turn pointer, round counter, and the event log
//!
//! Only the `Board` is shared between games, behind an `Arc`.

use im::Vector;
use std::sync::Arc;

use super::config::HouseRules;
use super::player::{PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::board::{Board, Ownership, JAIL_POSITION};
use crate::cards::{Deck, DeckKind};
use crate::development::DevelopmentLedger;
use crate::rules::GameEvent;
use crate::strategy::Strategy;

/// Whether a player is in jail.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JailStatus {
    #[default]
    Free,
    Jailed { turns_served: u8, failed_rolls: u8 },
}

impl JailStatus {
    #[must_use]
    pub fn is_jailed(self) -> bool {
        matches!(self, JailStatus::Jailed { .. })
    }
}

/// One seat at the table.
#[derive(Clone, Debug)]
pub struct PlayerState {
    /// May dip below zero inside a single payment; never after it settles.
    pub money: i64,
    pub position: u8,
    pub jail: JailStatus,
    /// Get-out-of-jail-free cards held.
    pub jail_cards: u8,
    pub eliminated: bool,
    strategy: Arc<dyn Strategy>,
}

impl PlayerState {
    /// A player on GO with the given cash.
    pub fn new(strategy: Arc<dyn Strategy>, money: i64) -> Self {
        Self {
            money,
            position: 0,
            jail: JailStatus::Free,
            jail_cards: 0,
            eliminated: false,
            strategy,
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }
}

/// Complete state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Arc<Board>,
    pub ownership: Ownership,
    pub ledger: DevelopmentLedger,
    pub community_chest: Deck,
    pub chance: Deck,
    pub players: PlayerMap<PlayerState>,

    /// Whose turn is next.
    pub current: PlayerId,

    /// Completed rounds (times turn order has wrapped).
    pub round: u32,

    /// Player-turns taken so far.
    pub turns_played: u64,

    pub rules: HouseRules,
    pub events: Vector<GameEvent>,

    pub dice_rng: GameRng,
    pub card_rng: GameRng,
    pub strategy_rng: GameRng,
}

impl GameState {
    /// Fresh state: everyone on GO, bank full, decks full.
    ///
    /// The three RNG streams are derived from `seed`, so two states built
    /// with the same arguments play identically.
    pub fn new(board: Arc<Board>, players: PlayerMap<PlayerState>, rules: HouseRules, seed: u64) -> Self {
        let root = GameRng::new(seed);
        Self {
            ownership: Ownership::new(&board),
            ledger: DevelopmentLedger::new(Arc::clone(&board)),
            community_chest: Deck::standard(DeckKind::CommunityChest),
            chance: Deck::standard(DeckKind::Chance),
            players,
            current: PlayerId::new(0),
            round: 0,
            turns_played: 0,
            rules,
            events: Vector::new(),
            dice_rng: root.for_context("dice"),
            card_rng: root.for_context("cards"),
            strategy_rng: root.for_context("strategy"),
            board,
        }
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn board_arc(&self) -> &Arc<Board> {
        &self.board
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    pub fn player_mut(&mut self, player: PlayerId) -> &mut PlayerState {
        &mut self.players[player]
    }

    /// Players still in the game, in seat order.
    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.players
            .iter()
            .filter(|(_, p)| !p.eliminated)
            .map(|(id, _)| id)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    /// Cash plus list price plus building cost of everything held.
    ///
    /// A hotel counts as five houses.
    #[must_use]
    pub fn net_worth(&self, player: PlayerId) -> i64 {
        let holdings: i64 = self
            .ownership
            .holdings(player)
            .map(|id| {
                let property = self.board.property(id);
                property.price + property.house_cost * i64::from(self.ledger.level(id))
            })
            .sum();
        self.players[player].money + holdings
    }

    /// Put a player in jail without passing GO.
    pub fn send_to_jail(&mut self, player: PlayerId) {
        let state = &mut self.players[player];
        state.position = JAIL_POSITION;
        state.jail = JailStatus::Jailed {
            turns_served: 0,
            failed_rolls: 0,
        };
        self.log(GameEvent::SentToJail { player });
    }

    /// Append to the event log and mirror it at `trace`.
    pub fn log(&mut self, event: GameEvent) {
        log::trace!("turn {}: {}", self.turns_played, event);
        self.events.push_back(event);
    }
}
