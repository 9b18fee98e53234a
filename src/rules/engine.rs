//! Turn engine.
//!
//! One player-turn runs as a small state machine:
//!
//! ```text
//! Start -> RollDice -> Move -> ResolveSpace -> BuyDecision -> DevelopDecision -> EndTurn
//!      \-> InJail --(released)--> RollDice / Move
//!                 \-(stays)-----> EndTurn
//! ```
//!
//! `ResolveSpace` may loop back to itself when a card moves the player, and
//! jumps straight to `EndTurn` once the player is eliminated.
//!
//! ## Payments
//!
//! Every debt (rent, tax, card, jail fine) goes through `settle_debt`. A debt
//! the player cannot cover is a bankruptcy: the creditor receives only what
//! the debtor had, the debtor is eliminated with $0, and their properties
//! return to the bank unowned with buildings demolished, all on the same turn.
//! A purchase the player cannot afford is just a declined buy.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::sync::Arc;

use super::event::{GameEvent, JailExit};
use super::rent::rent_due;
use crate::board::{PropertyId, Space, BOARD_SIZE};
use crate::cards::{CardEffect, DeckKind};
use crate::core::{Error, GameRng, GameState, JailStatus, PlayerId, Result};
use crate::strategy::{PlayerView, Strategy};

/// Phases of a single turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    Start,
    RollDice,
    InJail,
    Move,
    ResolveSpace,
    BuyDecision,
    DevelopDecision,
    EndTurn,
}

/// Two six-sided dice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceRoll {
    pub first: u8,
    pub second: u8,
}

impl DiceRoll {
    #[must_use]
    pub const fn new(first: u8, second: u8) -> Self {
        Self { first, second }
    }

    /// Two independent uniform draws in [1, 6].
    pub fn roll(rng: &mut GameRng) -> Self {
        let first = rng.roll_die();
        let second = rng.roll_die();
        Self { first, second }
    }

    #[must_use]
    pub const fn total(self) -> u8 {
        self.first + self.second
    }

    #[must_use]
    pub const fn is_doubles(self) -> bool {
        self.first == self.second
    }
}

/// Outcome of a debt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Settlement {
    Paid,
    /// The debtor was eliminated; `covered` reached the creditor.
    Bankrupt { covered: i64 },
}

/// What happened on one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// The roll, if the player rolled.
    pub dice: Option<DiceRoll>,
    pub eliminated: bool,
}

/// Plays a single turn for one player.
///
/// Rolls come from the game's dice stream unless queued with `with_rolls`.
pub struct TurnEngine<'a> {
    state: &'a mut GameState,
    player: PlayerId,
    phase: TurnPhase,
    dice: Option<DiceRoll>,
    offer: Option<PropertyId>,
    queued: SmallVec<[DiceRoll; 2]>,
}

impl<'a> TurnEngine<'a> {
    pub fn new(state: &'a mut GameState, player: PlayerId) -> Self {
        Self {
            state,
            player,
            phase: TurnPhase::Start,
            dice: None,
            offer: None,
            queued: SmallVec::new(),
        }
    }

    /// Use these rolls, in order, before drawing from the dice stream.
    #[must_use]
    pub fn with_rolls(mut self, rolls: &[DiceRoll]) -> Self {
        self.queued = rolls.iter().rev().copied().collect();
        self
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    /// Run phases until `EndTurn`.
    pub fn run(mut self) -> TurnSummary {
        while self.phase != TurnPhase::EndTurn {
            log::trace!("{}: {:?}", self.player, self.phase);
            self.phase = self.step();
        }
        self.state.turns_played += 1;

        TurnSummary {
            player: self.player,
            dice: self.dice,
            eliminated: self.state.player(self.player).eliminated,
        }
    }

    /// Execute the current phase and return the next one.
    pub fn step(&mut self) -> TurnPhase {
        match self.phase {
            TurnPhase::Start => {
                let player = self.state.player(self.player);
                if player.eliminated {
                    TurnPhase::EndTurn
                } else if player.jail.is_jailed() {
                    TurnPhase::InJail
                } else {
                    TurnPhase::RollDice
                }
            }
            TurnPhase::RollDice => {
                self.dice = Some(self.roll());
                TurnPhase::Move
            }
            TurnPhase::InJail => self.jail_turn(),
            TurnPhase::Move => {
                let Some(dice) = self.dice else {
                    return TurnPhase::RollDice;
                };
                move_by(self.state, self.player, u32::from(dice.total()));
                TurnPhase::ResolveSpace
            }
            TurnPhase::ResolveSpace => self.resolve_space(),
            TurnPhase::BuyDecision => {
                self.offer_purchase();
                TurnPhase::DevelopDecision
            }
            TurnPhase::DevelopDecision => {
                develop(self.state, self.player);
                TurnPhase::EndTurn
            }
            TurnPhase::EndTurn => TurnPhase::EndTurn,
        }
    }

    fn roll(&mut self) -> DiceRoll {
        self.queued
            .pop()
            .unwrap_or_else(|| DiceRoll::roll(&mut self.state.dice_rng))
    }

    /// Held card, then the forced fine, then a voluntary fine, then a roll.
    fn jail_turn(&mut self) -> TurnPhase {
        let rules = self.state.rules;
        let player = self.player;
        let JailStatus::Jailed { turns_served, failed_rolls } = self.state.player(player).jail else {
            return TurnPhase::RollDice;
        };

        if self.state.player(player).jail_cards > 0 {
            let state = self.state.player_mut(player);
            state.jail_cards -= 1;
            state.jail = JailStatus::Free;
            self.state.log(GameEvent::LeftJail { player, via: JailExit::Card });
            return TurnPhase::RollDice;
        }

        if failed_rolls >= rules.max_failed_jail_rolls {
            self.state.player_mut(player).jail = JailStatus::Free;
            self.state.log(GameEvent::LeftJail { player, via: JailExit::ForcedFine });
            return match settle_debt(self.state, player, None, rules.jail_fine) {
                Settlement::Paid => TurnPhase::RollDice,
                Settlement::Bankrupt { .. } => TurnPhase::EndTurn,
            };
        }

        let money = self.state.player(player).money;
        let strategy = Arc::clone(self.state.player(player).strategy());
        if money >= rules.jail_fine && strategy.pays_jail_fine(money, rules.jail_fine) {
            settle_debt(self.state, player, None, rules.jail_fine);
            self.state.player_mut(player).jail = JailStatus::Free;
            self.state.log(GameEvent::LeftJail { player, via: JailExit::Fine });
            return TurnPhase::RollDice;
        }

        let dice = self.roll();
        self.dice = Some(dice);
        if dice.is_doubles() {
            self.state.player_mut(player).jail = JailStatus::Free;
            self.state.log(GameEvent::LeftJail { player, via: JailExit::Doubles });
            return TurnPhase::Move;
        }

        let failed_rolls = failed_rolls + 1;
        self.state.player_mut(player).jail = JailStatus::Jailed {
            turns_served: turns_served + 1,
            failed_rolls,
        };
        self.state.log(GameEvent::StayedInJail { player, failed_rolls });
        TurnPhase::EndTurn
    }

    fn resolve_space(&mut self) -> TurnPhase {
        let player = self.player;
        let board = Arc::clone(self.state.board_arc());
        let position = self.state.player(player).position;

        let next = match board.space(position) {
            Space::Property(id) => match self.state.ownership.owner(*id) {
                None => {
                    self.offer = Some(*id);
                    TurnPhase::BuyDecision
                }
                Some(owner) if owner == player || self.state.player(owner).eliminated => {
                    TurnPhase::DevelopDecision
                }
                Some(owner) => {
                    let dice_total = self.dice.map_or(0, DiceRoll::total);
                    let due = rent_due(&board, &self.state.ownership, &self.state.ledger, *id, dice_total);
                    if due > 0 {
                        let paid = match settle_debt(self.state, player, Some(owner), due) {
                            Settlement::Paid => due,
                            Settlement::Bankrupt { covered } => covered,
                        };
                        self.state.log(GameEvent::RentPaid {
                            payer: player,
                            owner,
                            property: *id,
                            due,
                            paid,
                        });
                    }
                    TurnPhase::DevelopDecision
                }
            },
            Space::Tax { amount, .. } => {
                if let Settlement::Paid = settle_debt(self.state, player, None, *amount) {
                    self.state.log(GameEvent::TaxPaid { player, amount: *amount });
                }
                TurnPhase::DevelopDecision
            }
            Space::CommunityChest => self.draw_card(DeckKind::CommunityChest),
            Space::Chance => self.draw_card(DeckKind::Chance),
            Space::GoToJail => {
                self.state.send_to_jail(player);
                TurnPhase::DevelopDecision
            }
            Space::Go | Space::Jail | Space::FreeParking => TurnPhase::DevelopDecision,
        };

        if self.state.player(player).eliminated {
            TurnPhase::EndTurn
        } else {
            next
        }
    }

    fn draw_card(&mut self, kind: DeckKind) -> TurnPhase {
        let player = self.player;
        let state = &mut *self.state;
        let deck = match kind {
            DeckKind::CommunityChest => &mut state.community_chest,
            DeckKind::Chance => &mut state.chance,
        };
        let card = deck.draw(&mut state.card_rng);
        let deck = deck.kind();
        state.log(GameEvent::CardDrawn { player, deck, title: card.title });

        match card.effect {
            CardEffect::Collect(amount) => {
                state.player_mut(player).money += amount;
                TurnPhase::DevelopDecision
            }
            CardEffect::Pay(amount) => {
                settle_debt(state, player, None, amount);
                TurnPhase::DevelopDecision
            }
            CardEffect::PayEachPlayer(amount) => {
                let others: SmallVec<[PlayerId; 8]> = state.active_players().filter(|&p| p != player).collect();
                for other in others {
                    if let Settlement::Bankrupt { .. } = settle_debt(state, player, Some(other), amount) {
                        break;
                    }
                }
                TurnPhase::DevelopDecision
            }
            CardEffect::AdvanceTo(target) => {
                advance_to(state, player, target);
                TurnPhase::ResolveSpace
            }
            CardEffect::GoToJail => {
                state.send_to_jail(player);
                TurnPhase::DevelopDecision
            }
            CardEffect::GetOutOfJailFree => {
                state.player_mut(player).jail_cards += 1;
                TurnPhase::DevelopDecision
            }
        }
    }

    fn offer_purchase(&mut self) {
        let Some(id) = self.offer.take() else {
            return;
        };
        let player = self.player;
        if self.state.ownership.is_owned(id) {
            return;
        }

        let board = Arc::clone(self.state.board_arc());
        let property = board.property(id);
        let wants = consult(self.state, player, |strategy, view, rng| {
            strategy.decide_buy(property, view, rng)
        });
        if !wants {
            return;
        }

        match try_debit(self.state, player, property.price) {
            Ok(()) => {
                self.state.ownership.purchase(id, player);
                self.state.log(GameEvent::Purchased {
                    player,
                    property: id,
                    price: property.price,
                });
            }
            Err(err) => log::debug!("{player} declines {}: {err}", property.name),
        }
    }
}

/// Play the turn of `state.current`. Does not advance the turn pointer.
pub fn play_turn(state: &mut GameState) -> TurnSummary {
    let player = state.current;
    TurnEngine::new(state, player).run()
}

/// Hand the strategy a view of the state and the strategy RNG stream.
fn consult<R>(
    state: &mut GameState,
    player: PlayerId,
    decide: impl FnOnce(&dyn Strategy, &PlayerView<'_>, &mut GameRng) -> R,
) -> R {
    let board = Arc::clone(state.board_arc());
    let strategy = Arc::clone(state.player(player).strategy());
    let view = PlayerView {
        player,
        money: state.players[player].money,
        board: &board,
        ownership: &state.ownership,
        ledger: &state.ledger,
    };
    decide(strategy.as_ref(), &view, &mut state.strategy_rng)
}

/// Move forward `steps` spaces, paying salary once if GO is passed or hit.
///
/// Returns whether salary was paid.
pub fn move_by(state: &mut GameState, player: PlayerId, steps: u32) -> bool {
    let size = u32::from(BOARD_SIZE);
    let target = u32::from(state.player(player).position) + steps;
    state.player_mut(player).position = (target % size) as u8;
    let passed = target >= size;
    if passed {
        collect_salary(state, player);
    }
    passed
}

/// Move forward to `target`, paying salary if that wraps past GO.
pub fn advance_to(state: &mut GameState, player: PlayerId, target: u8) -> bool {
    let position = state.player(player).position;
    state.player_mut(player).position = target % BOARD_SIZE;
    let passed = target <= position;
    if passed {
        collect_salary(state, player);
    }
    passed
}

fn collect_salary(state: &mut GameState, player: PlayerId) {
    let salary = state.rules.go_salary;
    state.player_mut(player).money += salary;
    state.log(GameEvent::PassedGo { player, salary });
}

/// Take `amount` from a player who can cover it.
pub fn try_debit(state: &mut GameState, player: PlayerId, amount: i64) -> Result<()> {
    let available = state.player(player).money;
    if available < amount {
        return Err(Error::InsufficientFunds { needed: amount, available });
    }
    state.player_mut(player).money -= amount;
    Ok(())
}

/// Pay a debt to another player, or to the bank when `creditor` is `None`.
///
/// A debt the debtor cannot cover bankrupts them.
pub fn settle_debt(state: &mut GameState, debtor: PlayerId, creditor: Option<PlayerId>, amount: i64) -> Settlement {
    match try_debit(state, debtor, amount) {
        Ok(()) => {
            if let Some(creditor) = creditor {
                state.player_mut(creditor).money += amount;
            }
            Settlement::Paid
        }
        Err(err) => {
            log::debug!("{debtor} cannot pay ${amount}: {err}");
            let covered = state.player(debtor).money.clamp(0, amount);
            state.player_mut(debtor).money -= amount;
            if let Some(creditor) = creditor {
                state.player_mut(creditor).money += covered;
            }
            declare_bankruptcy(state, debtor, creditor);
            Settlement::Bankrupt { covered }
        }
    }
}

/// Eliminate a player and return everything they hold to the bank.
fn declare_bankruptcy(state: &mut GameState, player: PlayerId, creditor: Option<PlayerId>) {
    let released = state.ownership.release_all(player);
    for &id in &released {
        state.ledger.demolish(id);
    }

    let seat = state.player_mut(player);
    seat.money = 0;
    seat.eliminated = true;
    seat.jail = JailStatus::Free;
    seat.jail_cards = 0;

    log::debug!("{player} is bankrupt, {} properties released", released.len());
    state.log(GameEvent::Bankrupt {
        player,
        creditor,
        released: released.len(),
    });
}

/// Ask the strategy for a build plan and apply it until the first refusal.
pub fn develop(state: &mut GameState, player: PlayerId) {
    if state.player(player).eliminated {
        return;
    }

    let plan = consult(state, player, |strategy, view, rng| strategy.decide_develop(view, rng));
    for request in plan {
        let id = request.property;
        if state.ownership.owner(id) != Some(player) {
            log::debug!("{player} cannot build on {id}: not the owner");
            break;
        }

        let cost = state.board().property(id).house_cost;
        if let Err(err) = ensure_funds(state, player, cost) {
            log::debug!("{player} stops building: {err}");
            break;
        }

        match state.ledger.apply_build(&state.ownership, id) {
            Ok(kind) => {
                state.player_mut(player).money -= cost;
                state.log(GameEvent::Built { player, property: id, kind });
            }
            Err(denied) => {
                log::debug!("{player} stops building: {denied}");
                break;
            }
        }
    }
}

fn ensure_funds(state: &GameState, player: PlayerId, amount: i64) -> Result<()> {
    let available = state.player(player).money;
    if available < amount {
        Err(Error::InsufficientFunds { needed: amount, available })
    } else {
        Ok(())
    }
}
