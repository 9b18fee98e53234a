//! Notable things that happen during a turn.
//!
//! The turn engine appends one `GameEvent` per purchase, payment, build,
//! jail transition, and bankruptcy to the game's event log. The log is an
//! `im::Vector`, so cloning a game state to inspect it stays cheap.

use serde::Serialize;

use crate::board::PropertyId;
use crate::cards::DeckKind;
use crate::core::PlayerId;
use crate::development::BuildKind;

/// How a player got out of jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum JailExit {
    Card,
    Fine,
    /// The fine after the last allowed failed roll.
    ForcedFine,
    Doubles,
}

/// A single logged event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum GameEvent {
    PassedGo {
        player: PlayerId,
        salary: i64,
    },
    Purchased {
        player: PlayerId,
        property: PropertyId,
        price: i64,
    },
    /// `paid` is what reached the owner; less than `due` on bankruptcy.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        property: PropertyId,
        due: i64,
        paid: i64,
    },
    TaxPaid {
        player: PlayerId,
        amount: i64,
    },
    CardDrawn {
        player: PlayerId,
        deck: DeckKind,
        title: &'static str,
    },
    Built {
        player: PlayerId,
        property: PropertyId,
        kind: BuildKind,
    },
    SentToJail {
        player: PlayerId,
    },
    LeftJail {
        player: PlayerId,
        via: JailExit,
    },
    StayedInJail {
        player: PlayerId,
        failed_rolls: u8,
    },
    Bankrupt {
        player: PlayerId,
        creditor: Option<PlayerId>,
        /// Properties returned to the bank unowned.
        released: usize,
    },
}

impl GameEvent {
    /// The player the event is about.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match *self {
            GameEvent::PassedGo { player, .. }
            | GameEvent::Purchased { player, .. }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::CardDrawn { player, .. }
            | GameEvent::Built { player, .. }
            | GameEvent::SentToJail { player }
            | GameEvent::LeftJail { player, .. }
            | GameEvent::StayedInJail { player, .. }
            | GameEvent::Bankrupt { player, .. } => player,
            GameEvent::RentPaid { payer, .. } => payer,
        }
    }
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::PassedGo { player, salary } => write!(f, "{player} passed GO, collected ${salary}"),
            GameEvent::Purchased { player, property, price } => {
                write!(f, "{player} bought {property} for ${price}")
            }
            GameEvent::RentPaid { payer, owner, property, due, paid } => {
                if paid == due {
                    write!(f, "{payer} paid ${paid} rent on {property} to {owner}")
                } else {
                    write!(f, "{payer} owed ${due} rent on {property} to {owner}, paid ${paid}")
                }
            }
            GameEvent::TaxPaid { player, amount } => write!(f, "{player} paid ${amount} tax"),
            GameEvent::CardDrawn { player, deck, title } => write!(f, "{player} drew {deck}: {title}"),
            GameEvent::Built { player, property, kind } => write!(f, "{player} built a {kind:?} on {property}"),
            GameEvent::SentToJail { player } => write!(f, "{player} went to jail"),
            GameEvent::LeftJail { player, via } => write!(f, "{player} left jail ({via:?})"),
            GameEvent::StayedInJail { player, failed_rolls } => {
                write!(f, "{player} stayed in jail ({failed_rolls} failed rolls)")
            }
            GameEvent::Bankrupt { player, creditor, released } => match creditor {
                Some(creditor) => write!(f, "{player} went bankrupt to {creditor}, {released} properties released"),
                None => write!(f, "{player} went bankrupt to the bank, {released} properties released"),
            },
        }
    }
}
