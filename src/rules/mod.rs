//! Game rules: rent, the turn engine, and the event log entries it writes.
//!
//! - `rent`: pure rent calculation
//! - `engine`: the per-turn state machine, payments, and bankruptcy
//! - `event`: `GameEvent`, one entry per notable thing that happened

pub mod engine;
pub mod event;
pub mod rent;

pub use engine::{
    advance_to, develop, move_by, play_turn, settle_debt, try_debit, DiceRoll, Settlement, TurnEngine,
    TurnPhase, TurnSummary,
};
pub use event::{GameEvent, JailExit};
pub use rent::{railroad_rent, rent_due, utility_rent, RAILROAD_BASE_RENT};
