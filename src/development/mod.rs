//! House and hotel development.
//!
//! - `BankInventory`: the shared pool of 32 houses and 12 hotels
//! - `DevelopmentLedger`: per-street levels, the build rules, and the bank

pub mod bank;
pub mod ledger;

pub use bank::{BankInventory, TOTAL_HOTELS, TOTAL_HOUSES};
pub use ledger::{BuildKind, Development, DevelopmentLedger, HOTEL_LEVEL};
