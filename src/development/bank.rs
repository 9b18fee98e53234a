//! The bank's finite pool of houses and hotels.

use serde::{Deserialize, Serialize};

/// Houses in a full bank.
pub const TOTAL_HOUSES: u32 = 32;

/// Hotels in a full bank.
pub const TOTAL_HOTELS: u32 = 12;

/// Buildings not currently standing on the board.
///
/// Counters never exceed the totals and never go below zero; every `take_*`
/// reports whether the stock was there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankInventory {
    houses: u32,
    hotels: u32,
}

impl BankInventory {
    /// A bank holding every building.
    #[must_use]
    pub const fn full() -> Self {
        Self {
            houses: TOTAL_HOUSES,
            hotels: TOTAL_HOTELS,
        }
    }

    #[must_use]
    pub const fn houses_available(&self) -> u32 {
        self.houses
    }

    #[must_use]
    pub const fn hotels_available(&self) -> u32 {
        self.hotels
    }

    pub(crate) fn take_house(&mut self) -> bool {
        if self.houses == 0 {
            return false;
        }
        self.houses -= 1;
        true
    }

    pub(crate) fn return_houses(&mut self, count: u32) {
        self.houses = (self.houses + count).min(TOTAL_HOUSES);
    }

    /// Swap four standing houses for a hotel.
    pub(crate) fn convert_to_hotel(&mut self) -> bool {
        if self.hotels == 0 {
            return false;
        }
        self.hotels -= 1;
        self.return_houses(4);
        true
    }

    pub(crate) fn return_hotel(&mut self) {
        self.hotels = (self.hotels + 1).min(TOTAL_HOTELS);
    }
}

impl Default for BankInventory {
    fn default() -> Self {
        Self::full()
    }
}
