//! Development ledger: houses and hotels per street, plus the bank.
//!
//! ## Rules enforced on every build
//!
//! 1. Only streets can be developed, and only by the holder of the whole color group.
//! 2. Even development: after the build, the highest and lowest levels in the
//!    group differ by at most one.
//! 3. The bank must hold the houses (and the hotel, for the 4 -> hotel step).
//!
//! `apply_build` re-runs every check at call time instead of trusting an
//! earlier `can_build`, so a stale plan can never push the ledger out of its
//! invariants.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::bank::BankInventory;
use crate::board::{Board, ColorGroup, Ownership, PropertyId};
use crate::core::{DevelopmentDenied, PlayerId};

/// Level of a hotel.
pub const HOTEL_LEVEL: u8 = 5;

/// Buildings on one street.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Development {
    #[default]
    Vacant,
    Houses(u8),
    Hotel,
}

impl Development {
    /// 0 for vacant, 1-4 for houses, 5 for a hotel.
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Development::Vacant => 0,
            Development::Houses(n) => n,
            Development::Hotel => HOTEL_LEVEL,
        }
    }

    #[must_use]
    pub const fn from_level(level: u8) -> Self {
        match level {
            0 => Development::Vacant,
            HOTEL_LEVEL => Development::Hotel,
            n => Development::Houses(n),
        }
    }

    /// Houses standing (a hotel counts as zero houses).
    #[must_use]
    pub const fn houses(self) -> u32 {
        match self {
            Development::Houses(n) => n as u32,
            _ => 0,
        }
    }

    #[must_use]
    pub const fn is_hotel(self) -> bool {
        matches!(self, Development::Hotel)
    }
}

/// What a single build step puts on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BuildKind {
    House,
    Hotel,
}

/// Per-game development state and bank inventory.
#[derive(Clone, Debug)]
pub struct DevelopmentLedger {
    board: Arc<Board>,
    levels: Vec<Development>,
    bank: BankInventory,
}

impl DevelopmentLedger {
    /// A ledger with a full bank and nothing built.
    #[must_use]
    pub fn new(board: Arc<Board>) -> Self {
        let levels = vec![Development::Vacant; board.property_count()];
        Self {
            board,
            levels,
            bank: BankInventory::full(),
        }
    }

    /// Restore the full bank and clear every street.
    pub fn reset(&mut self) {
        self.levels.fill(Development::Vacant);
        self.bank = BankInventory::full();
    }

    #[must_use]
    pub fn bank(&self) -> &BankInventory {
        &self.bank
    }

    #[must_use]
    pub fn development(&self, property: PropertyId) -> Development {
        self.levels[property.index()]
    }

    #[must_use]
    pub fn level(&self, property: PropertyId) -> u8 {
        self.development(property).level()
    }

    /// Lowest and highest level in a group, or `None` for an empty group.
    #[must_use]
    pub fn group_levels(&self, group: ColorGroup) -> Option<(u8, u8)> {
        let members = self.board.group(group);
        let min = members.iter().map(|&id| self.level(id)).min()?;
        let max = members.iter().map(|&id| self.level(id)).max()?;
        Some((min, max))
    }

    /// Check whether raising `property` by `increment` levels is allowed.
    ///
    /// Returns the kind of building the final step puts down.
    pub fn check_build(
        &self,
        ownership: &Ownership,
        property: PropertyId,
        increment: u8,
    ) -> Result<BuildKind, DevelopmentDenied> {
        if increment == 0 {
            return Err(DevelopmentDenied::ZeroIncrement);
        }

        let definition = self.board.property(property);
        if !definition.is_street() {
            return Err(DevelopmentDenied::NotAStreet(property));
        }

        let owner = ownership
            .owner(property)
            .ok_or(DevelopmentDenied::Unowned(property))?;
        let group = definition.group;
        if !ownership.holds_group(&self.board, owner, group) {
            return Err(DevelopmentDenied::NoMonopoly(group));
        }

        let current = self.level(property);
        let target = current.saturating_add(increment);
        if target > HOTEL_LEVEL {
            return Err(DevelopmentDenied::AtMaximum(property));
        }

        // Levels of the group as they would stand after the build.
        let after = self.board.group(group).iter().map(|&id| {
            if id == property {
                target
            } else {
                self.level(id)
            }
        });
        let (lowest, highest) = after.fold((u8::MAX, 0), |(lo, hi), l| (lo.min(l), hi.max(l)));
        if highest - lowest > 1 {
            return Err(DevelopmentDenied::Uneven {
                property,
                group,
                target,
                lowest,
            });
        }

        let houses_needed = u32::from(target.min(4) - current.min(4));
        if houses_needed > self.bank.houses_available() {
            return Err(DevelopmentDenied::HousesExhausted {
                needed: houses_needed,
                available: self.bank.houses_available(),
            });
        }

        if target == HOTEL_LEVEL {
            if self.bank.hotels_available() == 0 {
                return Err(DevelopmentDenied::HotelsExhausted);
            }
            Ok(BuildKind::Hotel)
        } else {
            Ok(BuildKind::House)
        }
    }

    /// Boolean form of `check_build`.
    #[must_use]
    pub fn can_build(&self, ownership: &Ownership, property: PropertyId, increment: u8) -> bool {
        self.check_build(ownership, property, increment).is_ok()
    }

    /// Raise `property` one level, updating the bank in the same step.
    pub fn apply_build(
        &mut self,
        ownership: &Ownership,
        property: PropertyId,
    ) -> Result<BuildKind, DevelopmentDenied> {
        let kind = self.check_build(ownership, property, 1)?;
        let slot = &mut self.levels[property.index()];

        match kind {
            BuildKind::House => {
                if !self.bank.take_house() {
                    return Err(DevelopmentDenied::HousesExhausted {
                        needed: 1,
                        available: 0,
                    });
                }
                *slot = Development::from_level(slot.level() + 1);
            }
            BuildKind::Hotel => {
                if !self.bank.convert_to_hotel() {
                    return Err(DevelopmentDenied::HotelsExhausted);
                }
                *slot = Development::Hotel;
            }
        }

        Ok(kind)
    }

    /// Clear a street and return its buildings to the bank.
    pub fn demolish(&mut self, property: PropertyId) -> Development {
        let previous = std::mem::take(&mut self.levels[property.index()]);
        match previous {
            Development::Hotel => self.bank.return_hotel(),
            other => self.bank.return_houses(other.houses()),
        }
        previous
    }

    /// Houses standing anywhere on the board.
    #[must_use]
    pub fn houses_standing(&self) -> u32 {
        self.levels.iter().map(|d| d.houses()).sum()
    }

    /// Hotels standing anywhere on the board.
    #[must_use]
    pub fn hotels_standing(&self) -> u32 {
        self.levels.iter().filter(|d| d.is_hotel()).count() as u32
    }

    /// (houses, hotels) standing on a player's holdings.
    #[must_use]
    pub fn buildings_of(&self, ownership: &Ownership, player: PlayerId) -> (u32, u32) {
        ownership.holdings(player).fold((0, 0), |(houses, hotels), id| {
            let d = self.development(id);
            (houses + d.houses(), hotels + u32::from(d.is_hotel()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::development::bank::{TOTAL_HOTELS, TOTAL_HOUSES};

    fn setup() -> (Arc<Board>, Ownership, DevelopmentLedger) {
        let board = Arc::new(Board::standard());
        let ownership = Ownership::new(&board);
        let ledger = DevelopmentLedger::new(Arc::clone(&board));
        (board, ownership, ledger)
    }

    fn give_group(board: &Board, ownership: &mut Ownership, group: ColorGroup, player: PlayerId) -> Vec<PropertyId> {
        let ids = board.group(group).to_vec();
        for &id in &ids {
            ownership.purchase(id, player);
        }
        ids
    }

    #[test]
    fn test_requires_monopoly() {
        let (board, mut ownership, ledger) = setup();
        let park = board.find("Park Place").unwrap().id;
        ownership.purchase(park, PlayerId::new(0));

        assert_eq!(
            ledger.check_build(&ownership, park, 1),
            Err(DevelopmentDenied::NoMonopoly(ColorGroup::DarkBlue))
        );
    }

    #[test]
    fn test_rejects_non_street_and_unowned() {
        let (board, ownership, ledger) = setup();
        let reading = board.find("Reading Railroad").unwrap().id;
        let baltic = board.find("Baltic Avenue").unwrap().id;

        assert_eq!(
            ledger.check_build(&ownership, reading, 1),
            Err(DevelopmentDenied::NotAStreet(reading))
        );
        assert_eq!(
            ledger.check_build(&ownership, baltic, 1),
            Err(DevelopmentDenied::Unowned(baltic))
        );
        assert_eq!(
            ledger.check_build(&ownership, baltic, 0),
            Err(DevelopmentDenied::ZeroIncrement)
        );
    }

    #[test]
    fn test_even_development() {
        let (board, mut ownership, mut ledger) = setup();
        let ids = give_group(&board, &mut ownership, ColorGroup::Brown, PlayerId::new(0));

        assert_eq!(ledger.apply_build(&ownership, ids[0]), Ok(BuildKind::House));
        let denied = ledger.apply_build(&ownership, ids[0]);
        assert!(matches!(denied, Err(DevelopmentDenied::Uneven { target: 2, lowest: 0, .. })));

        assert_eq!(ledger.apply_build(&ownership, ids[1]), Ok(BuildKind::House));
        assert_eq!(ledger.apply_build(&ownership, ids[0]), Ok(BuildKind::House));
        assert_eq!(ledger.group_levels(ColorGroup::Brown), Some((1, 2)));
    }

    #[test]
    fn test_multi_level_increment_check() {
        let (board, mut ownership, ledger) = setup();
        let ids = give_group(&board, &mut ownership, ColorGroup::Brown, PlayerId::new(0));
        assert!(ledger.can_build(&ownership, ids[0], 1));
        assert!(!ledger.can_build(&ownership, ids[0], 2));
    }

    #[test]
    fn test_hotel_conversion() {
        let (board, mut ownership, mut ledger) = setup();
        let ids = give_group(&board, &mut ownership, ColorGroup::DarkBlue, PlayerId::new(0));

        for _ in 0..4 {
            for &id in &ids {
                assert_eq!(ledger.apply_build(&ownership, id), Ok(BuildKind::House));
            }
        }
        assert_eq!(ledger.bank().houses_available(), TOTAL_HOUSES - 8);

        assert_eq!(ledger.apply_build(&ownership, ids[0]), Ok(BuildKind::Hotel));
        assert_eq!(ledger.development(ids[0]), Development::Hotel);
        assert_eq!(ledger.bank().houses_available(), TOTAL_HOUSES - 4);
        assert_eq!(ledger.bank().hotels_available(), TOTAL_HOTELS - 1);
        assert_eq!(
            ledger.apply_build(&ownership, ids[0]),
            Err(DevelopmentDenied::AtMaximum(ids[0]))
        );
        assert_eq!(ledger.buildings_of(&ownership, PlayerId::new(0)), (4, 1));
    }

    #[test]
    fn test_house_shortage() {
        let (board, mut ownership, mut ledger) = setup();
        let p0 = PlayerId::new(0);
        let mut streets = Vec::new();
        for group in [ColorGroup::Orange, ColorGroup::Red, ColorGroup::Yellow] {
            streets.extend(give_group(&board, &mut ownership, group, p0));
        }

        // Nine streets, four houses each would need 36; the bank runs out at 32.
        let mut built = 0;
        for _ in 0..4 {
            for &id in &streets {
                if ledger.apply_build(&ownership, id).is_ok() {
                    built += 1;
                }
            }
        }
        assert_eq!(built, TOTAL_HOUSES);
        assert_eq!(ledger.bank().houses_available(), 0);

        let short = streets.iter().copied().find(|&id| ledger.level(id) == 3).unwrap();
        assert_eq!(
            ledger.apply_build(&ownership, short),
            Err(DevelopmentDenied::HousesExhausted { needed: 1, available: 0 })
        );
    }

    #[test]
    fn test_demolish_returns_buildings() {
        let (board, mut ownership, mut ledger) = setup();
        let ids = give_group(&board, &mut ownership, ColorGroup::DarkBlue, PlayerId::new(0));
        for _ in 0..4 {
            for &id in &ids {
                ledger.apply_build(&ownership, id).unwrap();
            }
        }
        ledger.apply_build(&ownership, ids[1]).unwrap();

        assert_eq!(ledger.demolish(ids[1]), Development::Hotel);
        assert_eq!(ledger.demolish(ids[0]), Development::Houses(4));
        assert_eq!(ledger.bank(), &BankInventory::full());
        assert_eq!(ledger.houses_standing(), 0);
        assert_eq!(ledger.hotels_standing(), 0);
    }

    #[test]
    fn test_reset_restores_bank_and_levels() {
        let (board, mut ownership, mut ledger) = setup();
        let greens = give_group(&board, &mut ownership, ColorGroup::Green, PlayerId::new(0));
        let browns = give_group(&board, &mut ownership, ColorGroup::Brown, PlayerId::new(1));
        for _ in 0..5 {
            for &id in &greens {
                ledger.apply_build(&ownership, id).unwrap();
            }
        }
        ledger.apply_build(&ownership, browns[0]).unwrap();
        assert_eq!(ledger.bank().hotels_available(), TOTAL_HOTELS - 3);
        assert_eq!(ledger.bank().houses_available(), TOTAL_HOUSES - 1);

        ledger.reset();

        assert_eq!(ledger.bank().houses_available(), TOTAL_HOUSES);
        assert_eq!(ledger.bank().hotels_available(), TOTAL_HOTELS);
        assert!(board.properties().all(|p| ledger.level(p.id) == 0));
    }
}
