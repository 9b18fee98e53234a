//! Rent calculation.
//!
//! A pure function of the board state and the dice: no mutation, no
//! randomness. Utilities take the dice total of the roll that moved the
//! payer.

use crate::board::{Board, Ownership, PropertyId, PropertyKind};
use crate::development::{DevelopmentLedger, HOTEL_LEVEL};

/// Base railroad rent with a single railroad held.
pub const RAILROAD_BASE_RENT: i64 = 25;

/// Rent owed to the owner of `property`.
///
/// Returns 0 for unowned or mortgaged properties.
#[must_use]
pub fn rent_due(
    board: &Board,
    ownership: &Ownership,
    ledger: &DevelopmentLedger,
    property: PropertyId,
    dice_total: u8,
) -> i64 {
    let Some(deed) = ownership.deed(property) else {
        return 0;
    };
    if deed.mortgaged {
        return 0;
    }

    let definition = board.property(property);
    let held_in_group = ownership.count_in_group(board, deed.owner, definition.group);

    match definition.kind {
        PropertyKind::Street => {
            let level = ledger.level(property);
            if level == 0 {
                let base = definition.rents[0];
                if ownership.holds_group(board, deed.owner, definition.group) {
                    base * 2
                } else {
                    base
                }
            } else {
                definition.rents[usize::from(level.min(HOTEL_LEVEL))]
            }
        }
        PropertyKind::Railroad => railroad_rent(held_in_group),
        PropertyKind::Utility => utility_rent(held_in_group, dice_total),
    }
}

/// `25 * 2^(held - 1)`: 25, 50, 100, 200.
#[must_use]
pub fn railroad_rent(railroads_held: usize) -> i64 {
    match railroads_held {
        0 => 0,
        n => RAILROAD_BASE_RENT << (n - 1),
    }
}

/// Dice total times 4 with one utility, times 10 with both.
#[must_use]
pub fn utility_rent(utilities_held: usize, dice_total: u8) -> i64 {
    let multiplier = match utilities_held {
        0 => 0,
        1 => 4,
        _ => 10,
    };
    i64::from(dice_total) * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ColorGroup;
    use crate::core::PlayerId;
    use std::sync::Arc;

    struct Fixture {
        board: Arc<Board>,
        ownership: Ownership,
        ledger: DevelopmentLedger,
    }

    impl Fixture {
        fn new() -> Self {
            let board = Arc::new(Board::standard());
            Self {
                ownership: Ownership::new(&board),
                ledger: DevelopmentLedger::new(Arc::clone(&board)),
                board,
            }
        }

        fn id(&self, name: &str) -> PropertyId {
            self.board.find(name).unwrap().id
        }

        fn rent(&self, name: &str, dice: u8) -> i64 {
            rent_due(&self.board, &self.ownership, &self.ledger, self.id(name), dice)
        }
    }

    #[test]
    fn test_unowned_is_free() {
        let f = Fixture::new();
        assert_eq!(f.rent("Boardwalk", 7), 0);
    }

    #[test]
    fn test_street_base_and_monopoly_bonus() {
        let mut f = Fixture::new();
        let p0 = PlayerId::new(0);
        f.ownership.purchase(f.id("Boardwalk"), p0);
        assert_eq!(f.rent("Boardwalk", 7), 50);

        f.ownership.purchase(f.id("Park Place"), p0);
        assert_eq!(f.rent("Boardwalk", 7), 100);
        assert_eq!(f.rent("Park Place", 7), 70);
    }

    #[test]
    fn test_street_tiers_and_hotel() {
        let mut f = Fixture::new();
        let p0 = PlayerId::new(0);
        let ids = f.board.group(ColorGroup::DarkBlue).to_vec();
        for &id in &ids {
            f.ownership.purchase(id, p0);
        }

        let expected = [200, 600, 1400, 1700];
        for level in 0..4 {
            for &id in &ids {
                f.ledger.apply_build(&f.ownership, id).unwrap();
            }
            assert_eq!(f.rent("Boardwalk", 7), expected[level]);
        }

        let boardwalk = f.id("Boardwalk");
        f.ledger.apply_build(&f.ownership, boardwalk).unwrap();
        assert_eq!(f.rent("Boardwalk", 7), 2000);
    }

    #[test]
    fn test_railroad_rent_table() {
        let mut f = Fixture::new();
        let p0 = PlayerId::new(0);
        let railroads = f.board.group(ColorGroup::Railroad).to_vec();

        let mut rents = Vec::new();
        for &id in &railroads {
            f.ownership.purchase(id, p0);
            rents.push(rent_due(&f.board, &f.ownership, &f.ledger, railroads[0], 7));
        }
        assert_eq!(rents, vec![25, 50, 100, 200]);
    }

    #[test]
    fn test_railroad_counts_only_owners_holdings() {
        let mut f = Fixture::new();
        f.ownership.purchase(f.id("Reading Railroad"), PlayerId::new(0));
        f.ownership.purchase(f.id("B&O Railroad"), PlayerId::new(1));
        assert_eq!(f.rent("Reading Railroad", 7), 25);
    }

    #[test]
    fn test_utility_rent() {
        let mut f = Fixture::new();
        let p0 = PlayerId::new(0);
        f.ownership.purchase(f.id("Electric Company"), p0);
        assert_eq!(f.rent("Electric Company", 9), 36);

        f.ownership.purchase(f.id("Water Works"), p0);
        assert_eq!(f.rent("Electric Company", 9), 90);
    }

    #[test]
    fn test_mortgaged_charges_nothing() {
        let mut f = Fixture::new();
        let reading = f.id("Reading Railroad");
        f.ownership.purchase(reading, PlayerId::new(0));
        f.ownership.set_mortgaged(reading, true);
        assert_eq!(f.rent("Reading Railroad", 7), 0);
    }

    #[test]
    fn test_railroad_rent_helper() {
        assert_eq!(railroad_rent(0), 0);
        assert_eq!(railroad_rent(1), 25);
        assert_eq!(railroad_rent(4), 200);
    }
}
