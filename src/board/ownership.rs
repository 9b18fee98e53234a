//! Ownership map: who holds each property.
//!
//! Every property has exactly one owner or none. The map changes only through
//! `purchase` and `release_all` (bankruptcy).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::catalog::{Board, ColorGroup, PropertyId};
use crate::core::PlayerId;

/// Title to a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deed {
    pub owner: PlayerId,
    /// Mortgaged properties charge no rent. The game itself never mortgages.
    pub mortgaged: bool,
}

/// Property -> deed, indexed by `PropertyId`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ownership {
    deeds: Vec<Option<Deed>>,
}

impl Ownership {
    /// Everything unowned.
    #[must_use]
    pub fn new(board: &Board) -> Self {
        Self {
            deeds: vec![None; board.property_count()],
        }
    }

    #[must_use]
    pub fn deed(&self, property: PropertyId) -> Option<&Deed> {
        self.deeds[property.index()].as_ref()
    }

    #[must_use]
    pub fn owner(&self, property: PropertyId) -> Option<PlayerId> {
        self.deed(property).map(|d| d.owner)
    }

    #[must_use]
    pub fn is_owned(&self, property: PropertyId) -> bool {
        self.deeds[property.index()].is_some()
    }

    /// Record a purchase. Returns `false` and changes nothing if the property
    /// already has an owner.
    pub fn purchase(&mut self, property: PropertyId, buyer: PlayerId) -> bool {
        let slot = &mut self.deeds[property.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(Deed { owner: buyer, mortgaged: false });
        true
    }

    /// Set the mortgaged flag on an owned property. Returns `false` if unowned.
    pub fn set_mortgaged(&mut self, property: PropertyId, mortgaged: bool) -> bool {
        match self.deeds[property.index()].as_mut() {
            Some(deed) => {
                deed.mortgaged = mortgaged;
                true
            }
            None => false,
        }
    }

    /// Return every property held by `player` to the bank.
    pub fn release_all(&mut self, player: PlayerId) -> SmallVec<[PropertyId; 8]> {
        let mut released = SmallVec::new();
        for (index, slot) in self.deeds.iter_mut().enumerate() {
            if slot.is_some_and(|d| d.owner == player) {
                *slot = None;
                released.push(PropertyId::new(index as u8));
            }
        }
        released
    }

    /// Properties held by `player`, in board order.
    pub fn holdings(&self, player: PlayerId) -> impl Iterator<Item = PropertyId> + '_ {
        self.deeds
            .iter()
            .enumerate()
            .filter(move |(_, d)| d.is_some_and(|d| d.owner == player))
            .map(|(i, _)| PropertyId::new(i as u8))
    }

    #[must_use]
    pub fn holdings_count(&self, player: PlayerId) -> usize {
        self.holdings(player).count()
    }

    /// How many members of `group` the player holds.
    #[must_use]
    pub fn count_in_group(&self, board: &Board, player: PlayerId, group: ColorGroup) -> usize {
        board
            .group(group)
            .iter()
            .filter(|&&id| self.owner(id) == Some(player))
            .count()
    }

    /// Whether the player holds every member of `group`.
    #[must_use]
    pub fn holds_group(&self, board: &Board, player: PlayerId, group: ColorGroup) -> bool {
        let members = board.group(group);
        !members.is_empty() && members.iter().all(|&id| self.owner(id) == Some(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(board: &Board, name: &str) -> PropertyId {
        board.find(name).map(|p| p.id).unwrap()
    }

    #[test]
    fn test_purchase_is_exclusive() {
        let board = Board::standard();
        let mut ownership = Ownership::new(&board);
        let boardwalk = id_of(&board, "Boardwalk");

        assert!(ownership.purchase(boardwalk, PlayerId::new(0)));
        assert!(!ownership.purchase(boardwalk, PlayerId::new(1)));
        assert_eq!(ownership.owner(boardwalk), Some(PlayerId::new(0)));
    }

    #[test]
    fn test_holds_group() {
        let board = Board::standard();
        let mut ownership = Ownership::new(&board);
        let p0 = PlayerId::new(0);

        ownership.purchase(id_of(&board, "Park Place"), p0);
        assert!(!ownership.holds_group(&board, p0, ColorGroup::DarkBlue));

        ownership.purchase(id_of(&board, "Boardwalk"), p0);
        assert!(ownership.holds_group(&board, p0, ColorGroup::DarkBlue));
        assert_eq!(ownership.count_in_group(&board, p0, ColorGroup::DarkBlue), 2);
    }

    #[test]
    fn test_release_all() {
        let board = Board::standard();
        let mut ownership = Ownership::new(&board);
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        ownership.purchase(id_of(&board, "Baltic Avenue"), p0);
        ownership.purchase(id_of(&board, "Reading Railroad"), p0);
        ownership.purchase(id_of(&board, "Boardwalk"), p1);

        let released = ownership.release_all(p0);
        assert_eq!(released.len(), 2);
        assert_eq!(ownership.holdings_count(p0), 0);
        assert_eq!(ownership.holdings_count(p1), 1);
    }

    #[test]
    fn test_mortgage_flag() {
        let board = Board::standard();
        let mut ownership = Ownership::new(&board);
        let baltic = id_of(&board, "Baltic Avenue");

        assert!(!ownership.set_mortgaged(baltic, true));
        ownership.purchase(baltic, PlayerId::new(0));
        assert!(ownership.set_mortgaged(baltic, true));
        assert!(ownership.deed(baltic).unwrap().mortgaged);
    }
}
