//! Property catalog: static definitions of every board space.
//!
//! The catalog is built once and never mutated afterwards. Games share it
//! through an `Arc<Board>`, so any number of games can run side by side
//! against the same catalog.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use crate::core::ConfigError;

/// Number of spaces around the board.
pub const BOARD_SIZE: u8 = 40;

/// Position of the GO space.
pub const GO_POSITION: u8 = 0;

/// Position of the jail space.
pub const JAIL_POSITION: u8 = 10;

/// Index of a property in the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PropertyId(pub u8);

impl PropertyId {
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Property({})", self.0)
    }
}

/// Development category of a property.
///
/// Railroads and utilities have their own groups so that every property
/// belongs to exactly one; only the eight street colors can be developed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorGroup {
    Brown,
    LightBlue,
    Pink,
    Orange,
    Red,
    Yellow,
    Green,
    DarkBlue,
    Railroad,
    Utility,
}

impl ColorGroup {
    /// The eight street colors, cheapest first.
    pub const STREETS: [ColorGroup; 8] = [
        ColorGroup::Brown,
        ColorGroup::LightBlue,
        ColorGroup::Pink,
        ColorGroup::Orange,
        ColorGroup::Red,
        ColorGroup::Yellow,
        ColorGroup::Green,
        ColorGroup::DarkBlue,
    ];

    #[must_use]
    pub const fn is_street(self) -> bool {
        !matches!(self, ColorGroup::Railroad | ColorGroup::Utility)
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ColorGroup::Brown => "brown",
            ColorGroup::LightBlue => "light_blue",
            ColorGroup::Pink => "pink",
            ColorGroup::Orange => "orange",
            ColorGroup::Red => "red",
            ColorGroup::Yellow => "yellow",
            ColorGroup::Green => "green",
            ColorGroup::DarkBlue => "dark_blue",
            ColorGroup::Railroad => "railroad",
            ColorGroup::Utility => "utility",
        }
    }
}

impl std::fmt::Display for ColorGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorGroup {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorGroup::STREETS
            .iter()
            .chain([ColorGroup::Railroad, ColorGroup::Utility].iter())
            .copied()
            .find(|group| group.name() == s)
            .ok_or_else(|| ConfigError::UnknownColor(s.to_string()))
    }
}

/// Rent model of a property.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PropertyKind {
    Street,
    Railroad,
    Utility,
}

/// Static definition of a purchasable property.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub name: String,
    pub position: u8,
    pub price: i64,
    /// Rent by development level: base, 1-4 houses, hotel. Only streets use
    /// more than the first entry.
    pub rents: [i64; 6],
    pub group: ColorGroup,
    pub kind: PropertyKind,
    pub mortgage_value: i64,
    /// Cost of one house, also charged for the hotel conversion. Zero for
    /// railroads and utilities.
    pub house_cost: i64,
}

impl Property {
    #[must_use]
    pub fn is_street(&self) -> bool {
        self.kind == PropertyKind::Street
    }
}

/// One of the 40 board positions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Space {
    Go,
    Property(PropertyId),
    Tax { name: String, amount: i64 },
    CommunityChest,
    Chance,
    /// Just visiting. Jailed players also sit here.
    Jail,
    FreeParking,
    GoToJail,
}

/// The full board: spaces in position order plus the property catalog.
#[derive(Clone, Debug)]
pub struct Board {
    spaces: Vec<Space>,
    properties: Vec<Property>,
    groups: FxHashMap<ColorGroup, SmallVec<[PropertyId; 4]>>,
}

impl Board {
    /// The standard 40-space board.
    #[must_use]
    pub fn standard() -> Self {
        use ColorGroup::*;

        let mut builder = CatalogBuilder::default();
        builder.street("Mediterranean Avenue", 1, 60, [2, 10, 30, 90, 160, 250], Brown, 50);
        builder.street("Baltic Avenue", 3, 60, [4, 20, 60, 180, 320, 450], Brown, 50);
        builder.special("Reading Railroad", 5, 200, PropertyKind::Railroad);
        builder.street("Oriental Avenue", 6, 100, [6, 30, 90, 270, 400, 550], LightBlue, 50);
        builder.street("Vermont Avenue", 8, 100, [6, 30, 90, 270, 400, 550], LightBlue, 50);
        builder.street("Connecticut Avenue", 9, 120, [8, 40, 100, 300, 450, 600], LightBlue, 50);
        builder.street("St. Charles Place", 11, 140, [10, 50, 150, 450, 625, 750], Pink, 100);
        builder.special("Electric Company", 12, 150, PropertyKind::Utility);
        builder.street("States Avenue", 13, 140, [10, 50, 150, 450, 625, 750], Pink, 100);
        builder.street("Virginia Avenue", 14, 160, [12, 60, 180, 500, 700, 900], Pink, 100);
        builder.special("Pennsylvania Railroad", 15, 200, PropertyKind::Railroad);
        builder.street("St. James Place", 16, 180, [14, 70, 200, 550, 750, 950], Orange, 100);
        builder.street("Tennessee Avenue", 18, 180, [14, 70, 200, 550, 750, 950], Orange, 100);
        builder.street("New York Avenue", 19, 200, [16, 80, 220, 600, 800, 1000], Orange, 100);
        builder.street("Kentucky Avenue", 21, 220, [18, 90, 250, 700, 875, 1050], Red, 150);
        builder.street("Indiana Avenue", 23, 220, [18, 90, 250, 700, 875, 1050], Red, 150);
        builder.street("Illinois Avenue", 24, 240, [20, 100, 300, 750, 925, 1100], Red, 150);
        builder.special("B&O Railroad", 25, 200, PropertyKind::Railroad);
        builder.street("Atlantic Avenue", 26, 260, [22, 110, 330, 800, 975, 1150], Yellow, 150);
        builder.street("Ventnor Avenue", 27, 260, [22, 110, 330, 800, 975, 1150], Yellow, 150);
        builder.special("Water Works", 28, 150, PropertyKind::Utility);
        builder.street("Marvin Gardens", 29, 280, [24, 120, 360, 850, 1025, 1200], Yellow, 150);
        builder.street("Pacific Avenue", 31, 300, [26, 130, 390, 900, 1100, 1275], Green, 200);
        builder.street("North Carolina Avenue", 32, 300, [26, 130, 390, 900, 1100, 1275], Green, 200);
        builder.street("Pennsylvania Avenue", 34, 320, [28, 150, 450, 1000, 1200, 1400], Green, 200);
        builder.special("Short Line Railroad", 35, 200, PropertyKind::Railroad);
        builder.street("Park Place", 37, 350, [35, 175, 500, 1100, 1300, 1500], DarkBlue, 200);
        builder.street("Boardwalk", 39, 400, [50, 200, 600, 1400, 1700, 2000], DarkBlue, 200);

        let mut spaces = vec![Space::FreeParking; BOARD_SIZE as usize];
        spaces[GO_POSITION as usize] = Space::Go;
        for pos in [2, 17, 33] {
            spaces[pos] = Space::CommunityChest;
        }
        for pos in [7, 22, 36] {
            spaces[pos] = Space::Chance;
        }
        spaces[4] = Space::Tax { name: "Income Tax".to_string(), amount: 200 };
        spaces[38] = Space::Tax { name: "Luxury Tax".to_string(), amount: 100 };
        spaces[JAIL_POSITION as usize] = Space::Jail;
        spaces[30] = Space::GoToJail;
        for property in &builder.properties {
            spaces[property.position as usize] = Space::Property(property.id);
        }

        Self::from_parts(spaces, builder.properties)
    }

    fn from_parts(spaces: Vec<Space>, properties: Vec<Property>) -> Self {
        let mut groups: FxHashMap<ColorGroup, SmallVec<[PropertyId; 4]>> = FxHashMap::default();
        for property in &properties {
            groups.entry(property.group).or_default().push(property.id);
        }
        Self { spaces, properties, groups }
    }

    /// Number of spaces.
    #[must_use]
    pub fn len(&self) -> u8 {
        self.spaces.len() as u8
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }

    /// The space at a position. Positions wrap around the board.
    #[must_use]
    pub fn space(&self, position: u8) -> &Space {
        &self.spaces[position as usize % self.spaces.len()]
    }

    /// Look up a property definition.
    ///
    /// Panics on an id that did not come from this board.
    #[must_use]
    pub fn property(&self, id: PropertyId) -> &Property {
        &self.properties[id.index()]
    }

    /// The property at a position, if the space is one.
    #[must_use]
    pub fn property_at(&self, position: u8) -> Option<&Property> {
        match self.space(position) {
            Space::Property(id) => Some(self.property(*id)),
            _ => None,
        }
    }

    /// Every property, in board order.
    pub fn properties(&self) -> impl Iterator<Item = &Property> {
        self.properties.iter()
    }

    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// Members of a group, in board order.
    #[must_use]
    pub fn group(&self, group: ColorGroup) -> &[PropertyId] {
        self.groups.get(&group).map(|ids| ids.as_slice()).unwrap_or(&[])
    }

    /// Find a property by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

#[derive(Default)]
struct CatalogBuilder {
    properties: Vec<Property>,
}

impl CatalogBuilder {
    fn next_id(&self) -> PropertyId {
        PropertyId::new(self.properties.len() as u8)
    }

    fn street(
        &mut self,
        name: &str,
        position: u8,
        price: i64,
        rents: [i64; 6],
        group: ColorGroup,
        house_cost: i64,
    ) {
        self.properties.push(Property {
            id: self.next_id(),
            name: name.to_string(),
            position,
            price,
            rents,
            group,
            kind: PropertyKind::Street,
            mortgage_value: price / 2,
            house_cost,
        });
    }

    fn special(&mut self, name: &str, position: u8, price: i64, kind: PropertyKind) {
        let (group, base) = match kind {
            PropertyKind::Railroad => (ColorGroup::Railroad, 25),
            _ => (ColorGroup::Utility, 0),
        };
        self.properties.push(Property {
            id: self.next_id(),
            name: name.to_string(),
            position,
            price,
            rents: [base, 0, 0, 0, 0, 0],
            group,
            kind,
            mortgage_value: price / 2,
            house_cost: 0,
        });
    }
}
