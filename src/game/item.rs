//! Items lying on the board or carried by knights.

use std::fmt;

use crate::game::Coord;

/// Identifier of one of the fixed items.
///
/// Declaration order is the roster order, which also breaks priority ties at pickup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ItemId {
    /// The axe (`A`).
    Axe,
    /// The dagger (`D`).
    Dagger,
    /// The magic staff (`M`).
    MagicStaff,
    /// The helmet (`H`).
    Helmet,
}

/// Static properties of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemSpec {
    /// Tile the item starts on.
    pub start: Coord,
    /// Attack added to the base stat while equipped.
    pub attack_bonus: u8,
    /// Defense added to the base stat while equipped.
    pub defense_bonus: u8,
    /// Higher priority wins when several items share a tile.
    pub priority: u8,
}

impl ItemId {
    /// Every item, in roster order.
    pub const ALL: [ItemId; 4] = [
        ItemId::Axe,
        ItemId::Dagger,
        ItemId::MagicStaff,
        ItemId::Helmet,
    ];

    /// Lowercase name, also used as the output key.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            ItemId::Axe => "axe",
            ItemId::Dagger => "dagger",
            ItemId::MagicStaff => "magic_staff",
            ItemId::Helmet => "helmet",
        }
    }

    /// Single-letter roster code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            ItemId::Axe => 'A',
            ItemId::Dagger => 'D',
            ItemId::MagicStaff => 'M',
            ItemId::Helmet => 'H',
        }
    }

    /// Starting tile, bonuses and priority.
    #[must_use]
    pub const fn spec(self) -> ItemSpec {
        match self {
            ItemId::Axe => ItemSpec {
                start: Coord::new(2, 2),
                attack_bonus: 2,
                defense_bonus: 0,
                priority: 4,
            },
            ItemId::Dagger => ItemSpec {
                start: Coord::new(2, 5),
                attack_bonus: 1,
                defense_bonus: 0,
                priority: 2,
            },
            ItemId::MagicStaff => ItemSpec {
                start: Coord::new(5, 2),
                attack_bonus: 1,
                defense_bonus: 1,
                priority: 3,
            },
            ItemId::Helmet => ItemSpec {
                start: Coord::new(5, 5),
                attack_bonus: 0,
                defense_bonus: 1,
                priority: 1,
            },
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// State of a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Which item this is.
    pub id: ItemId,
    /// Current tile. Follows the holder while equipped.
    pub position: Coord,
    /// Attack bonus granted while equipped.
    pub attack_bonus: u8,
    /// Defense bonus granted while equipped.
    pub defense_bonus: u8,
    /// Pickup priority.
    pub priority: u8,
    /// True exactly while a live knight holds the item.
    pub equipped: bool,
}

impl Item {
    /// Create the item at its starting tile.
    #[must_use]
    pub const fn new(id: ItemId) -> Self {
        let spec = id.spec();
        Self {
            id,
            position: spec.start,
            attack_bonus: spec.attack_bonus,
            defense_bonus: spec.defense_bonus,
            priority: spec.priority,
            equipped: false,
        }
    }

    /// Lowercase item name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.id.name()
    }

    /// Check if a knight standing on `tile` could pick this item up.
    #[must_use]
    pub fn is_available_at(&self, tile: Coord) -> bool {
        !self.equipped && self.position == tile
    }

    /// Release the item where it currently lies.
    pub fn unequip(&mut self) {
        self.equipped = false;
    }
}
