//! Knight state and movement.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::GameError;
use crate::game::{Coord, Direction, Item, ItemId};

/// Attack and defense of a knight with no item.
pub const BASE_STAT: u8 = 1;

/// Identifier of one of the fixed knights.
///
/// Declaration order is the roster order used when resolving battles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KnightId {
    /// The red knight (`R`).
    Red,
    /// The blue knight (`B`).
    Blue,
    /// The green knight (`G`).
    Green,
    /// The yellow knight (`Y`).
    Yellow,
}

impl KnightId {
    /// Every knight, in roster order.
    pub const ALL: [KnightId; 4] = [
        KnightId::Red,
        KnightId::Blue,
        KnightId::Green,
        KnightId::Yellow,
    ];

    /// Single-letter code used in move files.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            KnightId::Red => 'R',
            KnightId::Blue => 'B',
            KnightId::Green => 'G',
            KnightId::Yellow => 'Y',
        }
    }

    /// Lowercase color, also used as the output key.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            KnightId::Red => "red",
            KnightId::Blue => "blue",
            KnightId::Green => "green",
            KnightId::Yellow => "yellow",
        }
    }

    /// Starting corner.
    #[must_use]
    pub const fn start(self) -> Coord {
        match self {
            KnightId::Red => Coord::new(0, 0),
            KnightId::Blue => Coord::new(7, 0),
            KnightId::Green => Coord::new(7, 7),
            KnightId::Yellow => Coord::new(0, 7),
        }
    }
}

impl fmt::Display for KnightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for KnightId {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "R" => Ok(KnightId::Red),
            "B" => Ok(KnightId::Blue),
            "G" => Ok(KnightId::Green),
            "Y" => Ok(KnightId::Yellow),
            other => Err(GameError::InvalidKnight(other.to_string())),
        }
    }
}

/// Lifecycle of a knight. `Dead` and `Drowned` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum KnightStatus {
    /// On the board and able to act.
    Live,
    /// Lost a fight. Keeps its last position.
    Dead,
    /// Stepped off the board. Has no position.
    Drowned,
}

impl KnightStatus {
    /// Output spelling of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            KnightStatus::Live => "LIVE",
            KnightStatus::Dead => "DEAD",
            KnightStatus::Drowned => "DROWNED",
        }
    }
}

impl fmt::Display for KnightStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// What a single step did to a knight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// The knight was not live, nothing changed.
    Ignored,
    /// The knight moved to a new tile.
    Moved {
        /// Tile before the step.
        from: Coord,
        /// Tile after the step.
        to: Coord,
    },
    /// The knight stepped off the board.
    Drowned {
        /// Tile the knight stood on before its last in-bounds step.
        last_valid: Coord,
        /// Item the knight was holding, now to be left on `last_valid`.
        dropped: Option<ItemId>,
    },
}

/// State for a single knight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Knight {
    /// Which knight this is.
    pub id: KnightId,
    /// Current tile. `None` once drowned.
    pub position: Option<Coord>,
    /// Lifecycle state.
    pub status: KnightStatus,
    /// Attack stat.
    pub attack: u8,
    /// Defense stat.
    pub defense: u8,
    /// Item held, if any.
    pub item: Option<ItemId>,
    /// Tile occupied before the most recent in-bounds step.
    pub last_valid_position: Coord,
}

impl Knight {
    /// Create a live knight on its starting corner.
    #[must_use]
    pub const fn new(id: KnightId) -> Self {
        let start = id.start();
        Self {
            id,
            position: Some(start),
            status: KnightStatus::Live,
            attack: BASE_STAT,
            defense: BASE_STAT,
            item: None,
            last_valid_position: start,
        }
    }

    /// Check if the knight can still act.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.status == KnightStatus::Live
    }

    /// Check if the knight is live and standing on `tile`.
    #[must_use]
    pub fn is_live_at(&self, tile: Coord) -> bool {
        self.is_live() && self.position == Some(tile)
    }

    /// Move one tile in `direction`.
    ///
    /// Non-live knights ignore the step. Stepping off the board drowns the
    /// knight: stats drop to zero, the position is cleared, and the held item
    /// (if any) is handed back in [`Step::Drowned`] for the caller to place.
    /// `last_valid_position` only advances on in-bounds steps, so a drowned
    /// knight's item lands on the tile it stood on before its last good move.
    pub fn step(&mut self, direction: Direction) -> Step {
        let Some(from) = self.position.filter(|_| self.is_live()) else {
            return Step::Ignored;
        };

        if let Some(to) = from.step(direction) {
            self.last_valid_position = from;
            self.position = Some(to);
            Step::Moved { from, to }
        } else {
            let dropped = self.item.take();
            self.status = KnightStatus::Drowned;
            self.attack = 0;
            self.defense = 0;
            self.position = None;
            Step::Drowned {
                last_valid: self.last_valid_position,
                dropped,
            }
        }
    }

    /// Take hold of `item`, replacing base stats with the item's bonuses.
    ///
    /// The caller is responsible for marking the item as equipped.
    pub fn equip(&mut self, item: &Item) {
        self.attack = BASE_STAT + item.attack_bonus;
        self.defense = BASE_STAT + item.defense_bonus;
        self.item = Some(item.id);
    }

    /// Kill the knight in combat. The position is kept.
    ///
    /// Returns the item the knight was holding so the caller can release it.
    pub fn die(&mut self) -> Option<ItemId> {
        self.status = KnightStatus::Dead;
        self.attack = 0;
        self.defense = 0;
        self.item.take()
    }
}
