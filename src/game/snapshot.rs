//! Final-state projection.
//!
//! Knights serialize as `[position, status, item, attack, defense]` and items
//! as `[position, equipped]`, keyed by lowercase color or item name.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::game::{Coord, Item, ItemId, Knight, KnightId, KnightStatus};

/// Projected state of one knight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightState {
    /// Tile, or `None` once drowned.
    pub position: Option<Coord>,
    /// Lifecycle state.
    pub status: KnightStatus,
    /// Name of the held item.
    pub item: Option<&'static str>,
    /// Attack stat.
    pub attack: u8,
    /// Defense stat.
    pub defense: u8,
}

impl From<&Knight> for KnightState {
    fn from(knight: &Knight) -> Self {
        Self {
            position: knight.position,
            status: knight.status,
            item: knight.item.map(ItemId::name),
            attack: knight.attack,
            defense: knight.defense,
        }
    }
}

impl Serialize for KnightState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (
            self.position,
            self.status,
            self.item,
            self.attack,
            self.defense,
        )
            .serialize(serializer)
    }
}

/// Projected state of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemState {
    /// Tile the item lies on or is carried on.
    pub position: Coord,
    /// Whether a live knight holds it.
    pub equipped: bool,
}

impl From<&Item> for ItemState {
    fn from(item: &Item) -> Self {
        Self {
            position: item.position,
            equipped: item.equipped,
        }
    }
}

impl Serialize for ItemState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        (self.position, self.equipped).serialize(serializer)
    }
}

/// Projected state of any entity on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EntityState {
    /// A knight entry.
    Knight(KnightState),
    /// An item entry.
    Item(ItemState),
}

/// The end-of-run mapping handed to the state sink.
///
/// Entries keep roster order (knights, then items) but keys are unique, so
/// consumers may treat it as an unordered map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FinalState {
    entries: Vec<(&'static str, EntityState)>,
}

impl FinalState {
    /// Project the given knights and items.
    #[must_use]
    pub fn capture(knights: &[Knight], items: &[Item]) -> Self {
        let knights = knights
            .iter()
            .map(|knight| (knight.id.color(), EntityState::Knight(knight.into())));
        let items = items
            .iter()
            .map(|item| (item.name(), EntityState::Item(item.into())));

        Self {
            entries: knights.chain(items).collect(),
        }
    }

    /// Look up an entry by output key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&EntityState> {
        self.entries
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, state)| state)
    }

    /// Look up a knight entry.
    #[must_use]
    pub fn knight(&self, id: KnightId) -> Option<&KnightState> {
        match self.get(id.color()) {
            Some(EntityState::Knight(state)) => Some(state),
            _ => None,
        }
    }

    /// Look up an item entry.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&ItemState> {
        match self.get(id.name()) {
            Some(EntityState::Item(state)) => Some(state),
            _ => None,
        }
    }

    /// Iterate over `(key, state)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &EntityState)> {
        self.entries.iter().map(|(name, state)| (*name, state))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FinalState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, state) in &self.entries {
            map.serialize_entry(name, state)?;
        }
        map.end()
    }
}
