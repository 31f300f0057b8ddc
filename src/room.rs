//! Room definitions and lookup helpers.
//!
//! Any visitable location is a `Room`: a description, a set of exits keyed
//! by direction, an item list, and optional lock requirements on exits.

use crate::view::{View, ViewItem};
use crate::world::ItemHolder;

use std::collections::BTreeMap;

/// A node in the static world graph.
///
/// Topology (`exits`, `locked`, `is_exit`) never changes at runtime; only
/// `items` is mutated, as items move into the player's inventory. Exits and
/// locks live in `BTreeMap`s so Look always lists directions in the same
/// (alphabetical) order.
#[derive(Debug, Clone)]
pub struct Room {
    pub id: String,
    pub name: String,
    pub description: String,
    /// direction -> destination room id
    pub exits: BTreeMap<String, String>,
    /// direction -> item id required to traverse that exit
    pub locked: BTreeMap<String, String>,
    pub items: Vec<String>,
    /// true only for the victory room
    pub is_exit: bool,
}

impl Room {
    /// Create a bare room with no exits, locks, or items.
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            exits: BTreeMap::new(),
            locked: BTreeMap::new(),
            items: Vec::new(),
            is_exit: false,
        }
    }

    /// The item id required to use `direction`, if that exit is locked.
    pub fn required_item(&self, direction: &str) -> Option<&String> {
        self.locked.get(direction)
    }

    /// Push the full description of this room: title, description text,
    /// items present (only when there are any), and the exit list.
    pub fn show(&self, view: &mut View) {
        view.push(ViewItem::RoomDescription {
            name: self.name.clone(),
            description: self.description.clone(),
        });
        if !self.items.is_empty() {
            view.push(ViewItem::RoomItems(self.items.clone()));
        }
        view.push(ViewItem::RoomExits(self.exits.keys().cloned().collect()));
    }
}

impl ItemHolder for Room {
    fn add_item(&mut self, item_id: String) {
        self.items.push(item_id);
    }

    /// Removes the first entry matching `item_id`, case-insensitively.
    /// Returns the stored id verbatim so inventory keeps the author's casing.
    fn remove_item(&mut self, item_id: &str) -> Option<String> {
        if item_id.is_empty() {
            return None;
        }
        let wanted = item_id.to_lowercase();
        let idx = self.items.iter().position(|held| held.to_lowercase() == wanted)?;
        Some(self.items.remove(idx))
    }

    /// Membership follows the same case-insensitive policy as `remove_item`.
    fn contains_item(&self, item_id: &str) -> bool {
        let wanted = item_id.to_lowercase();
        self.items.iter().any(|held| held.to_lowercase() == wanted)
    }
}
