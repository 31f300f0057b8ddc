//! Player -- the adventurer wandering the world.

use crate::world::ItemHolder;

/// The player character: a current location and an ordered inventory.
///
/// Inventory order is pickup order. Location is a room id; keeping it valid
/// is the movement handler's job, not this struct's.
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub location: String,
    pub inventory: Vec<String>,
}

impl Player {
    /// Create a player at the given starting room with an empty inventory.
    pub fn new(name: impl Into<String>, start_room: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: start_room.into(),
            inventory: Vec::new(),
        }
    }

    /// Overwrite the player's location unconditionally.
    pub fn move_to(&mut self, room_id: &str) {
        self.location = room_id.to_string();
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item_id: String) {
        self.inventory.push(item_id);
    }

    fn remove_item(&mut self, item_id: &str) -> Option<String> {
        let idx = self.inventory.iter().position(|held| held == item_id)?;
        Some(self.inventory.remove(idx))
    }

    fn contains_item(&self, item_id: &str) -> bool {
        self.inventory.iter().any(|held| held == item_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_starts_empty_at_start_room() {
        let player = Player::new("Aventureiro", "entrada");
        assert_eq!(player.location, "entrada");
        assert!(player.inventory.is_empty());
    }

    #[test]
    fn inventory_preserves_pickup_order() {
        let mut player = Player::new("p", "r");
        player.add_item("chave".into());
        player.add_item("livro".into());
        assert_eq!(player.inventory, vec!["chave", "livro"]);
        assert!(player.contains_item("chave"));
        assert!(!player.contains_item("mapa"));
    }

    #[test]
    fn move_to_overwrites_location() {
        let mut player = Player::new("p", "entrada");
        player.move_to("corredor");
        assert_eq!(player.location, "corredor");
    }
}
