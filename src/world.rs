//! Data structures representing the game world.
//!
//! [`World`] bundles the room graph and the player so state is created once
//! at startup and threaded through every handler -- no globals.

use crate::{Player, Room};

use std::collections::BTreeMap;
use thiserror::Error;

/// Errors raised by world lookups.
///
/// Under the content invariant (every exit destination exists, the player
/// starts in a real room) these are unreachable; hitting one means the
/// world definition slipped past validation.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("room id '{0}' not found in world")]
    UnknownRoom(String),
}

/// Anything that can hold items: rooms and the player.
pub trait ItemHolder {
    /// Append an item to this holder's collection.
    fn add_item(&mut self, item_id: String);
    /// Remove the first entry matching `item_id`, returning the stored id.
    fn remove_item(&mut self, item_id: &str) -> Option<String>;
    /// Exact-match membership check.
    fn contains_item(&self, item_id: &str) -> bool;
}

/// Complete state of the running game: room graph plus player.
///
/// Room topology is immutable after loading; only room item lists and the
/// player change during play. `BTreeMap` keeps room and exit iteration
/// deterministic.
#[derive(Debug, Clone)]
pub struct World {
    pub rooms: BTreeMap<String, Room>,
    pub player: Player,
}

impl World {
    /// Obtain a reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's location id is not a room key
    pub fn player_room_ref(&self) -> Result<&Room, WorldError> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))
    }

    /// Obtain a mutable reference to the room the player occupies.
    ///
    /// # Errors
    /// - if the player's location id is not a room key
    pub fn player_room_mut(&mut self) -> Result<&mut Room, WorldError> {
        self.rooms
            .get_mut(&self.player.location)
            .ok_or_else(|| WorldError::UnknownRoom(self.player.location.clone()))
    }

    /// True once the player stands in the designated victory room.
    ///
    /// # Errors
    /// - if the player's location id is not a room key
    pub fn victory_reached(&self) -> Result<bool, WorldError> {
        Ok(self.player_room_ref()?.is_exit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_room_world() -> World {
        let mut rooms = BTreeMap::new();
        rooms.insert("a".to_string(), Room::new("a", "Sala A", "Uma sala."));
        let mut exit_room = Room::new("b", "Sala B", "Outra sala.");
        exit_room.is_exit = true;
        rooms.insert("b".to_string(), exit_room);
        World {
            rooms,
            player: Player::new("p", "a"),
        }
    }

    #[test]
    fn player_room_ref_resolves_current_room() {
        let world = two_room_world();
        assert_eq!(world.player_room_ref().unwrap().id, "a");
    }

    #[test]
    fn player_room_ref_errors_on_dangling_location() {
        let mut world = two_room_world();
        world.player.location = "nada".to_string();
        assert!(matches!(
            world.player_room_ref(),
            Err(WorldError::UnknownRoom(id)) if id == "nada"
        ));
    }

    #[test]
    fn player_room_mut_allows_item_removal() {
        let mut world = two_room_world();
        world.player_room_mut().unwrap().items.push("chave".into());
        assert_eq!(world.player_room_ref().unwrap().items, vec!["chave"]);
    }

    #[test]
    fn victory_reached_tracks_is_exit_flag() {
        let mut world = two_room_world();
        assert!(!world.victory_reached().unwrap());
        world.player.move_to("b");
        assert!(world.victory_reached().unwrap());
    }
}
