//! `repl::look` module
//!
//! Contains the repl loop handler for examining the surroundings.

use crate::view::View;
use crate::world::World;

use anyhow::Result;
use log::info;

/// Shows description of surroundings: room title, description text, items
/// present (when any), and the exit list in pinned alphabetical order.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn look_handler(world: &World, view: &mut View) -> Result<()> {
    let room = world.player_room_ref()?;
    room.show(view);
    info!("{} looked around {} ({})", world.player.name, room.name, room.id);
    Ok(())
}
