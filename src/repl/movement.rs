//! `repl::movement` module
//!
//! Contains the repl loop handler for commands that change player location.

use crate::view::{View, ViewItem};
use crate::world::{ItemHolder, World, WorldError};

use anyhow::Result;
use log::info;

/// Move the player through a neighboring exit, if its conditions are met.
///
/// An absent direction behaves exactly like an unknown one. A locked exit
/// checks the player's inventory for the required item; the item is
/// consulted, never consumed. On success the new room is shown in full, so
/// arriving always includes a Look.
///
/// # Errors
/// Returns an error if the current room or the move destination cannot be
/// resolved (a content bug caught by loader validation in normal runs).
pub fn go_handler(world: &mut World, view: &mut View, direction: Option<&str>) -> Result<()> {
    let dir = direction.unwrap_or_default();
    let (destination_id, required_item) = {
        let current_room = world.player_room_ref()?;
        match current_room.exits.get(dir) {
            Some(dest) => (dest.clone(), current_room.required_item(dir).cloned()),
            None => {
                view.push(ViewItem::ActionFailure(format!(
                    "Você não pode ir para \"{dir}\" daqui."
                )));
                info!(
                    "{} tried to go '{dir}' from {}: no such exit",
                    world.player.name, current_room.id
                );
                return Ok(());
            },
        }
    };

    if let Some(key) = required_item {
        if world.player.contains_item(&key) {
            view.push(ViewItem::ActionSuccess(format!(
                "Você destranca a passagem usando: {key}."
            )));
            info!("{} unlocked exit '{dir}' using '{key}'", world.player.name);
        } else {
            view.push(ViewItem::ActionFailure(format!(
                "A passagem para {dir} está trancada. Você precisa de: {key}."
            )));
            info!(
                "{} blocked at locked exit '{dir}': missing '{key}'",
                world.player.name
            );
            return Ok(());
        }
    }

    world.player.move_to(&destination_id);
    view.push(ViewItem::ActionSuccess(format!("Você segue para {dir}...")));
    let new_room = world
        .rooms
        .get(&destination_id)
        .ok_or_else(|| WorldError::UnknownRoom(destination_id.clone()))?;
    new_room.show(view);
    info!("{} moved to {} ({})", world.player.name, new_room.name, new_room.id);
    Ok(())
}
