//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory.

use crate::view::{View, ViewItem};
use crate::world::{ItemHolder, World};

use anyhow::Result;
use log::info;

/// Removes an item from the current room and appends it to inventory.
///
/// Matching is case-insensitive against the room's item list; the first
/// matching entry moves, exactly once. A missing or unmatched name gets a
/// "nothing here by that name" message echoing the argument as received.
///
/// # Errors
/// Returns an error if the player's current room cannot be resolved.
pub fn take_handler(world: &mut World, view: &mut View, thing: Option<&str>) -> Result<()> {
    let name = thing.unwrap_or_default();
    let taken = world.player_room_mut()?.remove_item(name);
    if let Some(item) = taken {
        view.push(ViewItem::ActionSuccess(format!("Você pegou: {item}.")));
        info!("{} took '{item}' from {}", world.player.name, world.player.location);
        world.player.add_item(item);
    } else {
        view.push(ViewItem::ActionFailure(format!(
            "Não há nada chamado \"{name}\" por aqui."
        )));
        info!("{} found nothing named '{name}' to take", world.player.name);
    }
    Ok(())
}

/// Shows the list of items held in inventory, in pickup order.
pub fn inv_handler(world: &World, view: &mut View) {
    info!("{} checked inventory", world.player.name);
    view.push(ViewItem::Inventory(world.player.inventory.clone()));
}
