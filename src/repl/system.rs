//! `repl::system` module
//!
//! Contains repl loop handlers for system commands (help, quit).

use crate::repl::ReplControl;
use crate::view::{View, ViewItem};
use crate::world::World;

use log::info;

/// Show available commands.
pub fn help_handler(view: &mut View) {
    view.push(ViewItem::Help);
}

/// Quit the game, logging the final state for the session record.
pub fn quit_handler(world: &World, view: &mut View) -> ReplControl {
    info!("{} quit from {}", world.player.name, world.player.location);
    info!("ending inventory:");
    world.player.inventory.iter().for_each(|item| info!("- {item}"));

    view.push(ViewItem::EngineMessage("Até logo, aventureiro!".to_string()));
    ReplControl::Quit
}
