//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that read and mutate the [`World`].

pub mod input;
pub mod inventory;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use crate::command::{Command, parse_command};
use crate::style::GameStyle;
use crate::view::{View, ViewItem};
use crate::world::World;

use anyhow::Result;
use log::info;

use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run the main read–eval–print loop until the player wins or quits.
///
/// Each iteration checks the victory condition before reading input, then
/// prompts, parses, dispatches to the handler modules, and flushes the view.
/// An initial Look runs before the loop so the player sees the opening room
/// without typing a command.
///
/// # Errors
/// - Propagates failures from handlers, such as a missing room for the player.
pub fn run_repl(world: &mut World) -> Result<()> {
    let mut view = View::new();
    let mut input_manager = InputManager::new();
    let mut turn_count: usize = 0;

    look_handler(world, &mut view)?;
    view.flush();

    loop {
        turn_count += 1;
        info!("================> BEGIN TURN {turn_count} <================");

        if world.victory_reached()? {
            let room_name = world.player_room_ref()?.name.clone();
            view.push(ViewItem::Victory(format!(
                "Parabéns! Você chegou a {room_name} e venceu o jogo."
            )));
            view.flush();
            info!("{} reached the victory room -- game won", world.player.name);
            break;
        }

        let prompt = "\n> ".prompt_style().to_string();
        let input = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "sair".to_string(),
            Ok(InputEvent::Interrupted) => {
                view.push(ViewItem::EngineMessage("Comando cancelado.".to_string()));
                view.flush();
                continue;
            },
            Err(err) => {
                view.push(ViewItem::Error(format!("Falha ao ler a entrada: {err}.")));
                view.flush();
                continue;
            },
        };

        match parse_command(&input) {
            Command::Look => look_handler(world, &mut view)?,
            Command::Go(direction) => go_handler(world, &mut view, direction.as_deref())?,
            Command::Take(thing) => take_handler(world, &mut view, thing.as_deref())?,
            Command::Inventory => inv_handler(world, &mut view),
            Command::Help => help_handler(&mut view),
            Command::Quit => {
                if let ReplControl::Quit = quit_handler(world, &mut view) {
                    view.flush();
                    break;
                }
            },
            Command::Unknown => {
                view.push(ViewItem::Error(
                    "Não entendi. Digite 'ajuda' para ver os comandos.".to_string(),
                ));
            },
        }
        view.flush();
    }
    Ok(())
}
