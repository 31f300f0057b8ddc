//! View module.
//!
//! Rather than printing to the console from each handler, handlers push
//! [`ViewItem`]s into a [`View`], which renders and displays everything at
//! the end of the turn. Styling and wrapping happen only at flush time, so
//! tests can assert on plain message content.

use crate::style::GameStyle;

use textwrap::{fill, termwidth};

/// One displayable piece of turn output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewItem {
    RoomDescription { name: String, description: String },
    RoomItems(Vec<String>),
    RoomExits(Vec<String>),
    Inventory(Vec<String>),
    ActionSuccess(String),
    ActionFailure(String),
    EngineMessage(String),
    Error(String),
    Help,
    Victory(String),
}

/// Aggregates everything to be displayed on one pass through the REPL.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewItem>,
}

impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    /// Create a new empty view sized to the terminal.
    pub fn new() -> Self {
        Self {
            width: termwidth().clamp(40, 100),
            items: Vec::new(),
        }
    }

    /// Queue an item for the current turn's output.
    pub fn push(&mut self, item: ViewItem) {
        self.items.push(item);
    }

    /// Render and display all queued items, then clear the queue.
    pub fn flush(&mut self) {
        for item in self.items.drain(..) {
            render(&item, self.width);
        }
    }
}

fn render(item: &ViewItem, width: usize) {
    match item {
        ViewItem::RoomDescription { name, description } => {
            println!("\n{}", name.room_style());
            println!("{}", fill(description, width).description_style());
        },
        ViewItem::RoomItems(items) => {
            println!("Você vê por aqui: {}", items.join(", ").item_style());
        },
        ViewItem::RoomExits(dirs) => {
            if dirs.is_empty() {
                println!("{}", "Não há saídas visíveis.".exit_style());
            } else {
                println!("Saídas: {}", dirs.join(", ").exit_style());
            }
        },
        ViewItem::Inventory(items) => {
            if items.is_empty() {
                println!("Seu inventário está vazio.");
            } else {
                println!("Você está carregando: {}", items.join(", ").item_style());
            }
        },
        ViewItem::ActionSuccess(msg) => println!("{}", msg.success_style()),
        ViewItem::ActionFailure(msg) => println!("{}", msg.locked_style()),
        ViewItem::EngineMessage(msg) => println!("{msg}"),
        ViewItem::Error(msg) => println!("{}", msg.error_style()),
        ViewItem::Help => print_help(),
        ViewItem::Victory(msg) => {
            println!("\n{}", fill(msg, width).banner_style());
        },
    }
}

fn print_help() {
    println!("Comandos disponíveis:");
    println!("  olhar            -- descreve a sala atual, seus itens e saídas");
    println!("  ir <direção>     -- segue para a direção indicada (ex.: ir norte)");
    println!("  pegar <item>     -- pega um item da sala (ex.: pegar chave)");
    println!("  inventario       -- lista os itens que você carrega");
    println!("  ajuda            -- mostra esta lista de comandos");
    println!("  sair             -- encerra o jogo");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flush_clears_queued_items() {
        colored::control::set_override(false);
        let mut view = View::new();
        view.push(ViewItem::EngineMessage("olá".into()));
        view.push(ViewItem::Inventory(vec![]));
        assert_eq!(view.items.len(), 2);
        view.flush();
        assert!(view.items.is_empty());
        colored::control::unset_override();
    }

    #[test]
    fn width_stays_within_readable_bounds() {
        let view = View::new();
        assert!((40..=100).contains(&view.width));
    }
}
