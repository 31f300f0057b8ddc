#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Caverna **
//! A small cave adventure: find the key, unlock the iron door, reach the
//! secret garden.

use caverna::style::GameStyle;
use caverna::{load_world, run_repl};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading world...");
    let mut world = load_world().context("while loading World")?;
    info!("World loaded successfully.");

    println!("{}", "A CAVERNA DO JARDIM SECRETO".banner_style());
    println!("Explore a caverna, colete itens e encontre a saída.");
    println!("Digite 'ajuda' para ver os comandos e 'sair' para desistir.");

    run_repl(&mut world)
}
