//! Loader utilities for building a [`World`] from serialized data.
//!
//! The default world ships embedded in the binary as a RON document. The
//! loader deserializes it into definition structs, validates content
//! integrity, and builds the runtime [`World`]. Content bugs (dangling
//! exits, missing victory room) fail fast here, before the banner prints.

use crate::{Player, Room, World};

use anyhow::{Context, Result, bail};
use log::info;
use serde::Deserialize;
use std::collections::BTreeMap;

/// The default world content, compiled into the binary.
const WORLD_RON: &str = include_str!("../data/world.ron");

/// Serialized form of the whole world: player start plus room list.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldDef {
    pub player: PlayerDef,
    pub rooms: Vec<RoomDef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerDef {
    pub name: String,
    pub start_room: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomDef {
    pub id: String,
    pub name: String,
    pub desc: String,
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub exits: BTreeMap<String, String>,
    #[serde(default)]
    pub locked: BTreeMap<String, String>,
    #[serde(default)]
    pub is_exit: bool,
}

/// Load the [`World`] from the embedded world definition.
///
/// # Errors
/// Errors bubble up from deserialization or content validation.
pub fn load_world() -> Result<World> {
    let def = load_worlddef().context("while parsing embedded world definition")?;
    build_world_from_def(&def).context("while building world from definition")
}

/// Parse the embedded RON world definition.
///
/// # Errors
/// - on RON syntax or shape errors
pub fn load_worlddef() -> Result<WorldDef> {
    Ok(ron::from_str(WORLD_RON)?)
}

/// Build a runtime [`World`] from a definition, validating it first.
///
/// # Errors
/// - if validation finds any content defect (reported in aggregate)
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    validate_worlddef(def)?;

    let mut rooms = BTreeMap::new();
    for room_def in &def.rooms {
        let mut room = Room::new(&room_def.id, &room_def.name, &room_def.desc);
        room.items = room_def.items.clone();
        room.exits = room_def.exits.clone();
        room.locked = room_def.locked.clone();
        room.is_exit = room_def.is_exit;
        rooms.insert(room_def.id.clone(), room);
    }
    info!("{} rooms added to World", rooms.len());

    let player = Player::new(&def.player.name, &def.player.start_room);
    info!("player \"{}\" starts at {}", player.name, player.location);

    Ok(World { rooms, player })
}

/// Validate a world definition and return a single aggregated error.
fn validate_worlddef(def: &WorldDef) -> Result<()> {
    let mut errors = Vec::new();

    let mut seen = BTreeMap::new();
    for room in &def.rooms {
        if seen.insert(room.id.as_str(), ()).is_some() {
            errors.push(format!("duplicate room id '{}'", room.id));
        }
    }

    for room in &def.rooms {
        for (dir, dest) in &room.exits {
            if !seen.contains_key(dest.as_str()) {
                errors.push(format!(
                    "room '{}' exit '{dir}' leads to unknown room '{dest}'",
                    room.id
                ));
            }
        }
        for dir in room.locked.keys() {
            if !room.exits.contains_key(dir) {
                errors.push(format!(
                    "room '{}' has a lock on '{dir}' but no such exit",
                    room.id
                ));
            }
        }
    }

    if !seen.contains_key(def.player.start_room.as_str()) {
        errors.push(format!("player start room '{}' does not exist", def.player.start_room));
    }

    let victory_rooms = def.rooms.iter().filter(|room| room.is_exit).count();
    if victory_rooms != 1 {
        errors.push(format!("expected exactly 1 victory room, found {victory_rooms}"));
    }

    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("world definition validation failed:\n{details}");
}
