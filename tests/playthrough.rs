//! End-to-end scenarios against the embedded default world, driven through
//! the same parse-then-dispatch path the game loop uses.

use caverna::repl::{
    ReplControl, go_handler, help_handler, inv_handler, look_handler, quit_handler, take_handler,
};
use caverna::{Command, ItemHolder, View, ViewItem, World, load_world, parse_command};

fn dispatch(world: &mut World, view: &mut View, line: &str) {
    match parse_command(line) {
        Command::Look => look_handler(world, view).unwrap(),
        Command::Go(direction) => go_handler(world, view, direction.as_deref()).unwrap(),
        Command::Take(thing) => take_handler(world, view, thing.as_deref()).unwrap(),
        Command::Inventory => inv_handler(world, view),
        Command::Help => help_handler(view),
        Command::Quit | Command::Unknown => {},
    }
}

#[test]
fn scenario_a_taking_the_key_in_the_start_room() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "pegar chave");

    assert_eq!(world.player.inventory, vec!["chave"]);
    assert!(world.rooms.get("entrada").unwrap().items.is_empty());
}

#[test]
fn scenario_b_moving_north_shows_the_corridor() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "ir norte");

    assert_eq!(world.player.location, "corredor");
    assert!(view.items.iter().any(|item| matches!(
        item,
        ViewItem::RoomDescription { name, .. } if name == "Corredor Escuro"
    )));
    assert!(view.items.iter().any(|item| matches!(
        item,
        ViewItem::RoomExits(dirs) if dirs == &vec!["norte".to_string(), "sul".to_string()]
    )));
}

#[test]
fn scenario_c_locked_door_without_the_key() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "ir norte");
    dispatch(&mut world, &mut view, "ir norte");
    assert_eq!(world.player.location, "biblioteca");

    dispatch(&mut world, &mut view, "ir norte");
    assert_eq!(world.player.location, "biblioteca");
    assert!(view.items.iter().any(|item| matches!(
        item,
        ViewItem::ActionFailure(msg) if msg.contains("trancada") && msg.contains("chave")
    )));
}

#[test]
fn scenario_d_key_opens_the_way_to_victory() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "pegar chave");
    dispatch(&mut world, &mut view, "ir norte");
    dispatch(&mut world, &mut view, "ir norte");
    dispatch(&mut world, &mut view, "ir norte");

    assert_eq!(world.player.location, "jardim");
    // the key was consulted, not consumed
    assert!(world.player.contains_item("chave"));
    // the loop's victory check fires before the next prompt
    assert!(world.victory_reached().unwrap());
}

#[test]
fn scenario_e_quit_leaves_location_unchanged_with_farewell() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "ir norte");
    assert_eq!(world.player.location, "corredor");

    assert_eq!(parse_command("  SAIR!!"), Command::Quit);
    assert!(matches!(quit_handler(&world, &mut view), ReplControl::Quit));
    assert!(view.items.iter().any(|item| matches!(
        item,
        ViewItem::EngineMessage(msg) if msg.contains("Até logo")
    )));
    assert_eq!(world.player.location, "corredor");
    assert!(!world.victory_reached().unwrap());
}

#[test]
fn victory_flag_is_false_until_the_garden() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    assert!(!world.victory_reached().unwrap());
    dispatch(&mut world, &mut view, "pegar chave");
    dispatch(&mut world, &mut view, "ir norte");
    assert!(!world.victory_reached().unwrap());
    dispatch(&mut world, &mut view, "ir norte");
    assert!(!world.victory_reached().unwrap());
}

#[test]
fn noisy_input_still_parses_to_one_argument() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    dispatch(&mut world, &mut view, "  PEGAR: a chave!! agora ");
    // second token is "a", which matches nothing
    assert!(world.player.inventory.is_empty());

    dispatch(&mut world, &mut view, "pegar... CHAVE");
    assert_eq!(world.player.inventory, vec!["chave"]);
}

#[test]
fn unknown_directions_never_change_location() {
    let mut world = load_world().unwrap();
    let mut view = View::new();

    for line in ["ir oeste", "ir cima", "ir"] {
        dispatch(&mut world, &mut view, line);
        assert_eq!(world.player.location, "entrada");
    }
}
