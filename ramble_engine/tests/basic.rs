use ramble_engine as re;

use re::repl::{ReplControl, evaluate_line, inv_handler, look_handler, move_to_handler, take_handler, use_handler};
use re::{GameError, GameState, ItemEffect, Room};
use std::io::Write;

fn cave_and_forest() -> GameState {
    GameState::new(
        [
            Room::new("cave", "You are in a dark cave.")
                .with_exit("north", "forest")
                .with_item("torch"),
            Room::new("forest", "You are in a sunlit forest."),
        ],
        "cave",
    )
}

#[test]
fn move_north_reaches_empty_forest() {
    let mut state = cave_and_forest();
    let text = move_to_handler(&mut state, "north").expect("north exit exists");
    assert_eq!(state.current_room(), "forest");
    assert!(text.starts_with("You move north.\n"));
    assert!(text.contains("sunlit"));
    assert!(text.contains("You see nothing of interest."));
    assert!(!text.contains("torch"));
}

#[test]
fn move_through_missing_exit_fails_and_stays_put() {
    let mut state = cave_and_forest();
    let before = state.clone();
    let err = move_to_handler(&mut state, "south").unwrap_err();
    assert_eq!(
        err,
        GameError::UnknownExit {
            direction: "south".into(),
            room: "cave".into()
        }
    );
    assert_eq!(state, before);
}

#[test]
fn exit_to_missing_room_is_not_found() {
    let mut state = GameState::new([Room::new("cave", "x").with_exit("up", "sky")], "cave");
    assert_eq!(
        move_to_handler(&mut state, "up"),
        Err(GameError::RoomNotFound("sky".into()))
    );
    assert_eq!(state.current_room(), "cave");
}

#[test]
fn torch_lights_once() {
    let mut state = cave_and_forest();
    let first = use_handler(&mut state, "torch").unwrap();
    assert!(first.starts_with("You light the torch. The cave is now illuminated!"));
    assert!(first.contains("You are in a dark cave."));
    assert!(state.flag("torch_lit"));

    let after_first = state.clone();
    let second = use_handler(&mut state, "torch").unwrap();
    assert_eq!(second, "The torch is already lit.");
    assert_eq!(state, after_first);
}

#[test]
fn unregistered_item_cannot_be_used() {
    let mut state = cave_and_forest();
    assert_eq!(
        use_handler(&mut state, "spoon").unwrap(),
        "You can't use the spoon right now."
    );
    assert!(state.item_flags.is_empty());
}

#[test]
fn consumable_items_leave_inventory() {
    let mut state = cave_and_forest();
    state.effects.register("bread", ItemEffect::Consume);
    assert_eq!(use_handler(&mut state, "bread").unwrap(), "You don't have the bread.");

    take_handler(&mut state, "bread").unwrap();
    assert_eq!(use_handler(&mut state, "bread").unwrap(), "You consume the bread.");
    assert!(state.player.inventory.is_empty());
    assert!(state.flag("bread_consumed"));
}

#[test]
fn take_moves_torch_and_allows_phantom_items() {
    let mut state = cave_and_forest();
    assert_eq!(take_handler(&mut state, "torch").unwrap(), "You take the torch.");
    assert!(state.rooms["cave"].items.is_empty());
    assert_eq!(state.player.inventory, vec!["torch".to_string()]);

    take_handler(&mut state, "torch").unwrap();
    assert_eq!(state.player.inventory, vec!["torch".to_string(), "torch".to_string()]);
    assert_eq!(inv_handler(&state), "Inventory: torch, torch");
    assert!(look_handler(&state).unwrap().contains("You see nothing of interest."));
}

#[test]
fn scripted_session_through_the_repl() {
    let mut state = cave_and_forest();
    let help = re::loader::help::default_help_commands();
    let mut run = |line: &str| evaluate_line(&mut state, &help, line);

    let (control, text) = run("inventory");
    assert_eq!(control, ReplControl::Continue);
    assert_eq!(text.unwrap(), "Inventory: (empty)");

    assert_eq!(run("Take Torch").1.unwrap(), "You take the torch.");
    assert!(run("use torch").1.unwrap().contains("illuminated"));
    assert!(run("go south").1.is_err());
    assert!(run("go north").1.unwrap().contains("sunlit"));
    assert_eq!(run("dance").1.unwrap(), "I don't understand that command.");
    assert!(run("help").1.unwrap().contains("inventory"));

    let (control, text) = run("exit");
    assert_eq!(control, ReplControl::Quit);
    assert_eq!(text.unwrap(), "Goodbye!");
}

#[test]
fn loads_game_file_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "start_room": "cave",
            "rooms": {{
                "cave": {{"description": "A cave.", "exits": {{"north": "forest"}}, "items": ["torch"]}},
                "forest": {{"description": "A forest.", "item_names": ["acorn"]}}
            }}
        }}"#
    )
    .unwrap();

    let mut state = re::load_game(file.path()).expect("game loads");
    assert_eq!(look_handler(&state).unwrap(), "A cave.\nYou see:\n  - torch\nExits: north");
    move_to_handler(&mut state, "north").unwrap();
    assert!(look_handler(&state).unwrap().contains("  - acorn"));
}

#[test]
fn bundled_game_loads() {
    let state = re::load_game(std::path::Path::new("data/game.json")).expect("bundled game loads");
    assert_eq!(state.current_room(), "cave");
    assert!(state.rooms["cave"].items.contains(&"torch".to_string()));
    assert!(look_handler(&state).unwrap().ends_with("Exits: north down"));
}

#[test]
fn exits_are_listed_in_file_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "start_room": "c",
            "rooms": {{
                "c": {{"description": "C", "exits": {{"north": "f", "down": "f", "east": "f"}}}},
                "f": {{"description": "F"}}
            }}
        }}"#
    )
    .unwrap();

    let state = re::load_game(file.path()).expect("game loads");
    assert_eq!(
        look_handler(&state).unwrap(),
        "C\nYou see nothing of interest.\nExits: north down east"
    );
}

#[test]
fn blank_input_is_not_understood() {
    let mut state = cave_and_forest();
    let help = re::loader::help::default_help_commands();
    for line in ["", "   "] {
        let (control, text) = evaluate_line(&mut state, &help, line);
        assert_eq!(control, ReplControl::Continue);
        assert_eq!(text.unwrap(), "I don't understand that command.");
    }
}

#[test]
fn missing_game_file_reports_path() {
    let err = re::load_game(std::path::Path::new("no/such/game.json")).unwrap_err();
    assert!(format!("{err:#}").contains("no/such/game.json"));
}
