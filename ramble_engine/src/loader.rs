//! Loader utilities for building a `GameState` from a JSON game file.
//!
//! Game content comes from a single `GameDef`; help metadata is TOML-backed
//! (see [`help`]).

pub mod help;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use log::info;
use ramble_data::GameDef;

use crate::{GameState, Room};

/// Load a game definition from `path` and build the starting `GameState`.
///
/// # Errors
/// Errors bubble up from file IO, deserialization, or missing room references.
pub fn load_game(path: &Path) -> Result<GameState> {
    let json = fs::read_to_string(path).with_context(|| format!("reading game data from '{}'", path.display()))?;
    let def = parse_gamedef(&json).with_context(|| format!("parsing game data from '{}'", path.display()))?;
    info!("{} rooms loaded from '{}'", def.rooms.len(), path.display());
    build_game_state(&def)
}

/// Deserialize a `GameDef` from JSON text.
///
/// # Errors
/// - if the text is not a valid game definition
pub fn parse_gamedef(json: &str) -> Result<GameDef> {
    let def: GameDef = serde_json::from_str(json)?;
    Ok(def)
}

/// Build the initial `GameState` from a validated definition.
///
/// # Errors
/// - if the start room or any exit target is not a defined room
pub fn build_game_state(def: &GameDef) -> Result<GameState> {
    validate_gamedef(def)?;
    let rooms = def.rooms.iter().map(|(id, room_def)| Room::from_def(id, room_def));
    let mut state = GameState::new(rooms, def.start_room.clone());
    state.effects.extend_from_defs(&def.item_effects);
    info!("{} rooms added to GameState", state.rooms.len());
    info!("{} item effects registered", state.effects.len());
    Ok(state)
}

/// Validate the GameDef and return a single aggregated error.
fn validate_gamedef(def: &GameDef) -> Result<()> {
    let errors = ramble_data::validate_game(def);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("game definition validation failed:\n{details}");
}
