//! `repl::movement` module
//!
//! Contains repl loop handlers for commands that change player location

use log::{info, warn};

use crate::{GameError, GameState, repl::look_handler};

/// Move the player through the exit named `direction`.
///
/// The player stays put if the exit doesn't exist or leads to a room that isn't in the graph.
///
/// # Errors
/// - `UnknownExit` if the current room has no such exit
/// - `RoomNotFound` if the current room or the exit's destination is missing
pub fn move_to_handler(state: &mut GameState, direction: &str) -> Result<String, GameError> {
    let current_room = state.current_room_ref()?;
    let Some(destination) = current_room.exit_to(direction).cloned() else {
        warn!("no exit '{direction}' from room '{}'", current_room.id);
        return Err(GameError::UnknownExit {
            direction: direction.to_string(),
            room: current_room.id.clone(),
        });
    };
    if !state.rooms.contains_key(&destination) {
        return Err(GameError::RoomNotFound(destination));
    }

    let leaving = std::mem::replace(&mut state.player.location, destination);
    info!("player moved {direction} from '{leaving}' to '{}'", state.player.location);
    Ok(format!("You move {direction}.\n{}", look_handler(state)?))
}
