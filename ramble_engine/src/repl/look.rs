//! `repl::look` module
//!
//! Contains repl loop handlers for commands that describe surroundings

use crate::{GameError, GameState};

/// Describe the room the player is in.
///
/// # Errors
/// - if the player's room is missing from the room graph
pub fn look_handler(state: &GameState) -> Result<String, GameError> {
    Ok(state.current_room_ref()?.describe())
}
