//! `repl::inventory` module
//!
//! Contains repl loop handlers for commands that affect player inventory

use log::info;

use crate::{GameError, GameState, ItemHolder};

/// Adds an item to inventory, removing it from the current room if it's there.
///
/// Taking something that isn't in the room still succeeds and still adds it to inventory.
///
/// # Errors
/// - if the player's room is missing from the room graph
pub fn take_handler(state: &mut GameState, item: &str) -> Result<String, GameError> {
    let in_room = state.current_room_mut()?.remove_item(item);
    state.player.add_item(item);
    if in_room {
        info!("player took '{item}' from room '{}'", state.player.location);
    } else {
        info!("player took '{item}', which wasn't in room '{}'", state.player.location);
    }
    Ok(format!("You take the {item}."))
}

/// Lists the player's inventory in pickup order.
pub fn inv_handler(state: &GameState) -> String {
    if state.player.inventory.is_empty() {
        "Inventory: (empty)".to_string()
    } else {
        format!("Inventory: {}", state.player.inventory.join(", "))
    }
}
