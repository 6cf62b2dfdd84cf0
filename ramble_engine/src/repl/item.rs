//! `repl::item` module
//!
//! Contains repl loop handlers for using items. What an item does is decided by
//! the state's [`crate::EffectRegistry`].

use log::info;

use crate::{
    GameError, GameState, ItemEffect, ItemHolder,
    repl::look_handler,
    world::{consumed_flag, lit_flag},
};

/// Use an item according to its registered effect.
///
/// # Errors
/// - if lighting an item and the player's room is missing from the room graph
pub fn use_handler(state: &mut GameState, item: &str) -> Result<String, GameError> {
    match state.effects.effect_for(item) {
        ItemEffect::Light => light_item(state, item),
        ItemEffect::Consume => Ok(consume_item(state, item)),
        ItemEffect::NoEffect => Ok(format!("You can't use the {item} right now.")),
    }
}

fn light_item(state: &mut GameState, item: &str) -> Result<String, GameError> {
    let flag = lit_flag(item);
    if state.flag(&flag) {
        return Ok(format!("The {item} is already lit."));
    }
    let surroundings = look_handler(state)?;
    state.set_flag(flag, true);
    info!("player lit the {item} in '{}'", state.player.location);
    Ok(format!(
        "You light the {item}. The {} is now illuminated!\n{surroundings}",
        state.player.location
    ))
}

fn consume_item(state: &mut GameState, item: &str) -> String {
    if !state.player.remove_item(item) {
        return format!("You don't have the {item}.");
    }
    state.set_flag(consumed_flag(item), true);
    info!("player consumed the {item}");
    format!("You consume the {item}.")
}
