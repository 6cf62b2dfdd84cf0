//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities.

use std::fmt::Write;

use log::info;

use crate::GameState;
use crate::loader::help::HelpCommand;

/// Quit the game, logging the final state.
pub fn quit_handler(state: &GameState) -> String {
    info!("player quit in room '{}'", state.player.location);
    info!("ending inventory:");
    state.player.inventory.iter().for_each(|item| info!("- {item}"));
    info!("ending flags:");
    state
        .item_flags
        .iter()
        .filter(|(_, set)| **set)
        .for_each(|(flag, _)| info!("* {flag}"));
    "Goodbye!".to_string()
}

/// Show available commands.
pub fn help_handler(commands: &[HelpCommand]) -> String {
    let width = commands.iter().map(|cmd| cmd.command.len()).max().unwrap_or(0);
    let mut out = String::from("Commands:");
    for cmd in commands {
        let _ = write!(out, "\n  {:<width$}  {}", cmd.command, cmd.description);
    }
    out
}

/// Response to input that didn't parse as a command.
pub fn unknown_handler() -> String {
    "I don't understand that command.".to_string()
}
