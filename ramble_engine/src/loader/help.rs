//! module `loader::help`

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Deserialize;

/// Represents a single command in the help system
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Loads help commands from a TOML file
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let wrapper: HelpCommandFile =
        toml::from_str(&help_file).with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!(
        "{} help commands loaded from '{}'",
        wrapper.commands.len(),
        toml_path.display()
    );

    Ok(wrapper.commands)
}

/// Loads help commands, falling back to the built-in list if the file can't be used.
pub fn load_help_or_default(toml_path: &Path) -> Vec<HelpCommand> {
    load_help_commands(toml_path).unwrap_or_else(|err| {
        warn!("using built-in help commands: {err:#}");
        default_help_commands()
    })
}

/// The command list shown when no help file is available.
pub fn default_help_commands() -> Vec<HelpCommand> {
    [
        ("go <direction>", "Move through an exit."),
        ("take <item>", "Pick something up."),
        ("use <item>", "Try to use an item."),
        ("look", "Describe your surroundings again."),
        ("inventory", "List what you're carrying."),
        ("help", "Show this list."),
        ("quit", "Leave the game."),
    ]
    .into_iter()
    .map(|(command, description)| HelpCommand {
        command: command.to_string(),
        description: description.to_string(),
    })
    .collect()
}
