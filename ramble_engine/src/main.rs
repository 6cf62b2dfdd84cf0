#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Ramble **
//! A tiny room-and-inventory adventure.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use ramble_engine::data_paths::data_path;
use ramble_engine::loader::help::load_help_or_default;
use ramble_engine::repl::look_handler;
use ramble_engine::style::GameStyle;
use ramble_engine::{RAMBLE_VERSION, load_game, run_repl};

#[derive(Parser, Debug)]
#[command(name = "ramble_engine", version, about = "Explore a room graph one command at a time")]
struct Cli {
    /// Game definition to play (defaults to the bundled game.json)
    game: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let game_path = cli.game.unwrap_or_else(|| data_path("game.json"));

    info!("ramble_engine v{RAMBLE_VERSION}");
    info!("Start: loading game from '{}'...", game_path.display());
    let mut state = load_game(&game_path).context("while loading game")?;
    let help = load_help_or_default(&data_path("help_commands.toml"));
    info!("Game loaded successfully.");

    println!("{}", "Welcome to RAMBLE!".title_style());
    println!("{}", look_handler(&state)?.description_style());

    run_repl(&mut state, &help);
    info!("Game ended.");
    Ok(())
}
