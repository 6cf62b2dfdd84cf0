#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const RAMBLE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core modules
pub mod command;
pub mod data_paths;
pub mod error;
pub mod item;
pub mod loader;
pub mod player;
pub mod repl;
pub mod room;
pub mod style;
pub mod world;

pub use ramble_data::Id;

// Re-exports for convenience
pub use error::GameError;
pub use item::{EffectRegistry, ItemEffect, ItemHolder};
pub use loader::load_game;
pub use player::Player;
pub use repl::run_repl;
pub use room::Room;
pub use world::GameState;
