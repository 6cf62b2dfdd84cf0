//! Errors reported by game state operations.
//!
//! None of these are fatal: the REPL shows the message and waits for the next command.

use thiserror::Error;

use crate::Id;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Which way is '{direction}'? There's no exit like that from the {room}.")]
    UnknownExit { direction: String, room: Id },
    #[error("room '{0}' not found in the room graph")]
    RoomNotFound(Id),
}
