//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that manipulate the [`GameState`]. Handlers
//! return the text to show; only [`run_repl`] prints.

mod input;
pub mod inventory;
pub mod item;
pub mod look;
pub mod movement;
pub mod system;

pub use inventory::*;
pub use item::*;
pub use look::*;
pub use movement::*;
pub use system::*;

use log::{error, info};
use textwrap::{fill, termwidth};

use crate::command::{Command, parse_command};
use crate::loader::help::HelpCommand;
use crate::style::GameStyle;
use crate::{GameError, GameState};

use input::{InputEvent, InputManager};

/// Control flow signal telling the REPL whether to keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplControl {
    Continue,
    Quit,
}

/// Run one command against the game state and return the text to show.
///
/// # Errors
/// - propagates handler failures such as an unknown exit; none of them are fatal
pub fn handle_command(state: &mut GameState, help: &[HelpCommand], command: &Command) -> Result<String, GameError> {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    match command {
        Help => Ok(help_handler(help)),
        Inventory => Ok(inv_handler(state)),
        Look => look_handler(state),
        MoveTo(direction) => move_to_handler(state, direction),
        Quit => Ok(quit_handler(state)),
        Take(item) => take_handler(state, item),
        Unknown => Ok(unknown_handler()),
        UseItem(item) => use_handler(state, item),
    }
}

/// Parse and run one line of input, returning the text to show and whether to continue.
pub fn evaluate_line(state: &mut GameState, help: &[HelpCommand], line: &str) -> (ReplControl, Result<String, GameError>) {
    let command = parse_command(line);
    let control = if command.is_quit() {
        ReplControl::Quit
    } else {
        ReplControl::Continue
    };
    (control, handle_command(state, help, &command))
}

/// Run the main read–eval–print loop until the user quits or input ends.
pub fn run_repl(state: &mut GameState, help: &[HelpCommand]) {
    let mut input_manager = InputManager::new();
    let prompt = "> ".prompt_style().to_string();
    let mut turn = 0usize;
    loop {
        let line = match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => line,
            Ok(InputEvent::Eof) => "quit".to_string(),
            Ok(InputEvent::Interrupted) => {
                println!("Command canceled.");
                continue;
            },
            Err(err) => {
                error!("failed to read input: {err}");
                println!("{}", "Failed to read input. Try again.".error_style());
                continue;
            },
        };
        turn += 1;
        info!("================> TURN {turn}: '{}' <================", line.trim());
        let (control, response) = evaluate_line(state, help, &line);
        match response {
            Ok(text) => println!("{}", fill(&text, termwidth()).description_style()),
            Err(err) => {
                if let GameError::RoomNotFound(_) = err {
                    error!("{err}");
                }
                println!("{}", err.to_string().error_style());
            },
        }
        if control == ReplControl::Quit {
            break;
        }
    }
}
