//! Command module
//!
//! Describes possible commands used during gameplay.
use variantly::Variantly;

/// Commands that can be executed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Variantly)]
pub enum Command {
    Help,
    Inventory,
    Look,
    MoveTo(String),
    Quit,
    Take(String),
    Unknown,
    UseItem(String),
}

/// Parses an input string and returns a corresponding `Command` if recognized.
///
/// Input is matched case-insensitively; item and direction names may span several words.
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["look"] => Command::Look,
        ["inventory" | "inv"] => Command::Inventory,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        ["go", rest @ ..] if !rest.is_empty() => Command::MoveTo(rest.join(" ")),
        ["take", rest @ ..] if !rest.is_empty() => Command::Take(rest.join(" ")),
        ["use", rest @ ..] if !rest.is_empty() => Command::UseItem(rest.join(" ")),
        _ => Command::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_word_commands() {
        assert_eq!(parse_command("look"), Command::Look);
        assert_eq!(parse_command("inventory"), Command::Inventory);
        assert_eq!(parse_command("inv"), Command::Inventory);
        assert_eq!(parse_command("help"), Command::Help);
        assert!(parse_command("quit").is_quit());
        assert!(parse_command("exit").is_quit());
    }

    #[test]
    fn normalizes_case_and_whitespace() {
        assert_eq!(parse_command("  GO   North \n"), Command::MoveTo("north".into()));
        assert_eq!(parse_command("Take Torch"), Command::Take("torch".into()));
    }

    #[test]
    fn keeps_multi_word_targets() {
        assert_eq!(parse_command("take brass lamp"), Command::Take("brass lamp".into()));
        assert_eq!(parse_command("use old key"), Command::UseItem("old key".into()));
    }

    #[test]
    fn rejects_incomplete_or_unknown_input() {
        assert!(parse_command("go").is_unknown());
        assert!(parse_command("take").is_unknown());
        assert!(parse_command("dance wildly").is_unknown());
        assert!(parse_command("").is_unknown());
        assert!(parse_command("look around").is_unknown());
    }
}
