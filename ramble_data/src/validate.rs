use std::fmt;

use crate::GameDef;

/// Validation error for missing references in a `GameDef`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    MissingReference { kind: &'static str, id: String, context: String },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Check that the start room and every exit target name a defined room.
///
/// ```
/// use std::collections::BTreeMap;
/// use ramble_data::{GameDef, RoomDef, validate_game};
///
/// let mut rooms = BTreeMap::new();
/// rooms.insert(
///     "cave".to_string(),
///     RoomDef {
///         description: "A dark cave.".into(),
///         ..RoomDef::default()
///     },
/// );
/// let game = GameDef {
///     start_room: "cave".into(),
///     rooms,
///     ..GameDef::default()
/// };
/// assert!(validate_game(&game).is_empty());
/// ```
pub fn validate_game(game: &GameDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if game.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "start room missing".to_string(),
        });
    } else if !game.rooms.contains_key(&game.start_room) {
        errors.push(ValidationError::MissingReference {
            kind: "room",
            id: game.start_room.clone(),
            context: "start room".to_string(),
        });
    }

    for (room_id, room) in &game.rooms {
        for (direction, to) in &room.exits {
            if !game.rooms.contains_key(to) {
                errors.push(ValidationError::MissingReference {
                    kind: "room",
                    id: to.clone(),
                    context: format!("exit '{direction}' from room '{room_id}'"),
                });
            }
        }
    }

    errors
}
