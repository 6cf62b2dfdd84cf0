//! Runtime game state.
//!
//! [`GameState`] owns the room graph, the player, item flags and the item effect registry. It is
//! built once by the loader and then mutated by the command handlers in [`crate::repl`].

use std::collections::HashMap;

use log::info;

use crate::{EffectRegistry, GameError, Id, Player, Room};

/// Complete state of a running game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub rooms: HashMap<Id, Room>,
    pub player: Player,
    /// Named item conditions, e.g. `torch_lit`.
    pub item_flags: HashMap<String, bool>,
    pub effects: EffectRegistry,
}

impl GameState {
    /// Start a game in `start_room` with an empty inventory and no flags set.
    pub fn new(rooms: impl IntoIterator<Item = Room>, start_room: impl Into<Id>) -> Self {
        let rooms: HashMap<Id, Room> = rooms.into_iter().map(|room| (room.id.clone(), room)).collect();
        let state = Self {
            rooms,
            player: Player::new(start_room),
            item_flags: HashMap::new(),
            effects: EffectRegistry::default(),
        };
        info!(
            "new GameState created with {} rooms, starting in '{}'",
            state.rooms.len(),
            state.player.location
        );
        state
    }

    /// Id of the room the player is in.
    pub fn current_room(&self) -> &Id {
        &self.player.location
    }

    /// Obtain a reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not in the room graph
    pub fn current_room_ref(&self) -> Result<&Room, GameError> {
        self.rooms
            .get(&self.player.location)
            .ok_or_else(|| GameError::RoomNotFound(self.player.location.clone()))
    }

    /// Obtain a mutable reference to the room the player occupies.
    /// # Errors
    /// - if the player's room id is not in the room graph
    pub fn current_room_mut(&mut self) -> Result<&mut Room, GameError> {
        let location = &self.player.location;
        self.rooms
            .get_mut(location)
            .ok_or_else(|| GameError::RoomNotFound(location.clone()))
    }

    /// True if the named flag has been set to true.
    pub fn flag(&self, name: &str) -> bool {
        self.item_flags.get(name).copied().unwrap_or(false)
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: bool) {
        self.item_flags.insert(name.into(), value);
    }
}

/// Flag recording that `item` has been lit.
pub fn lit_flag(item: &str) -> String {
    format!("{item}_lit")
}

/// Flag recording that `item` has been used up.
pub fn consumed_flag(item: &str) -> String {
    format!("{item}_consumed")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rooms() -> GameState {
        GameState::new(
            [
                Room::new("cave", "A dark cave.").with_exit("north", "forest"),
                Room::new("forest", "A sunlit forest."),
            ],
            "cave",
        )
    }

    #[test]
    fn new_state_starts_empty() {
        let state = two_rooms();
        assert_eq!(state.current_room(), "cave");
        assert!(state.player.inventory.is_empty());
        assert!(state.item_flags.is_empty());
        assert!(state.effects.effect_for("torch").is_light());
    }

    #[test]
    fn current_room_lookup_fails_cleanly() {
        let mut state = two_rooms();
        state.player.location = "attic".into();
        assert_eq!(state.current_room_ref(), Err(GameError::RoomNotFound("attic".into())));
        assert!(state.current_room_mut().is_err());
    }

    #[test]
    fn flags_default_to_false() {
        let mut state = two_rooms();
        assert!(!state.flag("torch_lit"));
        state.set_flag(lit_flag("torch"), true);
        assert!(state.flag("torch_lit"));
        assert_eq!(consumed_flag("bread"), "bread_consumed");
    }
}
