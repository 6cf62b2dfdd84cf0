//! Room definitions.
//!
//! Rooms are nodes in the room graph: a description, the items lying around, and named exits
//! leading to other rooms by id.

use std::fmt::Write;

use indexmap::IndexMap;
use ramble_data::RoomDef;

use crate::{Id, ItemHolder};

/// Any visitable location in the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: Id,
    pub description: String,
    /// Item names in the order they were placed.
    pub items: Vec<String>,
    /// Direction name -> destination room id, in the order the game file lists them.
    pub exits: IndexMap<String, Id>,
}

impl ItemHolder for Room {
    fn add_item(&mut self, item: &str) {
        self.items.push(item.to_string());
    }

    fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.items.iter().position(|i| i == item) {
            self.items.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }
}

impl Room {
    /// Create an empty room with no exits.
    pub fn new(id: impl Into<Id>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            items: Vec::new(),
            exits: IndexMap::new(),
        }
    }

    /// Build a runtime room from its definition.
    pub fn from_def(id: &str, def: &RoomDef) -> Self {
        Self {
            id: id.to_string(),
            description: def.description.clone(),
            items: def.items.clone(),
            exits: def.exits.clone(),
        }
    }

    /// Adds an exit, builder style.
    #[must_use]
    pub fn with_exit(mut self, direction: impl Into<String>, to: impl Into<Id>) -> Self {
        self.exits.insert(direction.into(), to.into());
        self
    }

    /// Adds an item, builder style.
    #[must_use]
    pub fn with_item(mut self, item: &str) -> Self {
        self.add_item(item);
        self
    }

    /// Destination of the exit named `direction`, if there is one.
    pub fn exit_to(&self, direction: &str) -> Option<&Id> {
        self.exits.get(direction)
    }

    /// Full text shown on entering or looking around: description, items, then exits.
    pub fn describe(&self) -> String {
        let mut out = self.description.clone();
        if self.items.is_empty() {
            out.push_str("\nYou see nothing of interest.");
        } else {
            out.push_str("\nYou see:");
            for item in &self.items {
                let _ = write!(out, "\n  - {item}");
            }
        }
        out.push_str("\nExits:");
        if self.exits.is_empty() {
            out.push_str(" None");
        } else {
            for direction in self.exits.keys() {
                let _ = write!(out, " {direction}");
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_lists_items_and_exits() {
        let room = Room::new("cave", "A dark cave.")
            .with_item("torch")
            .with_item("rope")
            .with_exit("north", "forest")
            .with_exit("east", "river");
        assert_eq!(
            room.describe(),
            "A dark cave.\nYou see:\n  - torch\n  - rope\nExits: north east"
        );
    }

    #[test]
    fn describe_marks_empty_room() {
        let room = Room::new("void", "Nothing but fog.");
        assert_eq!(
            room.describe(),
            "Nothing but fog.\nYou see nothing of interest.\nExits: None"
        );
    }

    #[test]
    fn remove_item_takes_one_copy() {
        let mut room = Room::new("shed", "A shed.").with_item("nail").with_item("nail");
        assert!(room.remove_item("nail"));
        assert_eq!(room.items, vec!["nail".to_string()]);
        assert!(room.remove_item("nail"));
        assert!(!room.remove_item("nail"));
        assert!(!room.contains_item("nail"));
    }

    #[test]
    fn from_def_copies_fields() {
        let def = RoomDef {
            description: "A sunlit forest.".into(),
            exits: IndexMap::from([("south".to_string(), "cave".to_string())]),
            items: vec!["acorn".into()],
        };
        let room = Room::from_def("forest", &def);
        assert_eq!(room.id, "forest");
        assert_eq!(room.exit_to("south").map(String::as_str), Some("cave"));
        assert!(room.contains_item("acorn"));
    }
}
