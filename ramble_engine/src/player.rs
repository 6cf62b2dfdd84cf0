//! Player -- where the player stands and what they carry
use crate::{Id, ItemHolder};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Id of the room the player is in.
    pub location: Id,
    /// Item names in the order they were picked up.
    pub inventory: Vec<String>,
}

impl Player {
    pub fn new(location: impl Into<Id>) -> Self {
        Self {
            location: location.into(),
            inventory: Vec::new(),
        }
    }
}

impl ItemHolder for Player {
    fn add_item(&mut self, item: &str) {
        self.inventory.push(item.to_string());
    }

    fn remove_item(&mut self, item: &str) -> bool {
        if let Some(pos) = self.inventory.iter().position(|i| i == item) {
            self.inventory.remove(pos);
            true
        } else {
            false
        }
    }

    fn contains_item(&self, item: &str) -> bool {
        self.inventory.iter().any(|i| i == item)
    }
}
