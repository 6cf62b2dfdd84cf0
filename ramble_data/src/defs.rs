use indexmap::IndexMap;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Stable identifier used for rooms in a `GameDef`.
pub type Id = String;

/// Top-level game definition as read from a game file.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct GameDef {
    pub start_room: Id,
    #[serde(default)]
    pub rooms: BTreeMap<Id, RoomDef>,
    /// Extra item behaviors layered over the engine's built-in effects.
    #[serde(default)]
    pub item_effects: BTreeMap<String, ItemEffectDef>,
}

/// Room definition used by the engine at load time.
///
/// Older game files list room items under `item_names`; both spellings are accepted.
/// Exits keep the order they are written in.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RoomDef {
    pub description: String,
    #[serde(default)]
    pub exits: IndexMap<String, Id>,
    #[serde(default, alias = "item_names")]
    pub items: Vec<String>,
}

/// What happens when the player uses an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemEffectDef {
    Light,
    Consume,
    None,
}
