//! Item behaviors.
//!
//! Items are plain names in this engine; what happens when one is used is looked up in an
//! [`EffectRegistry`] rather than hard-coded per item. The default registry knows that a torch can
//! be lit, and game files may register more through `item_effects`.

use std::collections::{BTreeMap, HashMap};

use ramble_data::ItemEffectDef;
use variantly::Variantly;

/// Anything that holds items by name (a room's floor, the player's pockets).
pub trait ItemHolder {
    fn add_item(&mut self, item: &str);
    /// Removes one copy of `item`, returning false if none was held.
    fn remove_item(&mut self, item: &str) -> bool;
    fn contains_item(&self, item: &str) -> bool;
}

/// The effect of using an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Variantly)]
pub enum ItemEffect {
    /// Sets the item's lit flag once.
    Light,
    /// Removes the item from inventory.
    Consume,
    NoEffect,
}

impl From<ItemEffectDef> for ItemEffect {
    fn from(def: ItemEffectDef) -> Self {
        match def {
            ItemEffectDef::Light => ItemEffect::Light,
            ItemEffectDef::Consume => ItemEffect::Consume,
            ItemEffectDef::None => ItemEffect::NoEffect,
        }
    }
}

/// Maps item names to the effect of using them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectRegistry {
    effects: HashMap<String, ItemEffect>,
}

impl Default for EffectRegistry {
    fn default() -> Self {
        let mut registry = Self::new_empty();
        registry.register("torch", ItemEffect::Light);
        registry
    }
}

impl EffectRegistry {
    /// A registry with no built-in behaviors.
    pub fn new_empty() -> Self {
        Self {
            effects: HashMap::new(),
        }
    }

    /// Register (or replace) the effect for `item`.
    pub fn register(&mut self, item: impl Into<String>, effect: ItemEffect) {
        self.effects.insert(item.into(), effect);
    }

    /// Layer definitions from a game file over the current entries.
    pub fn extend_from_defs(&mut self, defs: &BTreeMap<String, ItemEffectDef>) {
        for (item, def) in defs {
            self.register(item.clone(), ItemEffect::from(*def));
        }
    }

    /// Effect of using `item`; unregistered items have no effect.
    pub fn effect_for(&self, item: &str) -> ItemEffect {
        self.effects.get(item).copied().unwrap_or(ItemEffect::NoEffect)
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}
