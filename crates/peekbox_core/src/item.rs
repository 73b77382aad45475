//! # Preview Entries
//!
//! The capability set the aggregator needs from an item model, plus the
//! built-in [`ItemStack`] model.

use std::collections::BTreeMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// Unique identifier for an item type.
pub type ItemId = u32;

/// Auxiliary attributes attached to a stack (name, enchantments, dye...).
///
/// Ordered so that two stacks with the same components hash identically.
pub type Components = BTreeMap<String, String>;

/// What the aggregator needs to know about one slot's contents.
///
/// Implementations must make `clone` a full, independent copy: groups keep
/// their own copies and never alias the source inventory.
pub trait PreviewEntry: Clone {
    /// Grouping identity produced by [`PreviewEntry::kind_key`] and
    /// [`PreviewEntry::full_key`].
    type Key: Eq + Hash;

    /// Returns true if the slot holds nothing.
    fn is_empty(&self) -> bool;

    /// Number of items in this entry.
    fn quantity(&self) -> u32;

    /// Overwrites the number of items in this entry.
    fn set_quantity(&mut self, quantity: u32);

    /// Identity of the item kind alone, ignoring auxiliary attributes.
    fn kind_key(&self) -> Self::Key;

    /// Identity of the kind together with every auxiliary attribute.
    fn full_key(&self) -> Self::Key;

    /// A copy with the same kind and quantity but no auxiliary attributes.
    #[must_use]
    fn without_attributes(&self) -> Self;
}

/// Grouping key for [`ItemStack`].
///
/// `components` is `None` for attribute-insensitive keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ItemKey {
    /// The item type.
    pub item_id: ItemId,
    /// The stack's components, when they take part in the identity.
    pub components: Option<Components>,
}

/// A stack of items in a container slot.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemStack {
    /// The item type ID, or 0 for empty slot.
    pub item_id: ItemId,
    /// Number of items in this stack.
    pub count: u32,
    /// Auxiliary attributes.
    #[serde(default)]
    pub components: Components,
}

impl ItemStack {
    /// Creates an empty item stack.
    #[inline]
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a new item stack without components.
    #[inline]
    #[must_use]
    pub fn new(item_id: ItemId, count: u32) -> Self {
        Self {
            item_id,
            count,
            components: Components::new(),
        }
    }

    /// Attaches a component.
    #[must_use]
    pub fn with_component(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.components.insert(key.into(), value.into());
        self
    }

    /// Returns a component value.
    #[must_use]
    pub fn component(&self, key: &str) -> Option<&str> {
        self.components.get(key).map(String::as_str)
    }

    /// Returns true if the stack carries any component.
    #[inline]
    #[must_use]
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }
}

impl PreviewEntry for ItemStack {
    type Key = ItemKey;

    #[inline]
    fn is_empty(&self) -> bool {
        self.count == 0 || self.item_id == 0
    }

    #[inline]
    fn quantity(&self) -> u32 {
        self.count
    }

    #[inline]
    fn set_quantity(&mut self, quantity: u32) {
        self.count = quantity;
    }

    fn kind_key(&self) -> ItemKey {
        ItemKey {
            item_id: self.item_id,
            components: None,
        }
    }

    fn full_key(&self) -> ItemKey {
        ItemKey {
            item_id: self.item_id,
            components: Some(self.components.clone()),
        }
    }

    fn without_attributes(&self) -> Self {
        Self::new(self.item_id, self.count)
    }
}
