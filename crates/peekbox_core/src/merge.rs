//! # Merge Pass
//!
//! Collapses a container's slots into [`MergedGroup`]s.
//!
//! Every group remembers, slot by slot, which entries went into it, so a
//! full-grid preview can still place each entry at its original position
//! while a compact preview shows one cell per group.
//!
//! Output order is quantity descending, then first slot descending: among
//! groups of equal size, the one that first appeared latest is listed first.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::item::PreviewEntry;
use crate::strategy::MergingStrategy;

/// All entries of a container that share a grouping key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergedGroup<E> {
    /// Running total, attributes per strategy.
    representative: E,
    /// Original slot index -> copy of the entry that occupied it.
    sub_slots: Vec<Option<E>>,
    /// Lowest contributing slot.
    first_slot_seen: usize,
}

impl<E: PreviewEntry> MergedGroup<E> {
    /// Opens a group seeded with the entry at `slot`. `slot < capacity`.
    fn open(capacity: usize, slot: usize, entry: &E, strategy: MergingStrategy) -> Self {
        let mut sub_slots = vec![None; capacity];
        sub_slots[slot] = Some(entry.clone());

        Self {
            representative: strategy.representative(entry),
            sub_slots,
            first_slot_seen: slot,
        }
    }

    /// Adds the entry at `slot`. Does not check keys. `slot < capacity`.
    fn absorb(&mut self, slot: usize, entry: &E) {
        self.sub_slots[slot] = Some(entry.clone());

        let total = self.representative.quantity().saturating_add(entry.quantity());
        self.representative.set_quantity(total);

        if slot < self.first_slot_seen {
            self.first_slot_seen = slot;
        }
    }

    /// The merged entry shown in compact previews.
    #[inline]
    #[must_use]
    pub fn representative(&self) -> &E {
        &self.representative
    }

    /// Total quantity across all contributing slots.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> u32 {
        self.representative.quantity()
    }

    /// Lowest original slot index that contributed to this group.
    #[inline]
    #[must_use]
    pub fn first_slot_seen(&self) -> usize {
        self.first_slot_seen
    }

    /// Number of tracked slots (the container capacity).
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.sub_slots.len()
    }

    /// The entry this group holds at an original slot, if any.
    ///
    /// Out-of-range slots simply hold nothing.
    #[inline]
    #[must_use]
    pub fn sub_entry(&self, slot: usize) -> Option<&E> {
        self.sub_slots.get(slot)?.as_ref()
    }

    /// Per-slot view, indexed by original slot.
    #[inline]
    #[must_use]
    pub fn sub_slots(&self) -> &[Option<E>] {
        &self.sub_slots
    }

    /// Iterates over occupied slots in slot order.
    pub fn filled_slots(&self) -> impl Iterator<Item = (usize, &E)> {
        self.sub_slots
            .iter()
            .enumerate()
            .filter_map(|(slot, entry)| entry.as_ref().map(|e| (slot, e)))
    }

    /// Display order: larger groups first, then the later first slot first.
    #[must_use]
    pub fn display_order(&self, other: &Self) -> Ordering {
        other
            .quantity()
            .cmp(&self.quantity())
            .then_with(|| other.first_slot_seen.cmp(&self.first_slot_seen))
    }
}

/// Merges the slots of a container into display-ordered groups.
///
/// `inventory[i]` is the content of slot `i`. Empty entries are skipped.
/// Each group tracks exactly `capacity` slots; entries at `i >= capacity`
/// have no slot to land in and are dropped.
///
/// Every call starts from scratch and copies what it keeps.
#[must_use]
pub fn merge<E: PreviewEntry>(
    inventory: &[E],
    capacity: usize,
    strategy: MergingStrategy,
) -> Vec<MergedGroup<E>> {
    let mut groups: Vec<MergedGroup<E>> = Vec::new();
    let mut by_key: HashMap<E::Key, usize> = HashMap::new();

    for (slot, entry) in inventory.iter().enumerate() {
        if entry.is_empty() {
            continue;
        }
        if slot >= capacity {
            tracing::trace!(slot, capacity, "entry beyond container capacity skipped");
            continue;
        }

        match by_key.entry(strategy.key_for(entry)) {
            Entry::Occupied(index) => groups[*index.get()].absorb(slot, entry),
            Entry::Vacant(vacant) => {
                vacant.insert(groups.len());
                groups.push(MergedGroup::open(capacity, slot, entry, strategy));
            }
        }
    }

    groups.sort_by(MergedGroup::display_order);

    tracing::trace!(
        slots = inventory.len(),
        capacity,
        groups = groups.len(),
        ?strategy,
        "inventory merged"
    );

    groups
}
