//! Preview snapshot and display modes.

use peekbox_core::{merge, MergedGroup, PreviewEntry};

use crate::config::{PreviewConfig, FALLBACK_ROW_SIZE};

/// How the preview grid is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PreviewMode {
    /// One cell per container slot.
    #[default]
    Full,
    /// One cell per merged group.
    Compact,
}

/// Everything needed to lay out one previewed container.
///
/// Built in one go and never patched: a new previewed item means a new
/// state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState<E> {
    groups: Vec<MergedGroup<E>>,
    capacity: usize,
    full_row_size: usize,
    compact_row_size: usize,
    short_item_counts: bool,
}

impl<E> PreviewState<E> {
    /// State of an empty container with no slots.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            groups: Vec::new(),
            capacity: 0,
            full_row_size: FALLBACK_ROW_SIZE,
            compact_row_size: FALLBACK_ROW_SIZE,
            short_item_counts: false,
        }
    }

    /// Merged groups in display order.
    #[must_use]
    pub fn groups(&self) -> &[MergedGroup<E>] {
        &self.groups
    }

    /// Declared container capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Whether compact labels are abbreviated.
    #[must_use]
    pub fn short_item_counts(&self) -> bool {
        self.short_item_counts
    }

    /// Slots per row in the given mode. Always at least 1.
    #[must_use]
    pub fn row_size(&self, mode: PreviewMode) -> usize {
        match mode {
            PreviewMode::Full => self.full_row_size,
            PreviewMode::Compact => self.compact_row_size,
        }
    }

    /// Number of cells the grid holds in the given mode.
    ///
    /// Compact grids always keep at least one cell.
    #[must_use]
    pub fn inventory_size(&self, mode: PreviewMode) -> usize {
        match mode {
            PreviewMode::Full => self.capacity,
            PreviewMode::Compact => self.groups.len().max(1),
        }
    }
}

impl<E: PreviewEntry> PreviewState<E> {
    /// Merges `inventory` and resolves row sizes.
    ///
    /// `declared_row_size` is the container's own row size; non-positive
    /// values fall back to the configured default.
    #[must_use]
    pub fn build(
        inventory: &[E],
        capacity: usize,
        declared_row_size: i32,
        config: &PreviewConfig,
    ) -> Self {
        Self {
            groups: merge(inventory, capacity, config.merging_strategy),
            capacity,
            full_row_size: config.full_row_size(declared_row_size),
            compact_row_size: config.compact_row_size(),
            short_item_counts: config.short_item_counts,
        }
    }

    /// The entry shown in a cell.
    ///
    /// Compact cells show group representatives. Full cells show whichever
    /// group holds that original slot; groups never share a slot.
    #[must_use]
    pub fn entry_at(&self, mode: PreviewMode, slot: usize) -> Option<&E> {
        match mode {
            PreviewMode::Compact => self.groups.get(slot).map(MergedGroup::representative),
            PreviewMode::Full => self.groups.iter().find_map(|group| group.sub_entry(slot)),
        }
    }
}

impl<E> Default for PreviewState<E> {
    fn default() -> Self {
        Self::empty()
    }
}
