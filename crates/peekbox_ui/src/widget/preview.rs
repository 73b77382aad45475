//! Preview renderer.
//!
//! Geometry is resolved against the current mode's row size. Every lookup
//! is total: pointers outside the grid and slots past the end resolve to
//! `None`, since the mouse can be anywhere.

use peekbox_core::PreviewEntry;

use crate::config::PreviewConfig;
use crate::layout::{SlotMetrics, SlotRect};
use crate::render::{count_label, PreviewCanvas};
use crate::widget::source::PreviewSource;
use crate::widget::state::{PreviewMode, PreviewState};

/// Lays out and draws the preview of one container at a time.
#[derive(Debug, Clone)]
pub struct PreviewRenderer<E> {
    metrics: SlotMetrics,
    mode: PreviewMode,
    state: PreviewState<E>,
}

impl<E: PreviewEntry> PreviewRenderer<E> {
    /// Creates a renderer previewing nothing, in full mode.
    #[must_use]
    pub fn new(metrics: SlotMetrics) -> Self {
        Self {
            metrics,
            mode: PreviewMode::Full,
            state: PreviewState::empty(),
        }
    }

    /// Slot metrics.
    #[must_use]
    pub fn metrics(&self) -> SlotMetrics {
        self.metrics
    }

    /// Current display mode.
    #[must_use]
    pub fn mode(&self) -> PreviewMode {
        self.mode
    }

    /// Current preview state.
    #[must_use]
    pub fn state(&self) -> &PreviewState<E> {
        &self.state
    }

    /// Switches between full and compact layout.
    pub fn set_display_mode(&mut self, mode: PreviewMode) {
        self.mode = mode;
    }

    /// Previews a new container, replacing the previous state.
    pub fn set_preview(
        &mut self,
        inventory: &[E],
        capacity: usize,
        row_size: i32,
        config: &PreviewConfig,
    ) {
        self.replace_state(PreviewState::build(inventory, capacity, row_size, config));
    }

    /// Previews the contents of a [`PreviewSource`].
    pub fn set_preview_from<S: PreviewSource<E>>(&mut self, source: &S, config: &PreviewConfig) {
        self.set_preview(source.inventory(), source.capacity(), source.max_row_size(), config);
    }

    /// Swaps in a state built elsewhere and returns the old one.
    pub fn replace_state(&mut self, state: PreviewState<E>) -> PreviewState<E> {
        tracing::debug!(
            groups = state.groups().len(),
            capacity = state.capacity(),
            full_row_size = state.row_size(PreviewMode::Full),
            compact_row_size = state.row_size(PreviewMode::Compact),
            "preview state replaced"
        );
        std::mem::replace(&mut self.state, state)
    }

    /// Slots per row in the current mode.
    #[must_use]
    pub fn row_size(&self) -> usize {
        self.state.row_size(self.mode)
    }

    /// Number of cells in the current mode, for bounds checks.
    #[must_use]
    pub fn inventory_size(&self) -> usize {
        self.state.inventory_size(self.mode)
    }

    /// Slot under a window-relative point. Not bounded by
    /// [`Self::inventory_size`].
    #[must_use]
    pub fn slot_at(&self, x: i32, y: i32) -> Option<usize> {
        self.metrics.slot_at(x, y, self.row_size())
    }

    /// Entry shown in a cell.
    #[must_use]
    pub fn entry_at(&self, slot: usize) -> Option<&E> {
        self.state.entry_at(self.mode, slot)
    }

    /// Entry under a window-relative point.
    #[must_use]
    pub fn entry_at_point(&self, x: i32, y: i32) -> Option<&E> {
        self.slot_at(x, y).and_then(|slot| self.entry_at(slot))
    }

    /// Window-relative rectangle of a cell.
    #[must_use]
    pub fn rect_for(&self, slot: usize) -> SlotRect {
        self.metrics.rect_for(slot, self.row_size())
    }

    /// Pixel size of the slot grid in the current mode.
    #[must_use]
    pub fn grid_size(&self) -> (i32, i32) {
        self.metrics.grid_size(self.inventory_size(), self.row_size())
    }

    /// Draws every visible cell of a window whose corner is at `(x, y)`.
    pub fn draw_items<C: PreviewCanvas<E>>(&self, x: i32, y: i32, canvas: &mut C) {
        match self.mode {
            PreviewMode::Compact => {
                let short = self.state.short_item_counts();
                for (slot, group) in self.state.groups().iter().enumerate() {
                    self.draw_cell(group.representative(), x, y, slot, short, canvas);
                }
            }
            PreviewMode::Full => {
                for group in self.state.groups() {
                    for (slot, entry) in group.filled_slots() {
                        self.draw_cell(entry, x, y, slot, false, canvas);
                    }
                }
            }
        }
    }

    fn draw_cell<C: PreviewCanvas<E>>(
        &self,
        entry: &E,
        x: i32,
        y: i32,
        slot: usize,
        short: bool,
        canvas: &mut C,
    ) {
        let rect = self.rect_for(slot).translate(x, y);
        let label = count_label(entry.quantity(), short);

        canvas.draw_entry(entry, rect.x, rect.y);
        canvas.draw_count_label(entry, rect.x, rect.y, &label);
    }

    /// Draws the tooltip of the entry under the mouse, if any.
    pub fn draw_inner_tooltip<C: PreviewCanvas<E>>(
        &self,
        x: i32,
        y: i32,
        mouse_x: i32,
        mouse_y: i32,
        canvas: &mut C,
    ) {
        let Some(entry) = self.entry_at_point(mouse_x.saturating_sub(x), mouse_y.saturating_sub(y)) else {
            return;
        };
        canvas.draw_tooltip(entry, mouse_x, mouse_y);
    }

    /// Highlights the cell under the mouse if it is part of the grid.
    pub fn draw_slot_highlight<C: PreviewCanvas<E>>(
        &self,
        x: i32,
        y: i32,
        mouse_x: i32,
        mouse_y: i32,
        canvas: &mut C,
    ) {
        let Some(slot) = self.slot_at(mouse_x.saturating_sub(x), mouse_y.saturating_sub(y)) else {
            return;
        };
        if slot < self.inventory_size() {
            let rect = self.rect_for(slot).translate(x, y);
            canvas.draw_highlight(rect.x, rect.y);
        }
    }
}

impl<E: PreviewEntry> Default for PreviewRenderer<E> {
    fn default() -> Self {
        Self::new(SlotMetrics::STANDARD)
    }
}
