//! Slot grid geometry.
//!
//! Coordinates are integer pixels relative to the preview window's top-left
//! corner. Slot `n` sits at column `n % row_size`, row `n / row_size`.

/// A rectangle in window pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SlotRect {
    /// X position (left edge).
    pub x: i32,
    /// Y position (top edge).
    pub y: i32,
    /// Width.
    pub width: i32,
    /// Height.
    pub height: i32,
}

impl SlotRect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0,
        y: 0,
        width: 0,
        height: 0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns the right edge (exclusive).
    #[must_use]
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Returns the bottom edge (exclusive).
    #[must_use]
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns true if the point is inside the rectangle.
    #[must_use]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Returns the same rectangle moved by `(dx, dy)`.
    #[must_use]
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy), self.width, self.height)
    }
}

/// Fixed pixel metrics of a slot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotMetrics {
    slot_width: i32,
    slot_height: i32,
    x_offset: i32,
    y_offset: i32,
}

impl SlotMetrics {
    /// 18x18 slots starting 8 pixels in from the window corner.
    pub const STANDARD: Self = Self {
        slot_width: 18,
        slot_height: 18,
        x_offset: 8,
        y_offset: 8,
    };

    /// Creates metrics. Slot sizes are clamped to at least one pixel.
    #[must_use]
    pub fn new(slot_width: i32, slot_height: i32, x_offset: i32, y_offset: i32) -> Self {
        Self {
            slot_width: slot_width.max(1),
            slot_height: slot_height.max(1),
            x_offset,
            y_offset,
        }
    }

    /// Width of one slot.
    #[must_use]
    pub const fn slot_width(&self) -> i32 {
        self.slot_width
    }

    /// Height of one slot.
    #[must_use]
    pub const fn slot_height(&self) -> i32 {
        self.slot_height
    }

    /// Offset of the first slot from the window's left edge.
    #[must_use]
    pub const fn x_offset(&self) -> i32 {
        self.x_offset
    }

    /// Offset of the first slot from the window's top edge.
    #[must_use]
    pub const fn y_offset(&self) -> i32 {
        self.y_offset
    }

    /// Resolves the slot under a window-relative point.
    ///
    /// The pixel just above and left of the first slot still counts as part
    /// of the grid (the slot border). Rows are unbounded: checking the
    /// result against the item count is the caller's job.
    #[must_use]
    pub fn slot_at(&self, x: i32, y: i32, row_size: usize) -> Option<usize> {
        let rel_x = i64::from(x) + 1 - i64::from(self.x_offset);
        let rel_y = i64::from(y) + 1 - i64::from(self.y_offset);
        if rel_x < 0 || rel_y < 0 {
            return None;
        }

        let col = usize::try_from(rel_x / i64::from(self.slot_width)).ok()?;
        let row = usize::try_from(rel_y / i64::from(self.slot_height)).ok()?;
        let row_size = row_size.max(1);
        if col >= row_size {
            return None;
        }

        row.checked_mul(row_size)?.checked_add(col)
    }

    /// Window-relative rectangle of a slot.
    #[must_use]
    pub fn rect_for(&self, slot: usize, row_size: usize) -> SlotRect {
        let row_size = row_size.max(1);
        let col = i32::try_from(slot % row_size).unwrap_or(i32::MAX);
        let row = i32::try_from(slot / row_size).unwrap_or(i32::MAX);

        SlotRect::new(
            self.x_offset.saturating_add(self.slot_width.saturating_mul(col)),
            self.y_offset.saturating_add(self.slot_height.saturating_mul(row)),
            self.slot_width,
            self.slot_height,
        )
    }

    /// Pixel size of a grid of `slots` cells laid out `row_size` wide.
    ///
    /// Narrow grids shrink to the number of cells they hold.
    #[must_use]
    pub fn grid_size(&self, slots: usize, row_size: usize) -> (i32, i32) {
        let row_size = row_size.max(1);
        let cols = slots.min(row_size);
        let rows = slots.div_ceil(row_size);

        (
            self.slot_width.saturating_mul(i32::try_from(cols).unwrap_or(i32::MAX)),
            self.slot_height.saturating_mul(i32::try_from(rows).unwrap_or(i32::MAX)),
        )
    }
}

impl Default for SlotMetrics {
    fn default() -> Self {
        Self::STANDARD
    }
}
