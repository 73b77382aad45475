//! Preview drawing.
//!
//! The preview never draws pixels itself. It hands entries and positions to
//! a [`PreviewCanvas`] supplied by the host. [`CommandBuffer`] is a canvas
//! that records those calls as [`RenderCommand`]s for hosts that consume a
//! command list per frame.

/// Count suffixes for abbreviated labels, by powers of 1000.
const COUNT_SUFFIXES: [&str; 3] = ["K", "M", "B"];

/// Drawing primitives provided by the host.
///
/// Coordinates are absolute screen pixels.
pub trait PreviewCanvas<E> {
    /// Draws the entry's sprite with its top-left corner at `(x, y)`.
    fn draw_entry(&mut self, entry: &E, x: i32, y: i32);

    /// Draws the count overlay of a slot. `label` may be empty.
    fn draw_count_label(&mut self, entry: &E, x: i32, y: i32, label: &str);

    /// Draws the entry's tooltip at the mouse position.
    fn draw_tooltip(&mut self, entry: &E, mouse_x: i32, mouse_y: i32);

    /// Draws the hover highlight over the slot whose corner is `(x, y)`.
    fn draw_highlight(&mut self, x: i32, y: i32);
}

/// A recorded canvas call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderCommand<E> {
    /// Entry sprite.
    Entry {
        /// Entry drawn.
        entry: E,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
    },
    /// Count overlay.
    CountLabel {
        /// Entry the label belongs to.
        entry: E,
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
        /// Text, empty for single items.
        label: String,
    },
    /// Hover tooltip.
    Tooltip {
        /// Entry described.
        entry: E,
        /// Mouse X.
        x: i32,
        /// Mouse Y.
        y: i32,
    },
    /// Slot highlight.
    Highlight {
        /// X position.
        x: i32,
        /// Y position.
        y: i32,
    },
}

/// Canvas that records every call.
#[derive(Debug, Clone)]
pub struct CommandBuffer<E> {
    commands: Vec<RenderCommand<E>>,
}

impl<E> CommandBuffer<E> {
    /// Creates an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            commands: Vec::with_capacity(128),
        }
    }

    /// Begins a new frame.
    pub fn begin_frame(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded so far.
    #[must_use]
    pub fn commands(&self) -> &[RenderCommand<E>] {
        &self.commands
    }

    /// Takes the recorded commands, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<RenderCommand<E>> {
        std::mem::take(&mut self.commands)
    }

    /// Returns the total command count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl<E> Default for CommandBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Clone> PreviewCanvas<E> for CommandBuffer<E> {
    fn draw_entry(&mut self, entry: &E, x: i32, y: i32) {
        self.commands.push(RenderCommand::Entry {
            entry: entry.clone(),
            x,
            y,
        });
    }

    fn draw_count_label(&mut self, entry: &E, x: i32, y: i32, label: &str) {
        self.commands.push(RenderCommand::CountLabel {
            entry: entry.clone(),
            x,
            y,
            label: label.to_owned(),
        });
    }

    fn draw_tooltip(&mut self, entry: &E, mouse_x: i32, mouse_y: i32) {
        self.commands.push(RenderCommand::Tooltip {
            entry: entry.clone(),
            x: mouse_x,
            y: mouse_y,
        });
    }

    fn draw_highlight(&mut self, x: i32, y: i32) {
        self.commands.push(RenderCommand::Highlight { x, y });
    }
}

/// Shortens a count to at most three digits and a suffix (`12345` -> `12K`).
///
/// Digits are truncated, not rounded.
#[must_use]
pub fn abbreviate_count(count: u32) -> String {
    let mut value = count;
    let mut suffix = None;

    for next in COUNT_SUFFIXES {
        if value < 1000 {
            break;
        }
        value /= 1000;
        suffix = Some(next);
    }

    match suffix {
        Some(suffix) => format!("{value}{suffix}"),
        None => value.to_string(),
    }
}

/// Slot count label: nothing for a single item.
///
/// Stacks may exceed their usual maximum once merged, so the label is
/// always built here rather than by the host.
#[must_use]
pub fn count_label(quantity: u32, short: bool) -> String {
    if quantity == 1 {
        String::new()
    } else if short {
        abbreviate_count(quantity)
    } else {
        quantity.to_string()
    }
}
