//! Where previewed contents come from.

/// A previewable container.
pub trait PreviewSource<E> {
    /// Slot contents, indexed by slot. May contain empty entries.
    fn inventory(&self) -> &[E];

    /// Number of slots the container declares.
    fn capacity(&self) -> usize;

    /// Slots per row in full mode. Non-positive means "use the default".
    fn max_row_size(&self) -> i32 {
        0
    }
}

/// An owned copy of a container's slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSnapshot<E> {
    /// Slot contents.
    pub slots: Vec<E>,
    /// Declared slot count.
    pub capacity: usize,
    /// Declared row size, non-positive for the default.
    pub row_size: i32,
}

impl<E> ContainerSnapshot<E> {
    /// Creates a snapshot whose capacity is its slot count.
    #[must_use]
    pub fn new(slots: Vec<E>) -> Self {
        let capacity = slots.len();
        Self {
            slots,
            capacity,
            row_size: 0,
        }
    }

    /// Sets the declared row size.
    #[must_use]
    pub fn with_row_size(mut self, row_size: i32) -> Self {
        self.row_size = row_size;
        self
    }
}

impl<E> PreviewSource<E> for ContainerSnapshot<E> {
    fn inventory(&self) -> &[E] {
        &self.slots
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn max_row_size(&self) -> i32 {
        self.row_size
    }
}
