//! Preview widget.
//!
//! [`PreviewState`] is the immutable snapshot of one previewed container;
//! [`PreviewRenderer`] owns it and answers geometry and draw requests.

mod preview;
mod source;
mod state;

pub use preview::PreviewRenderer;
pub use source::{ContainerSnapshot, PreviewSource};
pub use state::{PreviewMode, PreviewState};
