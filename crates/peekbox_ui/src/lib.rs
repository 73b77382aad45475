//! # PEEKBOX UI
//!
//! Layout engine for the container preview shown inside an item tooltip.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                   PREVIEW PIPELINE                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Source slots → merge() → PreviewState → Draw pass     │
//! │                               ↓             ↓          │
//! │                    slot_at / entry_at   PreviewCanvas  │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! Two display modes share one geometry:
//! - **Full**: one cell per container slot, entries at their original slots.
//! - **Compact**: one cell per merged group, largest first.
//!
//! ## Example
//!
//! ```rust,ignore
//! use peekbox_ui::{PreviewConfig, PreviewMode, PreviewRenderer, CommandBuffer};
//!
//! let mut renderer = PreviewRenderer::default();
//! renderer.set_preview(&slots, 27, 9, &PreviewConfig::default());
//! renderer.set_display_mode(PreviewMode::Compact);
//!
//! let mut canvas = CommandBuffer::new();
//! renderer.draw_items(window_x, window_y, &mut canvas);
//! renderer.draw_slot_highlight(window_x, window_y, mouse_x, mouse_y, &mut canvas);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod error;
pub mod layout;
pub mod render;
pub mod widget;

pub use config::{PreviewConfig, FALLBACK_ROW_SIZE};
pub use error::{ConfigError, ConfigResult};
pub use layout::{SlotMetrics, SlotRect};
pub use render::{abbreviate_count, count_label, CommandBuffer, PreviewCanvas, RenderCommand};
pub use widget::{ContainerSnapshot, PreviewMode, PreviewRenderer, PreviewSource, PreviewState};
