//! # PEEKBOX Core
//!
//! Collapses the raw contents of a container into the groups a preview
//! window displays.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MERGE PIPELINE                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  Raw slots → Skip empties → Group by key → Sort groups   │
//! │      ↓             ↓              ↓             ↓        │
//! │  &[E]        slot index kept  per-slot copy  qty desc,   │
//! │                                              slot desc   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The aggregator is generic over [`PreviewEntry`], so any item model that
//! can derive a grouping key, report its quantity and produce an
//! attribute-free copy can be previewed. [`ItemStack`] is the built-in model.
//!
//! ## Example
//!
//! ```rust,ignore
//! use peekbox_core::{merge, ItemStack, MergingStrategy};
//!
//! let mut slots = vec![ItemStack::empty(); 27];
//! slots[0] = ItemStack::new(DIRT, 64);
//! slots[5] = ItemStack::new(DIRT, 32);
//!
//! let groups = merge(&slots, 27, MergingStrategy::Merge);
//! assert_eq!(groups[0].quantity(), 96);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod item;
pub mod merge;
pub mod strategy;

pub use item::{Components, ItemId, ItemKey, ItemStack, PreviewEntry};
pub use merge::{merge, MergedGroup};
pub use strategy::MergingStrategy;
