//! Merging strategies.

use serde::{Deserialize, Serialize};

use crate::item::PreviewEntry;

/// How auxiliary attributes take part in grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergingStrategy {
    /// Only identical entries merge.
    Separate,
    /// Entries of the same kind merge; the group keeps the first entry's
    /// attributes.
    #[default]
    Merge,
    /// Entries of the same kind merge; the group carries no attributes.
    Ignore,
}

impl MergingStrategy {
    /// Derives the grouping key of `entry` under this strategy.
    #[must_use]
    pub fn key_for<E: PreviewEntry>(self, entry: &E) -> E::Key {
        match self {
            Self::Separate => entry.full_key(),
            Self::Merge | Self::Ignore => entry.kind_key(),
        }
    }

    /// Builds the representative a new group starts from.
    #[must_use]
    pub fn representative<E: PreviewEntry>(self, entry: &E) -> E {
        match self {
            Self::Ignore => entry.without_attributes(),
            Self::Separate | Self::Merge => entry.clone(),
        }
    }
}
