use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Sort direction for the active sort column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Flip ascending <-> descending.
    pub fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// The single active sort column and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Column key being sorted
    pub key: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortState {
    /// Ascending sort on the given column key.
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }
}

/// Stable in-place sort on the raw value under `sort.key`.
///
/// Ties keep their relative order, so re-sorting with the same state is
/// idempotent and toggling the direction twice restores the original order
/// for distinct keys.
pub fn sort_records(records: &mut [Record], sort: &SortState) {
    records.sort_by(|a, b| {
        let ordering = a.get(&sort.key).compare(b.get(&sort.key));
        match sort.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}
