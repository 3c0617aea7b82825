//! Render-ready view state.
//!
//! A [`Snapshot`] is the fully derived output of one view transition: header
//! cells with sort indicators, stringified rows for the current page, and the
//! pagination strip. Consumers draw it; they never derive state themselves.

use serde::Serialize;

use crate::paginate::{PageControl, PageToken};
use crate::sort::SortDirection;

/// One header cell, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderCell {
    /// Column key (used to request a sort on click/keypress)
    pub key: String,
    /// Display label
    pub label: String,
    /// False for columns without a sort affordance
    pub sortable: bool,
    /// Direction indicator when this is the active sort column
    pub sort: Option<SortDirection>,
}

/// Read-only, render-ready state for one view transition.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    /// Header cells in column order
    pub headers: Vec<HeaderCell>,
    /// Stringified cells for the current page, formatter-aware
    pub rows: Vec<Vec<String>>,
    /// Filtered record count
    pub total_items: usize,
    /// Record count before filtering
    pub source_items: usize,
    /// 1-based index of the first displayed row (0 when the page is empty)
    pub range_start: usize,
    /// 1-based index of the last displayed row (0 when the page is empty)
    pub range_end: usize,
    /// Current page number (1-indexed, not clamped)
    pub current_page: usize,
    /// Total page count over the filtered set
    pub total_pages: usize,
    /// Page-number strip around the current page
    pub page_tokens: Vec<PageToken>,
    /// Previous-page boundary control
    pub prev: PageControl,
    /// Next-page boundary control
    pub next: PageControl,
    /// Search term as entered
    pub search_term: String,
    /// Whether the search affordance is shown
    pub show_search: bool,
}

impl Snapshot {
    /// True when no records survive the filter: the consumer should render a
    /// placeholder instead of a table.
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    /// Item-count caption, e.g. `Showing 11-20 of 43` or
    /// `Showing 1-10 of 43 (filtered from 120)`.
    pub fn caption(&self) -> String {
        if self.is_empty() {
            return "No matching entries".to_string();
        }
        let filtered = if self.total_items != self.source_items {
            format!(" (filtered from {})", self.source_items)
        } else {
            String::new()
        };
        format!(
            "Showing {}-{} of {}{}",
            self.range_start, self.range_end, self.total_items, filtered
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginate;

    fn snapshot(total_items: usize, source_items: usize) -> Snapshot {
        Snapshot {
            headers: Vec::new(),
            rows: Vec::new(),
            total_items,
            source_items,
            range_start: if total_items == 0 { 0 } else { 1 },
            range_end: total_items.min(10),
            current_page: 1,
            total_pages: paginate::total_pages(total_items, 10),
            page_tokens: Vec::new(),
            prev: paginate::prev_control(1),
            next: paginate::next_control(1, paginate::total_pages(total_items, 10)),
            search_term: String::new(),
            show_search: true,
        }
    }

    #[test]
    fn test_empty_snapshot_caption() {
        let snap = snapshot(0, 0);
        assert!(snap.is_empty());
        assert_eq!(snap.caption(), "No matching entries");
    }

    #[test]
    fn test_caption_unfiltered() {
        let snap = snapshot(7, 7);
        assert_eq!(snap.caption(), "Showing 1-7 of 7");
    }

    #[test]
    fn test_caption_filtered() {
        let snap = snapshot(7, 40);
        assert_eq!(snap.caption(), "Showing 1-7 of 7 (filtered from 40)");
    }
}
