//! Pagination: page slicing and the bounded page-number window.
//!
//! Pages are 1-indexed. Out-of-range pages (0, or past the last page) are not
//! an error; they produce an empty slice and the window degrades gracefully.

use serde::Serialize;

use crate::record::Record;

/// Number of pages shown on each side of the current page in the window.
pub const DEFAULT_WINDOW_RADIUS: usize = 2;

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageToken {
    /// A concrete, clickable page number
    Page(usize),
    /// A gap between page numbers
    Ellipsis,
}

/// Boundary control (previous/next) with its target page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageControl {
    /// Page this control navigates to
    pub target: usize,
    /// False when the control sits at its boundary
    pub enabled: bool,
}

/// Total page count: `ceil(total_items / page_size)`, 0 for an empty set.
pub fn total_pages(total_items: usize, page_size: usize) -> usize {
    total_items.div_ceil(page_size)
}

/// Half-open index range `[start, end)` of the given page within
/// `total_items` items. Pages beyond the data (including page 0) come back
/// empty rather than clamped.
pub fn page_bounds(total_items: usize, page: usize, page_size: usize) -> (usize, usize) {
    if page == 0 {
        return (0, 0);
    }
    let start = page_size * (page - 1);
    if start >= total_items {
        return (total_items, total_items);
    }
    let end = (start + page_size).min(total_items);
    (start, end)
}

/// The records on the given page.
pub fn page_slice<'a>(records: &'a [Record], page: usize, page_size: usize) -> &'a [Record] {
    let (start, end) = page_bounds(records.len(), page, page_size);
    &records[start..end]
}

/// Page numbers and ellipses to display around `current`.
///
/// The window spans `radius` pages on each side of the current page, plus the
/// first and last page. A boundary page adjacent to the window joins it
/// directly; a larger gap collapses to a single ellipsis. One page or fewer
/// produces no controls at all.
pub fn window(current: usize, total: usize, radius: usize) -> Vec<PageToken> {
    if total <= 1 {
        return Vec::new();
    }

    let surround_start = current.saturating_sub(radius).max(1);
    let surround_end = (current + radius).min(total);

    let mut tokens = Vec::new();

    if surround_start > 2 {
        tokens.push(PageToken::Page(1));
        tokens.push(PageToken::Ellipsis);
    } else if surround_start > 1 {
        tokens.push(PageToken::Page(1));
    }

    for page in surround_start..=surround_end {
        tokens.push(PageToken::Page(page));
    }

    if surround_end + 1 < total {
        tokens.push(PageToken::Ellipsis);
        tokens.push(PageToken::Page(total));
    } else if surround_end < total {
        tokens.push(PageToken::Page(total));
    }

    tokens
}

/// Previous-page control for the current position.
pub fn prev_control(current: usize) -> PageControl {
    PageControl {
        target: current.saturating_sub(1).max(1),
        enabled: current > 1,
    }
}

/// Next-page control for the current position.
pub fn next_control(current: usize, total: usize) -> PageControl {
    PageControl {
        target: (current + 1).min(total.max(1)),
        enabled: current < total,
    }
}
