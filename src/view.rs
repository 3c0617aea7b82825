//! View-state engine: the stateful orchestrator over filter, sort, and
//! pagination.
//!
//! A [`TableView`] owns the canonical record set and the current search /
//! sort / page state. Every public transition recomputes the derived state
//! and hands back a read-only [`Snapshot`] for the render layer to draw.

use log::debug;
use thiserror::Error;

use crate::column::ColumnSpec;
use crate::filter::filter_records;
use crate::paginate::{self, DEFAULT_WINDOW_RADIUS};
use crate::record::Record;
use crate::snapshot::{HeaderCell, Snapshot};
use crate::sort::{sort_records, SortState};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Construction-time validation failures. Fatal: no partial view is created.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("at least one column is required")]
    NoColumns,
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("initial sort column '{0}' does not match any column")]
    UnknownSortColumn(String),
}

/// Construction options for a [`TableView`].
#[derive(Debug)]
pub struct ViewOptions {
    /// Initial records; the view takes ownership and never mutates a
    /// caller-held collection
    pub data: Vec<Record>,
    /// Column schema (required, non-empty)
    pub columns: Vec<ColumnSpec>,
    /// Rows per page; fixed after construction
    pub page_size: usize,
    /// Whether to expose the search affordance; defaults to true when the
    /// initial data is non-empty
    pub show_search: Option<bool>,
    /// Initial sort; defaults to the first column, ascending
    pub sort: Option<SortState>,
}

impl ViewOptions {
    /// Options with the given schema and all defaults: no data, page size
    /// [`DEFAULT_PAGE_SIZE`], search and sort derived at construction.
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            data: Vec::new(),
            columns,
            page_size: DEFAULT_PAGE_SIZE,
            show_search: None,
            sort: None,
        }
    }
}

/// Stateful presenter for one table.
///
/// Derivation order is fixed: the canonical source is sorted once per
/// sort-state change, the filtered subset is re-derived from the
/// already-sorted source, and pagination slices the filtered subset. Sort
/// order therefore survives any search.
#[derive(Debug)]
pub struct TableView {
    columns: Vec<ColumnSpec>,
    source: Vec<Record>,
    filtered: Vec<Record>,
    search_term: String,
    sort: SortState,
    initial_sort: SortState,
    current_page: usize,
    page_size: usize,
    show_search: bool,
}

impl TableView {
    /// Validate options and build the view.
    ///
    /// Fails when the schema is empty, the page size is zero, or the initial
    /// sort key names no column.
    pub fn new(options: ViewOptions) -> Result<Self, ConfigError> {
        if options.columns.is_empty() {
            return Err(ConfigError::NoColumns);
        }
        if options.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        let sort = options
            .sort
            .unwrap_or_else(|| SortState::ascending(options.columns[0].key.clone()));
        if !options.columns.iter().any(|c| c.key == sort.key) {
            return Err(ConfigError::UnknownSortColumn(sort.key));
        }
        let show_search = options.show_search.unwrap_or(!options.data.is_empty());

        let mut view = Self {
            columns: options.columns,
            source: options.data,
            filtered: Vec::new(),
            search_term: String::new(),
            initial_sort: sort.clone(),
            sort,
            current_page: 1,
            page_size: options.page_size,
            show_search,
        };
        view.reinitialize();
        Ok(view)
    }

    /// Reset to the construction state over the current source: empty search,
    /// initial sort, page 1.
    fn reinitialize(&mut self) {
        self.search_term.clear();
        self.sort = self.initial_sort.clone();
        sort_records(&mut self.source, &self.sort);
        self.filtered = self.source.clone();
        self.current_page = 1;
    }

    /// Apply a search term: refilter from the already-sorted source and jump
    /// back to page 1.
    pub fn set_search_term(&mut self, term: &str) -> Snapshot {
        self.search_term = term.to_string();
        self.filtered = filter_records(&self.source, term, &self.columns);
        self.current_page = 1;
        debug!(
            "search {:?}: {} of {} records",
            term,
            self.filtered.len(),
            self.source.len()
        );
        self.snapshot()
    }

    /// Sort by the given column: toggles direction when it is already the
    /// active key, otherwise starts ascending. Resets to page 1. Unknown keys
    /// and columns without a sort affordance are ignored.
    pub fn set_sort(&mut self, key: &str) -> Snapshot {
        if !self.is_sortable(key) {
            return self.snapshot();
        }
        if self.sort.key == key {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortState::ascending(key);
        }
        sort_records(&mut self.source, &self.sort);
        self.filtered = filter_records(&self.source, &self.search_term, &self.columns);
        self.current_page = 1;
        debug!("sort by {:?} {:?}", self.sort.key, self.sort.direction);
        self.snapshot()
    }

    /// Jump to a page. The page number is stored as given; out-of-range pages
    /// yield an empty slice rather than an error or a clamp.
    pub fn set_page(&mut self, page: usize) -> Snapshot {
        self.current_page = page;
        self.snapshot()
    }

    /// Replace the source wholesale and re-run the construction path: search
    /// cleared, sort back to the initial state, page 1.
    pub fn replace_data(&mut self, records: Vec<Record>) -> Snapshot {
        debug!("replace data: {} records", records.len());
        self.source = records;
        self.reinitialize();
        self.snapshot()
    }

    /// Whether a sort request on this key would be honored.
    pub fn is_sortable(&self, key: &str) -> bool {
        self.columns
            .iter()
            .any(|c| c.key == key && !c.skip_filter)
    }

    /// The column schema.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// The filtered, sorted record set (all pages).
    pub fn filtered_records(&self) -> &[Record] {
        &self.filtered
    }

    /// The search term as last entered.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The active sort column and direction.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current page number (1-indexed).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Total pages over the filtered set.
    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.filtered.len(), self.page_size)
    }

    /// Derive the render-ready snapshot for the current state.
    pub fn snapshot(&self) -> Snapshot {
        let total_items = self.filtered.len();
        let total_pages = paginate::total_pages(total_items, self.page_size);
        let (start, end) = paginate::page_bounds(total_items, self.current_page, self.page_size);

        let rows: Vec<Vec<String>> =
            paginate::page_slice(&self.filtered, self.current_page, self.page_size)
                .iter()
                .map(|record| {
                    self.columns
                        .iter()
                        .map(|col| col.render_cell(record))
                        .collect()
                })
                .collect();

        let headers: Vec<HeaderCell> = self
            .columns
            .iter()
            .map(|col| HeaderCell {
                key: col.key.clone(),
                label: col.label.clone(),
                sortable: !col.skip_filter,
                sort: (col.key == self.sort.key).then_some(self.sort.direction),
            })
            .collect();

        Snapshot {
            headers,
            rows,
            total_items,
            source_items: self.source.len(),
            range_start: if start == end { 0 } else { start + 1 },
            range_end: end,
            current_page: self.current_page,
            total_pages,
            page_tokens: paginate::window(self.current_page, total_pages, DEFAULT_WINDOW_RADIUS),
            prev: paginate::prev_control(self.current_page),
            next: paginate::next_control(self.current_page, total_pages),
            search_term: self.search_term.clone(),
            show_search: self.show_search,
        }
    }
}
