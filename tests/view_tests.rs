//! End-to-end scenarios for the view engine: search + pagination combined,
//! empty construction, wholesale data replacement, and formatter dispatch.

use paged_table_viewer::column::ColumnSpec;
use paged_table_viewer::record::Record;
use paged_table_viewer::sort::{SortDirection, SortState};
use paged_table_viewer::view::{TableView, ViewOptions};

/// 25 records; ids 1-12 are tagged "match", the rest "other".
fn tagged_records() -> Vec<Record> {
    (1..=25i64)
        .map(|id| {
            let tag = if id <= 12 { "match" } else { "other" };
            Record::new().with("id", id).with("tag", tag)
        })
        .collect()
}

fn tagged_view() -> TableView {
    let columns = vec![ColumnSpec::new("id", "ID"), ColumnSpec::new("tag", "Tag")];
    let mut options = ViewOptions::new(columns);
    options.data = tagged_records();
    options.page_size = 10;
    TableView::new(options).unwrap()
}

#[test]
fn test_search_then_paginate_end_to_end() {
    let mut view = tagged_view();

    let snap = view.set_search_term("match");
    assert_eq!(snap.total_items, 12);
    assert_eq!(snap.total_pages, 2);
    assert_eq!(snap.rows.len(), 10);
    assert_eq!(snap.range_start, 1);
    assert_eq!(snap.range_end, 10);

    let snap = view.set_page(2);
    assert_eq!(snap.rows.len(), 2);
    assert_eq!(snap.range_start, 11);
    assert_eq!(snap.range_end, 12);
    assert_eq!(snap.caption(), "Showing 11-12 of 12 (filtered from 25)");
}

#[test]
fn test_empty_construction_reports_empty_state() {
    let columns = vec![ColumnSpec::new("id", "ID")];
    let view = TableView::new(ViewOptions::new(columns)).unwrap();
    let snap = view.snapshot();

    assert!(snap.is_empty());
    assert!(snap.rows.is_empty());
    assert!(snap.page_tokens.is_empty());
    assert_eq!(snap.total_pages, 0);
    assert!(!snap.show_search, "Search hidden for empty initial data");
}

#[test]
fn test_replace_data_resets_everything() {
    let mut view = tagged_view();
    view.set_search_term("match");
    view.set_sort("id"); // toggle: construction already sorted by id ascending
    view.set_page(2);
    assert_eq!(view.sort_state().direction, SortDirection::Descending);

    let replacement: Vec<Record> = (100..=104i64)
        .map(|id| Record::new().with("id", id).with("tag", "fresh"))
        .collect();
    let snap = view.replace_data(replacement);

    assert_eq!(snap.source_items, 5);
    assert_eq!(snap.total_items, 5, "Search term is cleared on replace");
    assert_eq!(snap.search_term, "");
    assert_eq!(snap.current_page, 1);
    assert_eq!(
        view.sort_state(),
        &SortState::ascending("id"),
        "Sort returns to the initial state on replace"
    );
    assert_eq!(snap.rows[0][0], "100");
}

#[test]
fn test_replace_data_with_empty_set() {
    let mut view = tagged_view();
    let snap = view.replace_data(Vec::new());

    assert!(snap.is_empty());
    assert_eq!(snap.total_pages, 0);
    assert!(snap.page_tokens.is_empty());
}

#[test]
fn test_formatter_shapes_rows_but_not_filtering() {
    let columns = vec![
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("cents", "Price").formatted_by(|r| {
            let cents = match r.get("cents") {
                paged_table_viewer::record::Value::Number(n) => *n,
                _ => 0.0,
            };
            format!("${:.2}", cents / 100.0)
        }),
    ];
    let mut options = ViewOptions::new(columns);
    options.data = vec![
        Record::new().with("name", "widget").with("cents", 1999),
        Record::new().with("name", "gadget").with("cents", 250),
    ];
    let mut view = TableView::new(options).unwrap();

    let snap = view.snapshot();
    assert_eq!(snap.rows[0][1], "$2.50", "Formatter output appears in rows");

    // Filtering consults the raw value, not the formatted text
    let snap = view.set_search_term("$2.50");
    assert_eq!(snap.total_items, 0);
    let snap = view.set_search_term("250");
    assert_eq!(snap.total_items, 1);
}

#[test]
fn test_sorting_uses_raw_values_not_formatted_text() {
    let columns = vec![
        ColumnSpec::new("n", "N").formatted_by(|r| format!("#{}", r.display("n"))),
    ];
    let mut options = ViewOptions::new(columns);
    options.data = vec![
        Record::new().with("n", 10),
        Record::new().with("n", 2),
        Record::new().with("n", 1),
    ];
    let view = TableView::new(options).unwrap();

    let snap = view.snapshot();
    // numeric order 1, 2, 10 -- not the lexicographic "#1", "#10", "#2"
    let cells: Vec<&str> = snap.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(cells, vec!["#1", "#2", "#10"]);
}

#[test]
fn test_page_size_one() {
    let columns = vec![ColumnSpec::new("id", "ID")];
    let mut options = ViewOptions::new(columns);
    options.data = (1..=3i64).map(|id| Record::new().with("id", id)).collect();
    options.page_size = 1;
    let mut view = TableView::new(options).unwrap();

    assert_eq!(view.total_pages(), 3);
    let snap = view.set_page(2);
    assert_eq!(snap.rows, vec![vec!["2".to_string()]]);
    assert_eq!(snap.range_start, 2);
    assert_eq!(snap.range_end, 2);
}
