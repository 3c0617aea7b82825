//! Integration tests for search/filter behavior.
//!
//! These tests verify that searching correctly identifies matching records
//! and handles edge cases like case-insensitivity, empty terms, excluded
//! columns, and the empty-result state.

use paged_table_viewer::column::ColumnSpec;
use paged_table_viewer::record::Record;
use paged_table_viewer::sort::SortState;
use paged_table_viewer::view::{TableView, ViewOptions};

/// Sample dataset with varied content for testing search behavior.
fn sample_records() -> Vec<Record> {
    let rows = [
        (1, "Alice", 30, "New York"),
        (2, "Bob", 25, "Seattle"),
        (3, "Charlie", 35, "Portland"),
        (4, "alice", 28, "Boston"),
        (5, "David", 42, "Chicago"),
        (6, "Eve", 31, "Austin"),
        (7, "Frank", 29, "Denver"),
        (8, "Grace", 33, "Miami"),
        (9, "Henry", 27, "Phoenix"),
        (10, "Ivy", 36, "Dallas"),
    ];
    rows.iter()
        .map(|(id, name, age, city)| {
            Record::new()
                .with("id", *id)
                .with("name", *name)
                .with("age", *age)
                .with("city", *city)
        })
        .collect()
}

fn sample_columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("id", "ID"),
        ColumnSpec::new("name", "Name"),
        ColumnSpec::new("age", "Age"),
        ColumnSpec::new("city", "City"),
    ]
}

fn sample_view() -> TableView {
    let mut options = ViewOptions::new(sample_columns());
    options.data = sample_records();
    options.sort = Some(SortState::ascending("id"));
    TableView::new(options).unwrap()
}

#[test]
fn test_search_matches_expected_rows() {
    let mut view = sample_view();
    let snap = view.set_search_term("alice");

    assert_eq!(snap.total_items, 2, "Should match 'Alice' and 'alice'");
    assert_eq!(snap.source_items, 10, "Source count should be unchanged");
}

#[test]
fn test_search_case_insensitive() {
    let mut view = sample_view();
    let snap = view.set_search_term("ALICE");

    assert_eq!(
        snap.total_items, 2,
        "Case-insensitive search should match both 'Alice' and 'alice'"
    );
}

#[test]
fn test_search_no_matches_is_empty_state() {
    let mut view = sample_view();
    let snap = view.set_search_term("zzzznonexistent");

    assert_eq!(snap.total_items, 0);
    assert!(snap.rows.is_empty());
    assert!(snap.is_empty(), "Zero matches should signal the empty state");
    assert_eq!(snap.caption(), "No matching entries");
    assert_eq!(snap.range_start, 0);
    assert_eq!(snap.range_end, 0);
}

#[test]
fn test_empty_search_returns_all_rows() {
    let mut view = sample_view();
    view.set_search_term("alice");
    let snap = view.set_search_term("");

    assert_eq!(snap.total_items, 10, "Empty term should restore all rows");
}

#[test]
fn test_whitespace_search_returns_all_rows() {
    let mut view = sample_view();
    let snap = view.set_search_term("   ");

    assert_eq!(snap.total_items, 10);
}

#[test]
fn test_search_partial_match() {
    let mut view = sample_view();
    let snap = view.set_search_term("ali");

    assert_eq!(snap.total_items, 2, "Partial 'ali' should match both Alices");
}

#[test]
fn test_search_matches_any_column() {
    let mut view = sample_view();
    let snap = view.set_search_term("seattle");

    assert_eq!(snap.total_items, 1, "Should match on the city column");
    assert!(snap.rows[0].iter().any(|cell| cell == "Seattle"));
}

#[test]
fn test_search_with_numbers() {
    let mut view = sample_view();
    let snap = view.set_search_term("30");

    assert!(
        snap.total_items >= 1,
        "Should match at least the row with age 30"
    );
}

#[test]
fn test_search_skips_excluded_columns() {
    let mut columns = sample_columns();
    columns.push(ColumnSpec::new("secret", "Secret").skip_filter());
    let mut records = sample_records();
    for record in &mut records {
        record.insert("secret", "hidden-token");
    }

    let mut options = ViewOptions::new(columns);
    options.data = records;
    let mut view = TableView::new(options).unwrap();

    let snap = view.set_search_term("hidden-token");
    assert_eq!(
        snap.total_items, 0,
        "Excluded columns must never be consulted by search"
    );
}

#[test]
fn test_search_preserves_sort_order() {
    let mut view = sample_view();
    view.set_sort("name");
    let snap = view.set_search_term("ali");

    // "Alice" < "alice" in byte order
    assert_eq!(snap.rows[0][1], "Alice");
    assert_eq!(snap.rows[1][1], "alice");
}

#[test]
fn test_search_resets_to_page_one() {
    let mut view = sample_view();
    view.set_page(2);
    let snap = view.set_search_term("a");

    assert_eq!(snap.current_page, 1, "Search should jump back to page 1");
}
