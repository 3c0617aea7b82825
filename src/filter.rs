use crate::column::ColumnSpec;
use crate::record::Record;

/// Filter records by case-insensitive substring match against the search term.
///
/// A record survives when at least one column not marked `skip_filter`
/// contains the folded term in its stringified raw value. An empty term
/// (after trimming) keeps every record. Input order is preserved and the
/// input is never mutated.
pub fn filter_records(records: &[Record], term: &str, columns: &[ColumnSpec]) -> Vec<Record> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| {
            columns
                .iter()
                .filter(|col| !col.skip_filter)
                .any(|col| record.display(&col.key).to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
