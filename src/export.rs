//! Data export functionality for CSV and JSON formats.
//!
//! Exports the current view (the filtered, sorted record set across all
//! pages) using raw cell values rather than display formatting.

use crate::column::ColumnSpec;
use crate::record::Record;

/// Export format selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Export records to a string in the specified format.
///
/// Columns appear in schema order. Returns the serialized string or an error
/// message.
pub fn export_view(
    columns: &[ColumnSpec],
    records: &[Record],
    format: ExportFormat,
) -> Result<String, String> {
    match format {
        ExportFormat::Csv => export_csv(columns, records),
        ExportFormat::Json => export_json(columns, records),
    }
}

/// UTF-8 BOM (Byte Order Mark) for Excel compatibility
const UTF8_BOM: &str = "\u{FEFF}";

/// Export to CSV with column labels as the header row.
fn export_csv(columns: &[ColumnSpec], records: &[Record]) -> Result<String, String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    let headers: Vec<&str> = columns.iter().map(|c| c.label.as_str()).collect();
    wtr.write_record(&headers)
        .map_err(|e| format!("Failed to write CSV headers: {}", e))?;

    for record in records {
        let values: Vec<String> = columns.iter().map(|c| record.display(&c.key)).collect();
        wtr.write_record(&values)
            .map_err(|e| format!("Failed to write CSV row: {}", e))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| format!("Failed to finalize CSV: {}", e))?;

    let csv_content =
        String::from_utf8(bytes).map_err(|e| format!("Invalid UTF-8 in CSV output: {}", e))?;

    // Prepend UTF-8 BOM for Excel compatibility
    Ok(format!("{}{}", UTF8_BOM, csv_content))
}

/// Export to JSON: an array of objects keyed by column key, typed values.
fn export_json(columns: &[ColumnSpec], records: &[Record]) -> Result<String, String> {
    let mut rows_json: Vec<serde_json::Value> = Vec::new();

    for record in records {
        let mut row_obj = serde_json::Map::new();
        for col in columns {
            let value = serde_json::to_value(record.get(&col.key))
                .map_err(|e| format!("Failed to serialize value: {}", e))?;
            row_obj.insert(col.key.clone(), value);
        }
        rows_json.push(serde_json::Value::Object(row_obj));
    }

    serde_json::to_string_pretty(&rows_json).map_err(|e| format!("Failed to serialize JSON: {}", e))
}

/// Save content to a file
pub fn save_to_file(content: &str, path: &str) -> Result<(), String> {
    std::fs::write(path, content).map_err(|e| format!("Failed to write file '{}': {}", path, e))
}
