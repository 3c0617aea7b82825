use std::fmt;
use std::sync::Arc;

use crate::record::Record;

/// Cell formatter: overrides default value stringification for one column.
pub type CellFormatter = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Schema entry describing how to label, extract, and render one field.
#[derive(Clone)]
pub struct ColumnSpec {
    /// Field key in each record
    pub key: String,
    /// Display header text
    pub label: String,
    /// Excludes the column from search matching and removes its sort affordance
    pub skip_filter: bool,
    /// Optional rendering override; filtering and sorting always use the raw value
    pub formatter: Option<CellFormatter>,
}

impl ColumnSpec {
    /// Create a column with the given key and header label.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            skip_filter: false,
            formatter: None,
        }
    }

    /// Exclude this column from search matching and sorting.
    pub fn skip_filter(mut self) -> Self {
        self.skip_filter = true;
        self
    }

    /// Attach a custom cell formatter.
    pub fn formatted_by<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&Record) -> String + Send + Sync + 'static,
    {
        self.formatter = Some(Arc::new(formatter));
        self
    }

    /// Render one cell for this column: the formatter if present, otherwise
    /// the raw value's display text.
    pub fn render_cell(&self, record: &Record) -> String {
        match &self.formatter {
            Some(f) => f(record),
            None => record.display(&self.key),
        }
    }
}

impl fmt::Debug for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnSpec")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("skip_filter", &self.skip_filter)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
