//! Raw table loading with Polars.
//!
//! The export is read once per screen invocation and treated as
//! read-only. Schema inference is disabled so every cell arrives as a
//! string: the normalizer owns the lossy coercion policy, not the CSV
//! reader.

use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

/// An untyped table: one header row plus string cells.
///
/// `None` means the source field was absent; normalization also treats
/// the empty string as missing, matching the original export's NaN
/// semantics.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self { columns, rows }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Position of a column by name; columns are addressed by name only,
    /// never by position.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}

/// Read a delimited export into a [`RawTable`].
pub fn load_raw_table(path: &Path) -> Result<RawTable> {
    // infer_schema_length = 0 keeps every column as string.
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .with_context(|| format!("Failed to create CSV reader: {}", path.display()))?
        .finish()
        .with_context(|| format!("Failed to read CSV: {}", path.display()))?;

    let columns: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut string_cols = Vec::with_capacity(columns.len());
    for name in &columns {
        let col = df
            .column(name.as_str())
            .with_context(|| format!("Column '{}' not found", name))?
            .str()
            .with_context(|| format!("Column '{}' is not string type", name))?;
        string_cols.push(col);
    }

    let mut rows = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row: Vec<Option<String>> = string_cols
            .iter()
            .map(|col| col.get(idx).map(|s| s.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(RawTable::new(columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_index_is_name_based() {
        let table = RawTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![Some("1".to_string()), None]],
        );
        assert_eq!(table.column_index("b"), Some(1));
        assert_eq!(table.column_index("missing"), None);
        assert_eq!(table.height(), 1);
        assert_eq!(table.width(), 2);
    }

    #[test]
    #[ignore] // Requires the dataset file to be present
    fn test_load_dataset() {
        let table = load_raw_table(Path::new("dataset/zomato.csv")).expect("Failed to load CSV");
        assert!(table.height() > 0);
    }
}
