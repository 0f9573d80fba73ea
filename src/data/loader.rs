//! Dataset Loader Module
//! Handles CSV file loading and missing-marker normalization using Polars.

use polars::prelude::*;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Sentinel written in the raw data where an observation is absent.
pub const MISSING_MARKER: &str = "?";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
    #[error("Dataset has {found} columns but the header names {expected}")]
    ColumnCountMismatch { expected: usize, found: usize },
}

/// Loads the headerless dataset CSV and installs externally supplied
/// column names.
pub struct DatasetLoader;

impl DatasetLoader {
    /// Load a CSV file with no header row, naming its columns from the
    /// catalog. The `"?"` missing marker is normalized to a polars null
    /// uniformly across all columns at read time.
    pub fn load_csv(path: &Path, column_names: &[String]) -> Result<DataFrame, LoaderError> {
        let parse_options = CsvParseOptions::default()
            .with_null_values(Some(NullValues::AllColumnsSingle(MISSING_MARKER.into())));

        let mut df = CsvReadOptions::default()
            .with_has_header(false)
            .with_infer_schema_length(Some(10000))
            .with_parse_options(parse_options)
            .try_into_reader_with_file_path(Some(path.to_path_buf()))?
            .finish()?;

        if df.width() != column_names.len() {
            return Err(LoaderError::ColumnCountMismatch {
                expected: column_names.len(),
                found: df.width(),
            });
        }
        df.set_column_names(column_names.iter().map(|s| s.as_str()))?;

        Ok(df)
    }

    /// Get list of column names from a DataFrame.
    pub fn column_names(df: &DataFrame) -> Vec<String> {
        df.get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Per-dtype column counts, the `info()` style schema summary.
    pub fn dtype_counts(df: &DataFrame) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for col in df.get_columns() {
            *counts.entry(col.dtype().to_string()).or_insert(0) += 1;
        }
        counts
    }
}
