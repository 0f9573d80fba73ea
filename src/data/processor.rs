//! Data Processor Module
//! Handles cleaning operations: dropping sparse columns and null rows.

use polars::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Handles data cleaning operations.
pub struct DataProcessor;

impl DataProcessor {
    /// Drop a set of named columns from the DataFrame. Names not present
    /// in the frame are ignored.
    pub fn drop_columns(df: &DataFrame, names: &[String]) -> DataFrame {
        df.drop_many(names.iter().map(|s| s.as_str()))
    }

    /// Keep only the rows where `column` is non-null.
    pub fn drop_null_rows(df: &DataFrame, column: &str) -> Result<DataFrame, ProcessorError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(col(column).is_not_null())
            .collect()?;
        Ok(filtered)
    }
}
