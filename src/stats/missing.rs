//! Missing Value Analyzer Module
//! Computes per-column null counts, percentages and sparse-column flags.

use polars::prelude::*;
use rayon::prelude::*;

use crate::data::AttributeCatalog;

/// Columns whose missing fraction exceeds this are flagged for removal.
pub const SPARSE_THRESHOLD: f64 = 0.5;

/// Missing-value summary for a single column.
#[derive(Debug, Clone)]
pub struct MissingEntry {
    pub name: String,
    pub count: usize,
    /// Fraction of rows missing, rounded to 2 decimals.
    pub percentage: f64,
    pub description: Option<String>,
}

impl MissingEntry {
    pub fn is_sparse(&self) -> bool {
        self.percentage > SPARSE_THRESHOLD
    }
}

/// Per-column missing-value report over one DataFrame snapshot.
///
/// Holds only columns with a non-zero null count, sorted descending by
/// count.
#[derive(Debug, Clone)]
pub struct MissingReport {
    pub total_rows: usize,
    pub entries: Vec<MissingEntry>,
}

/// Handles missing-value computations with multi-threading support.
pub struct MissingValueAnalyzer;

impl MissingValueAnalyzer {
    /// Scan every column for nulls and build the report. Descriptions are
    /// attached from the catalog where available.
    pub fn analyze(df: &DataFrame, catalog: &AttributeCatalog) -> MissingReport {
        let total_rows = df.height();

        // Use rayon for the per-column scan
        let counts: Vec<(String, usize)> = df
            .get_columns()
            .par_iter()
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect();

        let mut entries: Vec<MissingEntry> = counts
            .into_iter()
            .filter(|(_, count)| *count != 0)
            .map(|(name, count)| {
                let percentage = round2(count as f64 / total_rows as f64);
                let description = catalog.description(&name).map(|s| s.to_string());
                MissingEntry {
                    name,
                    count,
                    percentage,
                    description,
                }
            })
            .collect();

        entries.sort_by(|a, b| b.count.cmp(&a.count));

        MissingReport {
            total_rows,
            entries,
        }
    }
}

impl MissingReport {
    /// Names of columns exceeding the sparse threshold.
    pub fn sparse_columns(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.is_sparse())
            .map(|e| e.name.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Round to 2 decimal places, matching the original report format.
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}
