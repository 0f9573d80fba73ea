//! Communities & Crime dataset explorer.
//!
//! Loads the headerless dataset CSV with column names taken from a
//! weka-style header file, attaches attribute descriptions, reports
//! missing-value statistics, drops sparse columns, and splits the
//! surviving columns into feature/target sets for inspection.

pub mod data;
pub mod report;
pub mod stats;

/// Weka header file: one `@attribute <name> <type>` line per column.
pub const HEADER_FILE: &str = "unnormalized_header.txt";
/// Attribute descriptions, one `name: text` line per column.
pub const DESCRIPTION_FILE: &str = "header_description.txt";
/// The dataset itself, comma-separated with no header row.
pub const DATASET_FILE: &str = "crime_data_unnormalized.txt";

/// Rows with a missing value in this column are deleted during cleaning.
pub const ROW_FILTER_COLUMN: &str = "otherPerCap";
