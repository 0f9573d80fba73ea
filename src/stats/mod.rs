//! Stats module - missing-value analysis

mod missing;

pub use missing::{MissingEntry, MissingReport, MissingValueAnalyzer, SPARSE_THRESHOLD};
