//! Console Reporter Module
//! Formats the dataset summary, missing-value tables and variable listings.

use polars::prelude::*;

use crate::data::{AttributeCatalog, DatasetLoader};
use crate::stats::{MissingEntry, MissingReport};

/// Width of the name column in printed tables.
const NAME_WIDTH: usize = 24;

/// Print the `info()` style summary: shape plus per-dtype column counts.
pub fn print_summary(df: &DataFrame) {
    println!(
        "Dataset: {} rows x {} columns",
        df.height(),
        df.width()
    );
    for (dtype, count) in DatasetLoader::dtype_counts(df) {
        println!("  {dtype}: {count} columns");
    }
}

/// Print a missing-value table under the given title.
pub fn print_missing(title: &str, report: &MissingReport) {
    println!("\n\n{title}");
    if report.is_empty() {
        println!("  (none)");
        return;
    }

    println!(
        "{:<width$} {:>8} {:>12}",
        "attribute",
        "count",
        "percentage",
        width = NAME_WIDTH
    );
    for entry in &report.entries {
        println!("{}", format_entry(entry));
    }
}

/// One table row: name, count, percentage and description when present.
pub fn format_entry(entry: &MissingEntry) -> String {
    let mut row = format!(
        "{:<width$} {:>8} {:>12.2}",
        entry.name,
        entry.count,
        entry.percentage,
        width = NAME_WIDTH
    );
    if let Some(descr) = &entry.description {
        row.push_str("  ");
        row.push_str(descr);
    }
    row
}

/// Print the descriptions of columns about to be dropped for sparsity.
pub fn print_dropped(report: &MissingReport, dropped: &[String]) {
    println!("\n\nDropping columns with more than 50% missing values:\n");
    for name in dropped {
        let description = report
            .entries
            .iter()
            .find(|e| &e.name == name)
            .and_then(|e| e.description.as_deref())
            .unwrap_or("(no description)");
        println!("{:<width$} {}", name, description, width = NAME_WIDTH);
    }
}

/// Print the target name list and each feature with its description.
pub fn print_variables(
    features: &[String],
    targets: &[String],
    catalog: &AttributeCatalog,
) {
    println!("\n\nDependent variables:\n");
    for name in targets {
        println!("{name}");
    }

    println!("\n\nIndependent variables:\n");
    for name in features {
        let description = catalog.description(name).unwrap_or("(no description)");
        println!("{name} : {description}");
    }
}
