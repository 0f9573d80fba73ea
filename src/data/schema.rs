//! Attribute Catalog Module
//! Parses the weka-style header file and the attribute description file.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Number of trailing columns treated as dependent (target) variables.
pub const TARGET_COLUMN_COUNT: usize = 18;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Header line {line_no} has no attribute name token: {line:?}")]
    MalformedHeaderLine { line_no: usize, line: String },
    #[error("Description line {line_no} has no ': ' separator: {line:?}")]
    MalformedDescriptionLine { line_no: usize, line: String },
}

/// Ordered column names plus their human-readable descriptions.
///
/// The two source files are position-aligned: description line `i` belongs
/// to header token `i`. Lengths are not validated against each other; the
/// pairing stops at the shorter file.
#[derive(Debug, Clone)]
pub struct AttributeCatalog {
    names: Vec<String>,
    descriptions: HashMap<String, String>,
}

impl AttributeCatalog {
    /// Load the catalog from a header file and a description file.
    pub fn load(header_path: &Path, description_path: &Path) -> Result<Self, SchemaError> {
        let header_text = read_file(header_path)?;
        let names = parse_header(&header_text)?;

        let description_text = read_file(description_path)?;
        let descriptions = parse_descriptions(&description_text, &names)?;

        Ok(Self {
            names,
            descriptions,
        })
    }

    /// Build a catalog directly from parsed parts.
    pub fn from_parts(names: Vec<String>, descriptions: HashMap<String, String>) -> Self {
        Self {
            names,
            descriptions,
        }
    }

    /// Ordered column names for the dataset.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Description text for a column, if the description file covered it.
    pub fn description(&self, name: &str) -> Option<&str> {
        self.descriptions.get(name).map(|s| s.as_str())
    }

    /// The last 18 header names, in original order. Positional contract:
    /// the split shifts silently if the header file changes column count.
    pub fn target_names(&self) -> &[String] {
        let start = self.names.len().saturating_sub(TARGET_COLUMN_COUNT);
        &self.names[start..]
    }

    /// Partition a set of live dataset columns into (features, targets),
    /// preserving their order. Columns dropped during cleaning simply do
    /// not appear on either side.
    pub fn split_variables(&self, columns: &[String]) -> (Vec<String>, Vec<String>) {
        let targets = self.target_names();
        let mut features = Vec::new();
        let mut found_targets = Vec::new();

        for name in columns {
            if targets.contains(name) {
                found_targets.push(name.clone());
            } else {
                features.push(name.clone());
            }
        }

        (features, found_targets)
    }
}

fn read_file(path: &Path) -> Result<String, SchemaError> {
    fs::read_to_string(path).map_err(|source| SchemaError::Io {
        path: path.display().to_string(),
        source,
    })
}

/// Extract column names from weka `@attribute <name> <type>` lines.
/// The second whitespace-separated token per line is the name.
fn parse_header(text: &str) -> Result<Vec<String>, SchemaError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            line.split_whitespace()
                .nth(1)
                .map(|token| token.to_string())
                .ok_or_else(|| SchemaError::MalformedHeaderLine {
                    line_no: i + 1,
                    line: line.to_string(),
                })
        })
        .collect()
}

/// Map header names to the text after the first `": "` on the matching
/// description line. Pairing is positional and stops at the shorter side.
fn parse_descriptions(
    text: &str,
    names: &[String],
) -> Result<HashMap<String, String>, SchemaError> {
    let mut descriptions = HashMap::new();

    for (i, (line, name)) in text.lines().zip(names.iter()).enumerate() {
        let (_, descr) =
            line.split_once(": ")
                .ok_or_else(|| SchemaError::MalformedDescriptionLine {
                    line_no: i + 1,
                    line: line.to_string(),
                })?;
        descriptions.insert(name.clone(), descr.trim().to_string());
    }

    Ok(descriptions)
}
