//! End-to-end pipeline tests over fixture files on disk.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crime_explorer::data::{AttributeCatalog, DataProcessor, DatasetLoader};
use crime_explorer::stats::MissingValueAnalyzer;
use crime_explorer::{DATASET_FILE, DESCRIPTION_FILE, HEADER_FILE, ROW_FILTER_COLUMN};

/// Column layout: 6 features (one sparse, one with a single gap in
/// `otherPerCap`) followed by 18 fully populated targets.
fn fixture_names() -> Vec<String> {
    let mut names = vec![
        "pctUrban".to_string(),
        "medIncome".to_string(),
        "policePerPop".to_string(),
        ROW_FILTER_COLUMN.to_string(),
        "pctPoverty".to_string(),
        "pctUnemployed".to_string(),
    ];
    for i in 0..18 {
        names.push(format!("target{i:02}"));
    }
    names
}

fn write_fixtures(dir: &Path) {
    let names = fixture_names();

    let header: String = names
        .iter()
        .map(|n| format!("@attribute {n} numeric\n"))
        .collect();
    fs::write(dir.join(HEADER_FILE), header).unwrap();

    let descriptions: String = names
        .iter()
        .map(|n| format!("{n}: description of {n}\n"))
        .collect();
    fs::write(dir.join(DESCRIPTION_FILE), descriptions).unwrap();

    // 4 rows; policePerPop is missing in 3 of them, otherPerCap in 1
    let mut rows = String::new();
    for row in 0..4 {
        let police = if row < 3 { "?" } else { "7" };
        let other = if row == 2 { "?" } else { "3" };
        let mut fields = vec![
            "1".to_string(),
            "2".to_string(),
            police.to_string(),
            other.to_string(),
            "5".to_string(),
            "6".to_string(),
        ];
        for t in 0..18 {
            fields.push(format!("{t}"));
        }
        rows.push_str(&fields.join(","));
        rows.push('\n');
    }
    fs::write(dir.join(DATASET_FILE), rows).unwrap();
}

fn load_fixture(dir: &Path) -> (AttributeCatalog, polars::prelude::DataFrame) {
    let catalog =
        AttributeCatalog::load(&dir.join(HEADER_FILE), &dir.join(DESCRIPTION_FILE)).unwrap();
    let df = DatasetLoader::load_csv(&dir.join(DATASET_FILE), catalog.names()).unwrap();
    (catalog, df)
}

#[test]
fn catalog_covers_every_header_token() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let (catalog, _) = load_fixture(dir.path());
    let names = fixture_names();

    assert_eq!(catalog.len(), names.len());
    for name in &names {
        assert_eq!(
            catalog.description(name),
            Some(format!("description of {name}").as_str())
        );
    }
}

#[test]
fn null_counts_equal_sentinel_occurrences() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let (_, df) = load_fixture(dir.path());

    assert_eq!(df.column("policePerPop").unwrap().null_count(), 3);
    assert_eq!(df.column(ROW_FILTER_COLUMN).unwrap().null_count(), 1);
    assert_eq!(df.column("pctUrban").unwrap().null_count(), 0);
    assert_eq!(df.column("target00").unwrap().null_count(), 0);
}

#[test]
fn report_is_nonzero_only_sorted_descending_with_percentages() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let (catalog, df) = load_fixture(dir.path());
    let report = MissingValueAnalyzer::analyze(&df, &catalog);

    assert_eq!(report.total_rows, 4);
    assert_eq!(report.entries.len(), 2);
    assert_eq!(report.entries[0].name, "policePerPop");
    assert_eq!(report.entries[0].percentage, 0.75);
    assert_eq!(report.entries[1].name, ROW_FILTER_COLUMN);
    assert_eq!(report.entries[1].percentage, 0.25);
    assert_eq!(
        report.entries[0].description.as_deref(),
        Some("description of policePerPop")
    );
}

#[test]
fn cleaning_drops_sparse_columns_then_null_rows() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let (catalog, df) = load_fixture(dir.path());
    let report = MissingValueAnalyzer::analyze(&df, &catalog);

    let sparse = report.sparse_columns();
    assert_eq!(sparse, vec!["policePerPop"]);

    let df = DataProcessor::drop_columns(&df, &sparse);
    assert_eq!(df.width(), 23);

    let remaining = MissingValueAnalyzer::analyze(&df, &catalog);
    assert_eq!(remaining.entries.len(), 1);
    assert_eq!(remaining.entries[0].name, ROW_FILTER_COLUMN);

    let df = DataProcessor::drop_null_rows(&df, ROW_FILTER_COLUMN).unwrap();
    assert_eq!(df.height(), 3);
    assert!(MissingValueAnalyzer::analyze(&df, &catalog).is_empty());
}

#[test]
fn split_sends_the_last_18_names_to_targets() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());

    let (catalog, df) = load_fixture(dir.path());
    let df = DataProcessor::drop_columns(&df, &["policePerPop".to_string()]);

    let (features, targets) = catalog.split_variables(&DatasetLoader::column_names(&df));
    assert_eq!(targets.len(), 18);
    assert_eq!(targets[0], "target00");
    assert_eq!(targets[17], "target17");
    assert_eq!(
        features,
        vec![
            "pctUrban",
            "medIncome",
            ROW_FILTER_COLUMN,
            "pctPoverty",
            "pctUnemployed"
        ]
    );
}

// The worked example: header [a, b, c], one row "1,?,3" -> column b is
// 100% missing and flagged for removal.
#[test]
fn single_row_sentinel_example() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(HEADER_FILE),
        "@attribute a numeric\n@attribute b numeric\n@attribute c numeric\n",
    )
    .unwrap();
    fs::write(
        dir.path().join(DESCRIPTION_FILE),
        "a: foo\nb: bar\nc: baz\n",
    )
    .unwrap();
    fs::write(dir.path().join(DATASET_FILE), "1,?,3\n").unwrap();

    let (catalog, df) = load_fixture(dir.path());
    let report = MissingValueAnalyzer::analyze(&df, &catalog);

    assert_eq!(report.entries.len(), 1);
    let entry = &report.entries[0];
    assert_eq!(entry.name, "b");
    assert_eq!(entry.count, 1);
    assert_eq!(entry.percentage, 1.0);
    assert_eq!(entry.description.as_deref(), Some("bar"));
    assert_eq!(report.sparse_columns(), vec!["b"]);
}
