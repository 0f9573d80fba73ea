//! Crime Explorer - Communities & Crime dataset exploration
//!
//! Loads the dataset, reports missing values, drops sparse columns and
//! prints the feature/target variable listings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crime_explorer::data::{AttributeCatalog, DataProcessor, DatasetLoader};
use crime_explorer::stats::MissingValueAnalyzer;
use crime_explorer::{report, DATASET_FILE, DESCRIPTION_FILE, HEADER_FILE, ROW_FILTER_COLUMN};

#[derive(Parser, Debug)]
#[command(author, version, about = "Explore the Communities & Crime dataset")]
struct Args {
    /// Directory holding the header, description and dataset files
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();
    let args = Args::parse();
    run(&args.data_dir)
}

fn run(data_dir: &Path) -> Result<()> {
    let catalog = AttributeCatalog::load(
        &data_dir.join(HEADER_FILE),
        &data_dir.join(DESCRIPTION_FILE),
    )
    .context("loading attribute catalog")?;
    info!(attributes = catalog.len(), "attribute catalog loaded");

    let df = DatasetLoader::load_csv(&data_dir.join(DATASET_FILE), catalog.names())
        .context("loading dataset")?;
    info!(rows = df.height(), columns = df.width(), "dataset loaded");

    report::print_summary(&df);

    let missing = MissingValueAnalyzer::analyze(&df, &catalog);
    report::print_missing("Missing values", &missing);

    let sparse = missing.sparse_columns();
    report::print_dropped(&missing, &sparse);
    let df = DataProcessor::drop_columns(&df, &sparse);

    let remaining = MissingValueAnalyzer::analyze(&df, &catalog);
    report::print_missing("Remaining missing values", &remaining);

    let df = DataProcessor::drop_null_rows(&df, ROW_FILTER_COLUMN)
        .with_context(|| format!("dropping rows with a missing {ROW_FILTER_COLUMN}"))?;
    info!(rows = df.height(), "rows with missing values removed");

    let (features, targets) = catalog.split_variables(&DatasetLoader::column_names(&df));
    report::print_variables(&features, &targets, &catalog);

    Ok(())
}
