//! Data module - catalog parsing, CSV loading and cleaning

mod loader;
mod processor;
mod schema;

pub use loader::{DatasetLoader, LoaderError, MISSING_MARKER};
pub use processor::{DataProcessor, ProcessorError};
pub use schema::{AttributeCatalog, SchemaError, TARGET_COLUMN_COUNT};
