//! Feature table ingestion.

pub mod discovery;
pub mod error;
pub mod table;

pub use discovery::list_csv_files;
pub use error::{IngestError, Result};
pub use table::{FeatureTable, SCHEMA_INFERENCE_ROWS, read_feature_table};
