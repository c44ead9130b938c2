//! Feature table type and CSV loading.
//!
//! A [`FeatureTable`] wraps a Polars DataFrame with the name and source file
//! it was loaded from. The frame's column order is the CSV header order and
//! its row order is the file's row order.

use std::path::{Path, PathBuf};

use polars::prelude::{CsvReadOptions, DataFrame, PolarsError, SerReader};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Rows sampled by polars when inferring column types.
pub const SCHEMA_INFERENCE_ROWS: usize = 10_000;

/// A loaded feature table.
#[derive(Debug, Clone)]
pub struct FeatureTable {
    /// Table name, the file stem for tables read from disk.
    pub name: String,
    /// The table contents.
    pub data: DataFrame,
    /// File the table was read from, if any.
    pub source: Option<PathBuf>,
}

impl FeatureTable {
    /// Create an in-memory table without a source file.
    pub fn new(name: impl Into<String>, data: DataFrame) -> Self {
        Self {
            name: name.into(),
            data,
            source: None,
        }
    }

    pub fn row_count(&self) -> usize {
        self.data.height()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Read a CSV file with a header row into a [`FeatureTable`].
///
/// Column types are inferred by polars from the first
/// [`SCHEMA_INFERENCE_ROWS`] rows; numeric columns with gaps load as
/// nullable numerics.
pub fn read_feature_table(path: &Path) -> Result<FeatureTable> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    info!(path = %path.display(), "reading feature table");
    let csv_error = |source: PolarsError| IngestError::Csv {
        path: path.to_path_buf(),
        source,
    };
    let data = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(SCHEMA_INFERENCE_ROWS))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(csv_error)?
        .finish()
        .map_err(csv_error)?;
    debug!(
        rows = data.height(),
        columns = data.width(),
        "feature table loaded"
    );

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(FeatureTable {
        name,
        data,
        source: Some(path.to_path_buf()),
    })
}
