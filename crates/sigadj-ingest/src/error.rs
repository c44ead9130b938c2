use std::path::PathBuf;

use polars::prelude::PolarsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to read directory {}: {source}", path.display())]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("failed to read CSV {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
