//! CSV file discovery.

use std::path::{Path, PathBuf};

use crate::error::{IngestError, Result};

/// Lists all CSV files in a directory.
///
/// Only regular files with a `.csv` extension (any case) are returned,
/// sorted by file name. Subdirectories are not searched.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(IngestError::DirectoryNotFound {
            path: dir.to_path_buf(),
        });
    }

    let entries = std::fs::read_dir(dir).map_err(|source| IngestError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut files = Vec::new();
    for entry_result in entries {
        let entry = entry_result.map_err(|source| IngestError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && has_csv_extension(&path) {
            files.push(path);
        }
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
}
