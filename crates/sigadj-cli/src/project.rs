//! Project root discovery and directory setup.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use sigadj_model::{Result, SigAdjError};
use tracing::{error, info};

/// Entry whose presence marks the project root.
pub const DEFAULT_ROOT_MARKER: &str = "src";

/// Directories created by [`setup_directories`] when none are given.
pub const DEFAULT_PROJECT_DIRS: [&str; 4] = ["data", "logs", "reports", "notebook"];

/// Outcome of ensuring one project directory exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryStatus {
    Created,
    AlreadyExists,
}

impl fmt::Display for DirectoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => f.write_str("created"),
            Self::AlreadyExists => f.write_str("already exists"),
        }
    }
}

/// Walk `start` and its ancestors and return the first one containing `marker`.
///
/// # Errors
///
/// Returns [`SigAdjError::ProjectRootNotFound`] when no directory on the way
/// up contains the marker.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf> {
    for dir in start.ancestors() {
        if dir.join(marker).exists() {
            info!(root = %dir.display(), marker, "project root found");
            return Ok(dir.to_path_buf());
        }
    }
    let err = SigAdjError::project_root_not_found(marker, start);
    error!("{err}");
    Err(err)
}

/// Ensure each of `dirs` exists under `root`, creating missing ones.
///
/// Statuses are returned in the order of `dirs`.
///
/// # Errors
///
/// Returns [`SigAdjError::Unexpected`] with the I/O error as cause if a
/// directory cannot be created.
pub fn setup_directories<S: AsRef<str>>(
    root: &Path,
    dirs: &[S],
) -> Result<Vec<(PathBuf, DirectoryStatus)>> {
    let mut statuses = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let path = root.join(dir.as_ref());
        let status = if path.is_dir() {
            DirectoryStatus::AlreadyExists
        } else {
            fs::create_dir_all(&path).map_err(|source| {
                let err = SigAdjError::unexpected(
                    format!("failed to create directory {}", path.display()),
                    source,
                );
                error!("{err}");
                err
            })?;
            DirectoryStatus::Created
        };
        info!(path = %path.display(), %status, "project directory");
        statuses.push((path, status));
    }
    Ok(statuses)
}
