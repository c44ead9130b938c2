//! Structured error reporting shared by every toolkit crate.
//!
//! Each variant records the [`SourceLocation`] where it was raised. The
//! location is captured by the `#[track_caller]` constructors on
//! [`SigAdjError`], so callers should build errors through those functions
//! rather than the variant literals.

use std::fmt;
use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error;

/// Boxed cause attached to errors that wrap a lower-level failure.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// File and line where an error was raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
}

impl SourceLocation {
    /// Location of the caller, propagated through `#[track_caller]` frames.
    #[track_caller]
    pub fn caller() -> Self {
        let location = Location::caller();
        Self {
            file: location.file(),
            line: location.line(),
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[derive(Debug, Error)]
pub enum SigAdjError {
    /// `column` is the exact name or the resolver pattern that was looked up.
    #[error("column '{column}' not found [{location}]")]
    ColumnNotFound {
        column: String,
        location: SourceLocation,
    },

    #[error("column '{column}' has {distinct} distinct values, expected exactly one [{location}]")]
    MultipleValues {
        column: String,
        distinct: usize,
        location: SourceLocation,
    },

    #[error("column '{column}' has no values [{location}]")]
    EmptyColumn {
        column: String,
        location: SourceLocation,
    },

    #[error("invalid column pattern '{pattern}' [{location}]")]
    InvalidPattern {
        pattern: String,
        location: SourceLocation,
        #[source]
        source: BoxError,
    },

    #[error("project root not found: no ancestor of {} contains '{marker}' [{location}]", start.display())]
    ProjectRootNotFound {
        marker: String,
        start: PathBuf,
        location: SourceLocation,
    },

    #[error("{message} [{location}]")]
    Unexpected {
        message: String,
        location: SourceLocation,
        #[source]
        source: Option<BoxError>,
    },
}

impl SigAdjError {
    #[track_caller]
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
            location: SourceLocation::caller(),
        }
    }

    #[track_caller]
    pub fn multiple_values(column: impl Into<String>, distinct: usize) -> Self {
        Self::MultipleValues {
            column: column.into(),
            distinct,
            location: SourceLocation::caller(),
        }
    }

    #[track_caller]
    pub fn empty_column(column: impl Into<String>) -> Self {
        Self::EmptyColumn {
            column: column.into(),
            location: SourceLocation::caller(),
        }
    }

    #[track_caller]
    pub fn invalid_pattern(pattern: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.into(),
            location: SourceLocation::caller(),
            source: source.into(),
        }
    }

    #[track_caller]
    pub fn project_root_not_found(marker: impl Into<String>, start: impl Into<PathBuf>) -> Self {
        Self::ProjectRootNotFound {
            marker: marker.into(),
            start: start.into(),
            location: SourceLocation::caller(),
        }
    }

    /// Catch-all for faults that have no dedicated variant, keeping the cause.
    #[track_caller]
    pub fn unexpected(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Unexpected {
            message: message.into(),
            location: SourceLocation::caller(),
            source: Some(source.into()),
        }
    }

    #[track_caller]
    pub fn unexpected_message(message: impl Into<String>) -> Self {
        Self::Unexpected {
            message: message.into(),
            location: SourceLocation::caller(),
            source: None,
        }
    }

    /// Where the error was raised.
    pub fn location(&self) -> SourceLocation {
        match self {
            Self::ColumnNotFound { location, .. }
            | Self::MultipleValues { location, .. }
            | Self::EmptyColumn { location, .. }
            | Self::InvalidPattern { location, .. }
            | Self::ProjectRootNotFound { location, .. }
            | Self::Unexpected { location, .. } => *location,
        }
    }

    /// Text of the underlying error, if this error wraps one.
    pub fn cause_message(&self) -> Option<String> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source.to_string()),
            Self::Unexpected {
                source: Some(source),
                ..
            } => Some(source.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SigAdjError>;
