//! Data-transformation and validation utilities for feature tables.
//!
//! This crate holds the operations used to prepare feature tables before
//! modeling:
//!
//! - **columns**: column lookup by case-insensitive partial name
//! - **coerce**: float64 to nullable int64 conversion
//! - **unique**: extraction of a column's sole distinct value
//! - **scaffold**: typed-default dictionary scaffolds
//! - **flags**: 0/1 count summaries of flag columns
//!
//! Every operation takes the input frame by reference and never mutates it.
//! Failures are reported as [`sigadj_model::SigAdjError`] and logged at
//! error level before they are returned.

use sigadj_model::SigAdjError;

pub mod coerce;
pub mod columns;
pub mod flags;
pub mod polars_utils;
pub mod scaffold;
pub mod unique;

pub use coerce::{coerce_floats_to_nullable_int, coerce_floats_with_report, truncate_to_i64};
pub use columns::{ColumnPattern, resolve_column, resolve_column_with};
pub use flags::{
    NEGATIVE_COUNT_LABEL, POSITIVE_COUNT_LABEL, RUNNING_FLAG_MARKER, flag_summary_frame,
    summarize_flags, summarize_flags_with_marker,
};
pub use polars_utils::any_to_cell_value;
pub use scaffold::{ScaffoldKeys, build_scaffold};
pub use unique::extract_single_value;

/// Log an error at error level and hand it back for propagation.
pub(crate) fn report(error: SigAdjError) -> SigAdjError {
    tracing::error!(location = %error.location(), "{error}");
    error
}
