//! Flag column summaries.
//!
//! A flag column is any column whose name contains the marker (by default
//! [`RUNNING_FLAG_MARKER`], matched case-sensitively as a plain substring).
//! Its values are binary codes; each summary counts how many rows hold `0`
//! and how many hold `1`.
//!
//! Counting uses value equality: numeric `0`/`1` in any numeric type
//! (including `0.0`/`1.0`) and booleans `false`/`true` count. Text such as
//! `"0"`, nulls, NaN and any other code count for neither side, so a record's
//! two counts never exceed the frame's row count.

use polars::prelude::{Column, DataFrame, DataType, PolarsResult, Series};
use sigadj_model::{Result, SigAdjError, SummaryRecord};
use tracing::{debug, info};

use crate::report;

/// Marker identifying red-light running flag columns.
pub const RUNNING_FLAG_MARKER: &str = "RunningFlag";

/// Column label for the `0` counts in [`flag_summary_frame`].
pub const NEGATIVE_COUNT_LABEL: &str = "Not Red Run (0)";

/// Column label for the `1` counts in [`flag_summary_frame`].
pub const POSITIVE_COUNT_LABEL: &str = "Red Run (1)";

/// Summarize every column whose name contains [`RUNNING_FLAG_MARKER`].
///
/// Records follow the frame's column order. A frame without flag columns
/// gives an empty vector.
///
/// # Errors
///
/// Returns [`SigAdjError::Unexpected`] if a flag column cannot be read.
pub fn summarize_flags(df: &DataFrame) -> Result<Vec<SummaryRecord>> {
    summarize_flags_with_marker(df, RUNNING_FLAG_MARKER)
}

/// Summarize every column whose name contains `marker`.
///
/// # Errors
///
/// Returns [`SigAdjError::Unexpected`] if a flag column cannot be read.
pub fn summarize_flags_with_marker(df: &DataFrame, marker: &str) -> Result<Vec<SummaryRecord>> {
    info!(marker, "starting flag summary");
    let mut records = Vec::new();
    for column in df.get_columns() {
        let name = column.name().as_str();
        if !name.contains(marker) {
            continue;
        }
        info!(column = name, "processing flag column");
        let (negative, positive) =
            binary_counts(column.as_materialized_series()).map_err(|error| {
                report(SigAdjError::unexpected(
                    format!("an error occurred while summarizing flag column '{name}'"),
                    error,
                ))
            })?;
        records.push(SummaryRecord::new(name, negative, positive));
    }
    info!(records = records.len(), "flag summary completed");
    Ok(records)
}

/// Lay out summary records as a frame with the report's column labels.
///
/// # Errors
///
/// Returns [`SigAdjError::Unexpected`] if polars rejects the frame.
pub fn flag_summary_frame(records: &[SummaryRecord]) -> Result<DataFrame> {
    let names: Vec<&str> = records
        .iter()
        .map(|record| record.feature_name.as_str())
        .collect();
    let negative: Vec<u64> = records
        .iter()
        .map(|record| record.negative_count as u64)
        .collect();
    let positive: Vec<u64> = records
        .iter()
        .map(|record| record.positive_count as u64)
        .collect();

    DataFrame::new(vec![
        Column::new("featureName".into(), names),
        Column::new(NEGATIVE_COUNT_LABEL.into(), negative),
        Column::new(POSITIVE_COUNT_LABEL.into(), positive),
    ])
    .map_err(|error| report(SigAdjError::unexpected("failed to build flag summary frame", error)))
}

/// Count rows equal to 0 and rows equal to 1.
fn binary_counts(series: &Series) -> PolarsResult<(usize, usize)> {
    let dtype = series.dtype();
    let mut negative = 0;
    let mut positive = 0;

    if dtype.is_bool() {
        for value in series.bool()?.into_iter().flatten() {
            if value {
                positive += 1;
            } else {
                negative += 1;
            }
        }
    } else if dtype.is_numeric() {
        let as_float = series.cast(&DataType::Float64)?;
        for value in as_float.f64()?.into_iter().flatten() {
            if value == 0.0 {
                negative += 1;
            } else if value == 1.0 {
                positive += 1;
            }
        }
    } else {
        debug!(column = %series.name(), %dtype, "non-numeric flag column, no codes counted");
    }

    Ok((negative, positive))
}
