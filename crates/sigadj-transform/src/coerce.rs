//! Float64 to nullable Int64 coercion.
//!
//! # Precision loss
//!
//! This is a lossy conversion, not a rounding one. Fractional values are
//! truncated toward zero (`2.9` becomes `2`, `-2.9` becomes `-2`). Values the
//! nullable Int64 column cannot hold (NaN, infinities, magnitudes beyond the
//! `i64` range) become null, the same way null inputs stay null. Callers that
//! need rounding must round before coercing.

use polars::prelude::{Column, DataFrame, DataType, Int64Chunked, IntoColumn, IntoSeries};
use sigadj_model::{Result, SigAdjError};
use tracing::{debug, info};

use crate::report;

/// Truncate a float toward zero, or `None` when it has no `i64` counterpart.
///
/// # Examples
///
/// ```
/// use sigadj_transform::truncate_to_i64;
///
/// assert_eq!(truncate_to_i64(2.9), Some(2));
/// assert_eq!(truncate_to_i64(-2.9), Some(-2));
/// assert_eq!(truncate_to_i64(f64::NAN), None);
/// assert_eq!(truncate_to_i64(1e300), None);
/// ```
pub fn truncate_to_i64(value: f64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let truncated = value.trunc();
    // i64::MAX as f64 rounds up to 2^63, which is itself out of range.
    if truncated < i64::MIN as f64 || truncated >= i64::MAX as f64 {
        return None;
    }
    Some(truncated as i64)
}

/// Return a copy of `df` with every Float64 column stored as nullable Int64.
///
/// Row count, row order, column order and all non-Float64 columns are left
/// as they are. Applying the coercion twice gives the same frame as applying
/// it once.
///
/// # Errors
///
/// Returns [`SigAdjError::Unexpected`] only if polars rejects the rebuilt
/// frame, which cannot happen for a frame with consistent column heights.
pub fn coerce_floats_to_nullable_int(df: &DataFrame) -> Result<DataFrame> {
    coerce_floats_with_report(df).map(|(coerced, _)| coerced)
}

/// Same as [`coerce_floats_to_nullable_int`], also returning the names of the
/// converted columns in frame order.
///
/// # Errors
///
/// See [`coerce_floats_to_nullable_int`].
pub fn coerce_floats_with_report(df: &DataFrame) -> Result<(DataFrame, Vec<String>)> {
    info!(
        columns = df.width(),
        rows = df.height(),
        "coercing float64 columns to nullable int64"
    );
    let mut converted = Vec::new();
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        if column.dtype() != &DataType::Float64 {
            columns.push(column.clone());
            continue;
        }
        debug!(column = %column.name(), "converting float64 column");
        columns.push(truncate_column(column)?);
        converted.push(column.name().to_string());
    }

    let coerced = DataFrame::new(columns).map_err(|error| {
        report(SigAdjError::unexpected(
            "failed to rebuild frame after float coercion",
            error,
        ))
    })?;
    info!(converted = converted.len(), "float coercion finished");
    Ok((coerced, converted))
}

fn truncate_column(column: &Column) -> Result<Column> {
    let values = column.as_materialized_series().f64().map_err(|error| {
        report(SigAdjError::unexpected(
            format!("failed to read float column '{}'", column.name()),
            error,
        ))
    })?;
    let truncated: Int64Chunked = values
        .into_iter()
        .map(|value| value.and_then(truncate_to_i64))
        .collect();
    Ok(truncated
        .with_name(column.name().clone())
        .into_series()
        .into_column())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncates_toward_zero() {
        assert_eq!(truncate_to_i64(0.99), Some(0));
        assert_eq!(truncate_to_i64(-0.99), Some(0));
        assert_eq!(truncate_to_i64(7.0), Some(7));
    }

    #[test]
    fn rejects_values_outside_i64() {
        assert_eq!(truncate_to_i64(f64::INFINITY), None);
        assert_eq!(truncate_to_i64(f64::NEG_INFINITY), None);
        assert_eq!(truncate_to_i64(9.3e18), None);
        assert_eq!(truncate_to_i64(-9.3e18), None);
        assert_eq!(truncate_to_i64(i64::MIN as f64), Some(i64::MIN));
    }
}
