//! Single distinct value extraction.

use polars::prelude::{
    DataFrame, DataType, Float32Chunked, Float64Chunked, IntoSeries, PolarsResult, Series,
};
use sigadj_model::{CellValue, Result, SigAdjError};
use tracing::info;

use crate::polars_utils::any_to_cell_value;
use crate::report;

/// Return the only distinct value of `column_name`.
///
/// Missing values count as a distinct value of their own, so a column that
/// holds nothing but nulls yields [`CellValue::Null`], while `[5, null]` has
/// two distinct values. In float columns NaN is missing too: `[NaN, null]`
/// and `[NaN, NaN]` both yield [`CellValue::Null`].
///
/// # Errors
///
/// - [`SigAdjError::ColumnNotFound`] if the column does not exist (exact,
///   case-sensitive name).
/// - [`SigAdjError::EmptyColumn`] if the frame has no rows.
/// - [`SigAdjError::MultipleValues`] if there is more than one distinct value.
pub fn extract_single_value(df: &DataFrame, column_name: &str) -> Result<CellValue> {
    info!(column = column_name, "extracting single unique value");
    let Ok(column) = df.column(column_name) else {
        return Err(report(SigAdjError::column_not_found(column_name)));
    };

    let distinct = nan_as_null(column.as_materialized_series())
        .and_then(|series| series.unique_stable())
        .map_err(|error| {
            report(SigAdjError::unexpected(
                format!("failed to compute distinct values of '{column_name}'"),
                error,
            ))
        })?;

    match distinct.len() {
        0 => Err(report(SigAdjError::empty_column(column_name))),
        1 => {
            let value = distinct.get(0).map_err(|error| {
                report(SigAdjError::unexpected(
                    format!("failed to read distinct value of '{column_name}'"),
                    error,
                ))
            })?;
            let value = any_to_cell_value(value);
            info!(column = column_name, %value, "single unique value found");
            Ok(value)
        }
        count => Err(report(SigAdjError::multiple_values(column_name, count))),
    }
}

/// Replace NaN with null in float series; other series are returned as is.
fn nan_as_null(series: &Series) -> PolarsResult<Series> {
    let normalized = match series.dtype() {
        DataType::Float64 => series
            .f64()?
            .into_iter()
            .map(|value| value.filter(|v| !v.is_nan()))
            .collect::<Float64Chunked>()
            .into_series(),
        DataType::Float32 => series
            .f32()?
            .into_iter()
            .map(|value| value.filter(|v| !v.is_nan()))
            .collect::<Float32Chunked>()
            .into_series(),
        _ => return Ok(series.clone()),
    };
    Ok(normalized.with_name(series.name().clone()))
}
