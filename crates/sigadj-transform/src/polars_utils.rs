//! Polars `AnyValue` conversions.

use polars::prelude::AnyValue;
use sigadj_model::CellValue;

/// Converts a Polars `AnyValue` into an owned [`CellValue`].
///
/// Integer widths collapse to `i64`; `UInt64` values beyond `i64::MAX`
/// fall back to a float. Types without a dedicated variant are rendered
/// through their `Display` output.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use sigadj_model::CellValue;
/// use sigadj_transform::any_to_cell_value;
///
/// assert_eq!(any_to_cell_value(AnyValue::Null), CellValue::Null);
/// assert_eq!(any_to_cell_value(AnyValue::Int32(5)), CellValue::Integer(5));
/// assert_eq!(any_to_cell_value(AnyValue::String("N")), CellValue::Text("N".into()));
/// ```
pub fn any_to_cell_value(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Null,
        AnyValue::Boolean(v) => CellValue::Boolean(v),
        AnyValue::Int8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::Int64(v) => CellValue::Integer(v),
        AnyValue::UInt8(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt16(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt32(v) => CellValue::Integer(i64::from(v)),
        AnyValue::UInt64(v) => match i64::try_from(v) {
            Ok(v) => CellValue::Integer(v),
            Err(_) => CellValue::Float(v as f64),
        },
        AnyValue::Float32(v) => CellValue::Float(f64::from(v)),
        AnyValue::Float64(v) => CellValue::Float(v),
        AnyValue::String(s) => CellValue::Text(s.to_string()),
        AnyValue::StringOwned(s) => CellValue::Text(s.to_string()),
        other => CellValue::Text(other.to_string()),
    }
}
