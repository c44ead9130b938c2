//! Tests for float to nullable integer coercion.

use polars::prelude::{Column, DataFrame, DataType};

use sigadj_transform::{coerce_floats_to_nullable_int, coerce_floats_with_report};

fn mixed_df() -> DataFrame {
    DataFrame::new(vec![
        Column::new("Phase".into(), ["A", "B", "C", "D"]),
        Column::new("GreenTime".into(), [Some(12.0), None, Some(7.9), Some(-3.5)]),
        Column::new("Cycle".into(), [90_i64, 90, 120, 120]),
        Column::new("Ratio".into(), [0.25_f32, 0.5, 0.75, 1.0]),
    ])
    .expect("df")
}

#[test]
fn converts_float64_columns_to_int64() {
    let coerced = coerce_floats_to_nullable_int(&mixed_df()).expect("coerce");

    let green = coerced.column("GreenTime").expect("column");
    assert_eq!(green.dtype(), &DataType::Int64);
    let values: Vec<Option<i64>> = green
        .as_materialized_series()
        .i64()
        .expect("i64")
        .into_iter()
        .collect();
    assert_eq!(values, vec![Some(12), None, Some(7), Some(-3)]);
}

#[test]
fn leaves_other_columns_untouched() {
    let df = mixed_df();
    let coerced = coerce_floats_to_nullable_int(&df).expect("coerce");

    for name in ["Phase", "Cycle", "Ratio"] {
        let before = df.column(name).expect("before");
        let after = coerced.column(name).expect("after");
        assert_eq!(before.dtype(), after.dtype());
        assert!(before.as_materialized_series().equals_missing(after.as_materialized_series()));
    }
}

#[test]
fn preserves_shape_and_column_order() {
    let df = mixed_df();
    let coerced = coerce_floats_to_nullable_int(&df).expect("coerce");

    assert_eq!(coerced.shape(), df.shape());
    assert_eq!(coerced.get_column_names(), df.get_column_names());
}

#[test]
fn input_frame_is_not_mutated() {
    let df = mixed_df();
    let _ = coerce_floats_to_nullable_int(&df).expect("coerce");
    assert_eq!(df.column("GreenTime").expect("column").dtype(), &DataType::Float64);
}

#[test]
fn nan_and_out_of_range_become_null() {
    let df = DataFrame::new(vec![Column::new(
        "Occupancy".into(),
        [f64::NAN, f64::INFINITY, 1e30, 2.5],
    )])
    .expect("df");
    let coerced = coerce_floats_to_nullable_int(&df).expect("coerce");
    let values: Vec<Option<i64>> = coerced
        .column("Occupancy")
        .expect("column")
        .as_materialized_series()
        .i64()
        .expect("i64")
        .into_iter()
        .collect();
    assert_eq!(values, vec![None, None, None, Some(2)]);
}

#[test]
fn report_lists_converted_columns() {
    let (_, converted) = coerce_floats_with_report(&mixed_df()).expect("coerce");
    assert_eq!(converted, vec!["GreenTime".to_string()]);
}

#[test]
fn coercion_is_idempotent() {
    let once = coerce_floats_to_nullable_int(&mixed_df()).expect("once");
    let (twice, converted) = coerce_floats_with_report(&once).expect("twice");
    assert!(converted.is_empty());
    assert!(once.equals_missing(&twice));
}
