//! Property tests for the transformation invariants.

use polars::prelude::{Column, DataFrame, DataType};
use proptest::prelude::*;

use sigadj_model::SigAdjError;
use sigadj_transform::{
    ColumnPattern, coerce_floats_to_nullable_int, resolve_column, summarize_flags,
};

const NAME_POOL: [&str; 8] = [
    "SignalID",
    "NorthRunningFlag",
    "southrunningflag",
    "AvgSpeed",
    "GreenTime",
    "EastRunningFlag",
    "Volume",
    "Occupancy",
];

fn frame_with_names(names: &[&str]) -> DataFrame {
    let columns = names
        .iter()
        .map(|name| Column::new((*name).into(), [0_i64]))
        .collect();
    DataFrame::new(columns).expect("df")
}

fn float_frame(values: &[Option<f64>]) -> DataFrame {
    DataFrame::new(vec![
        Column::new("Measured".into(), values),
        Column::new(
            "Index".into(),
            (0..values.len() as i64).collect::<Vec<_>>(),
        ),
    ])
    .expect("df")
}

proptest! {
    #[test]
    fn resolves_to_first_matching_column(
        names in proptest::sample::subsequence(NAME_POOL.to_vec(), 1..=NAME_POOL.len()).prop_shuffle(),
        pattern in prop_oneof![Just("flag"), Just("SPEED"), Just("^s"), Just("time$"), Just("missing")],
    ) {
        let df = frame_with_names(&names);
        let compiled = ColumnPattern::new(pattern).expect("pattern");
        let expected = names.iter().copied().find(|name| compiled.is_match(name));

        match (resolve_column(&df, pattern), expected) {
            (Ok(found), Some(expected)) => prop_assert_eq!(found, expected),
            (Err(SigAdjError::ColumnNotFound { .. }), None) => {}
            (result, expected) => prop_assert!(false, "got {:?}, expected {:?}", result, expected),
        }
    }

    #[test]
    fn coercion_preserves_rows_and_is_idempotent(
        values in proptest::collection::vec(proptest::option::of(-1.0e12_f64..1.0e12), 0..64),
    ) {
        let df = float_frame(&values);
        let once = coerce_floats_to_nullable_int(&df).expect("once");
        let twice = coerce_floats_to_nullable_int(&once).expect("twice");

        prop_assert_eq!(once.height(), df.height());
        prop_assert!(once.equals_missing(&twice));
        prop_assert_eq!(once.column("Measured").expect("column").dtype(), &DataType::Int64);
        prop_assert!(df.column("Index").expect("before").as_materialized_series()
            .equals_missing(once.column("Index").expect("after").as_materialized_series()));

        let coerced: Vec<Option<i64>> = once
            .column("Measured")
            .expect("column")
            .as_materialized_series()
            .i64()
            .expect("i64")
            .into_iter()
            .collect();
        let expected: Vec<Option<i64>> = values
            .iter()
            .map(|value| value.map(|v| v.trunc() as i64))
            .collect();
        prop_assert_eq!(coerced, expected);
    }

    #[test]
    fn flag_counts_never_exceed_row_count(
        codes in proptest::collection::vec(proptest::option::of(-1_i64..3), 0..64),
    ) {
        let df = DataFrame::new(vec![Column::new("NorthRunningFlag".into(), &codes)])
            .expect("df");
        let records = summarize_flags(&df).expect("summary");

        prop_assert_eq!(records.len(), 1);
        let record = &records[0];
        prop_assert!(record.coded_count() <= df.height());
        prop_assert_eq!(record.negative_count, codes.iter().filter(|c| **c == Some(0)).count());
        prop_assert_eq!(record.positive_count, codes.iter().filter(|c| **c == Some(1)).count());
    }
}
