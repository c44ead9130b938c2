//! Shared model types for the signal adjustment toolkit.

pub mod error;
pub mod scaffold;
pub mod summary;
pub mod value;

pub use error::{BoxError, Result, SigAdjError, SourceLocation};
pub use scaffold::{DefaultKind, Scaffold};
pub use summary::SummaryRecord;
pub use value::CellValue;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_record_serializes_camel_case() {
        let record = SummaryRecord::new("NorthRunningFlag", 2, 3);
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(
            json,
            serde_json::json!({
                "featureName": "NorthRunningFlag",
                "negativeCount": 2,
                "positiveCount": 3,
            })
        );
        assert_eq!(record.coded_count(), 5);
    }

    #[test]
    fn default_kinds_produce_empty_values() {
        assert_eq!(DefaultKind::Integer.default_value(), serde_json::json!(0));
        assert_eq!(DefaultKind::String.default_value(), serde_json::json!(""));
        assert_eq!(DefaultKind::Sequence.default_value(), serde_json::json!([]));
        assert_eq!(DefaultKind::Mapping.default_value(), serde_json::json!({}));
    }

    #[test]
    fn cell_value_serializes_untagged() {
        assert_eq!(serde_json::to_value(CellValue::Null).expect("null"), serde_json::json!(null));
        assert_eq!(serde_json::to_value(CellValue::from(7)).expect("int"), serde_json::json!(7));
        assert_eq!(
            serde_json::to_value(CellValue::from("US-41")).expect("text"),
            serde_json::json!("US-41")
        );
        assert_eq!(
            serde_json::to_value(CellValue::from(true)).expect("bool"),
            serde_json::json!(true)
        );
    }

    #[test]
    fn cell_value_display() {
        assert_eq!(CellValue::Null.to_string(), "null");
        assert_eq!(CellValue::from(5).to_string(), "5");
        assert_eq!(CellValue::from("north").to_string(), "north");
        assert_eq!(CellValue::from(1.5).as_f64(), Some(1.5));
        assert!(CellValue::Null.is_null());
    }
}
