//! Flag summary records.

use serde::Serialize;

/// Counts of the binary codes found in one flag column.
///
/// `negative_count + positive_count` never exceeds the row count of the
/// dataset the record was built from: rows holding neither code (missing
/// values, other codes) are not counted at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRecord {
    pub feature_name: String,
    /// Rows equal to `0`.
    pub negative_count: usize,
    /// Rows equal to `1`.
    pub positive_count: usize,
}

impl SummaryRecord {
    pub fn new(feature_name: impl Into<String>, negative_count: usize, positive_count: usize) -> Self {
        Self {
            feature_name: feature_name.into(),
            negative_count,
            positive_count,
        }
    }

    /// Rows carrying either code.
    pub fn coded_count(&self) -> usize {
        self.negative_count + self.positive_count
    }
}
