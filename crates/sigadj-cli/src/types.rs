//! Result types produced by the CLI commands.

use std::path::PathBuf;

use sigadj_model::SummaryRecord;

/// Flag summary of one input table.
#[derive(Debug, Clone)]
pub struct TableFlagSummary {
    pub table: String,
    pub source: Option<PathBuf>,
    pub rows: usize,
    pub records: Vec<SummaryRecord>,
}

/// Column type of one column before and after coercion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnTypeChange {
    pub column: String,
    pub before: String,
    pub after: String,
}

impl ColumnTypeChange {
    pub fn changed(&self) -> bool {
        self.before != self.after
    }
}

/// Outcome of coercing one table.
#[derive(Debug, Clone)]
pub struct CoercionResult {
    pub table: String,
    pub rows: usize,
    pub columns: Vec<ColumnTypeChange>,
}

impl CoercionResult {
    pub fn converted_count(&self) -> usize {
        self.columns.iter().filter(|change| change.changed()).count()
    }
}
