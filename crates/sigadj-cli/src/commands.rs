//! Command implementations, independent of argument parsing.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::{Value, json};
use sigadj_ingest::{FeatureTable, list_csv_files, read_feature_table};
use sigadj_model::{CellValue, Scaffold};
use sigadj_transform::{
    ScaffoldKeys, coerce_floats_to_nullable_int, extract_single_value, resolve_column,
    summarize_flags_with_marker,
};
use tracing::info;

use crate::project::{DEFAULT_PROJECT_DIRS, DirectoryStatus, find_project_root, setup_directories};
use crate::types::{CoercionResult, ColumnTypeChange, TableFlagSummary};

/// Create project directories under `root`, or under the nearest ancestor of
/// `cwd` containing `marker` when no root is given.
pub fn run_init(
    root: Option<&Path>,
    cwd: &Path,
    marker: &str,
    dirs: &[String],
) -> Result<Vec<(PathBuf, DirectoryStatus)>> {
    let root = match root {
        Some(root) => root.to_path_buf(),
        None => find_project_root(cwd, marker)?,
    };
    let statuses = if dirs.is_empty() {
        setup_directories(&root, &DEFAULT_PROJECT_DIRS[..])?
    } else {
        setup_directories(&root, dirs)?
    };
    Ok(statuses)
}

pub fn run_resolve(csv: &Path, pattern: &str) -> Result<String> {
    let table = read_feature_table(csv)?;
    let column = resolve_column(&table.data, pattern)
        .with_context(|| format!("resolving '{pattern}' in {}", csv.display()))?;
    Ok(column)
}

pub fn run_coerce(csv: &Path) -> Result<CoercionResult> {
    let table = read_feature_table(csv)?;
    let coerced = coerce_floats_to_nullable_int(&table.data)
        .with_context(|| format!("coercing {}", csv.display()))?;
    let columns = table
        .data
        .get_columns()
        .iter()
        .zip(coerced.get_columns())
        .map(|(before, after)| ColumnTypeChange {
            column: before.name().to_string(),
            before: before.dtype().to_string(),
            after: after.dtype().to_string(),
        })
        .collect();
    Ok(CoercionResult {
        table: table.name,
        rows: coerced.height(),
        columns,
    })
}

pub fn run_unique(csv: &Path, column: &str) -> Result<CellValue> {
    let table = read_feature_table(csv)?;
    let value = extract_single_value(&table.data, column)
        .with_context(|| format!("extracting the single value of '{column}' in {}", csv.display()))?;
    Ok(value)
}

/// JSON form of a unique value: `{"column": ..., "value": ...}`.
pub fn unique_value_json(column: &str, value: &CellValue) -> Value {
    json!({ "column": column, "value": value })
}

pub fn run_scaffold(
    int_keys: &[String],
    str_keys: &[String],
    seq_keys: &[String],
    map_keys: &[String],
) -> Scaffold {
    ScaffoldKeys::new()
        .with_integer_keys(int_keys.iter().cloned())
        .with_string_keys(str_keys.iter().cloned())
        .with_sequence_keys(seq_keys.iter().cloned())
        .with_mapping_keys(map_keys.iter().cloned())
        .build()
}

/// Summarize flag columns of every CSV file given directly or found in a
/// given directory. Tables are reported in argument order, directory
/// contents sorted by file name.
pub fn run_flags(paths: &[PathBuf], marker: &str) -> Result<Vec<TableFlagSummary>> {
    let mut summaries = Vec::new();
    for path in paths {
        let files = if path.is_dir() {
            list_csv_files(path)?
        } else {
            vec![path.clone()]
        };
        for file in files {
            let table = read_feature_table(&file)?;
            summaries.push(summarize_table(&table, marker)?);
        }
    }
    info!(tables = summaries.len(), "flag summaries ready");
    Ok(summaries)
}

fn summarize_table(table: &FeatureTable, marker: &str) -> Result<TableFlagSummary> {
    let records = summarize_flags_with_marker(&table.data, marker)
        .with_context(|| format!("summarizing flags of {}", table.name))?;
    Ok(TableFlagSummary {
        table: table.name.clone(),
        source: table.source.clone(),
        rows: table.row_count(),
        records,
    })
}
