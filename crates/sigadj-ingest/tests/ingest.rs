//! Tests for CSV discovery and loading.

use std::fs;

use polars::prelude::DataType;
use tempfile::TempDir;

use sigadj_ingest::{IngestError, list_csv_files, read_feature_table};

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn lists_csv_files_sorted_by_name() {
    let dir = TempDir::new().expect("temp dir");
    write_file(&dir, "south.csv", "a\n1\n");
    write_file(&dir, "North.CSV", "a\n1\n");
    write_file(&dir, "notes.txt", "ignore me");
    fs::create_dir(dir.path().join("nested.csv")).expect("nested dir");

    let files = list_csv_files(dir.path()).expect("list");
    let names: Vec<String> = files
        .iter()
        .filter_map(|path| path.file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, ["North.CSV", "south.csv"]);
}

#[test]
fn listing_missing_directory_fails() {
    let dir = TempDir::new().expect("temp dir");
    let missing = dir.path().join("absent");
    let error = list_csv_files(&missing).expect_err("missing dir");
    assert!(matches!(error, IngestError::DirectoryNotFound { .. }));
}

#[test]
fn reads_table_with_inferred_types() {
    let dir = TempDir::new().expect("temp dir");
    let path = write_file(
        &dir,
        "intersection.csv",
        "SignalID,GreenTime,NorthRunningFlag\n1001,12.5,0\n1001,,1\n1001,7.0,1\n",
    );

    let table = read_feature_table(&path).expect("read");

    assert_eq!(table.name, "intersection");
    assert_eq!(table.source(), Some(path.as_path()));
    assert_eq!(table.row_count(), 3);
    assert_eq!(
        table.column_names(),
        ["SignalID", "GreenTime", "NorthRunningFlag"]
    );
    let green = table.data.column("GreenTime").expect("column");
    assert_eq!(green.dtype(), &DataType::Float64);
    assert_eq!(green.null_count(), 1);
}

#[test]
fn reading_missing_file_fails() {
    let dir = TempDir::new().expect("temp dir");
    let error = read_feature_table(&dir.path().join("absent.csv")).expect_err("missing file");
    assert!(matches!(error, IngestError::FileNotFound { .. }));
}
