//! Tests for the structured error type.

use std::io;

use sigadj_model::{SigAdjError, SourceLocation};

#[test]
fn captures_raise_site_location() {
    let expected_line = line!() + 1;
    let error = SigAdjError::column_not_found("speed");

    let location = error.location();
    assert!(location.file.ends_with("error.rs"));
    assert_eq!(location.line, expected_line);
}

#[test]
fn display_includes_message_and_location() {
    let error = SigAdjError::multiple_values("Phase", 2);
    let rendered = error.to_string();

    assert!(rendered.starts_with("column 'Phase' has 2 distinct values"));
    assert!(rendered.ends_with(&format!("[{}]", error.location())));
}

#[test]
fn unexpected_keeps_cause_message() {
    let cause = io::Error::other("disk unplugged");
    let error = SigAdjError::unexpected("failed to create directory", cause);

    assert_eq!(error.cause_message().as_deref(), Some("disk unplugged"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn plain_errors_have_no_cause() {
    let error = SigAdjError::empty_column("Lane");
    assert!(error.cause_message().is_none());
    assert!(matches!(error, SigAdjError::EmptyColumn { ref column, .. } if column == "Lane"));

    let message_only = SigAdjError::unexpected_message("bad state");
    assert!(message_only.cause_message().is_none());
}

#[test]
fn location_formats_as_file_and_line() {
    let location = SourceLocation {
        file: "src/flags.rs",
        line: 42,
    };
    assert_eq!(location.to_string(), "src/flags.rs:42");
}
