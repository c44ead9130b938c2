//! Column lookup by partial name.
//!
//! Patterns are regular expressions searched case-insensitively anywhere in
//! a column name. When several columns match, the first one in frame order
//! wins; there is no "most specific match" ranking.

use polars::prelude::DataFrame;
use regex::{Regex, RegexBuilder};
use sigadj_model::{Result, SigAdjError};
use tracing::{debug, info};

use crate::report;

/// A compiled case-insensitive column-name pattern.
#[derive(Debug, Clone)]
pub struct ColumnPattern {
    source: String,
    regex: Regex,
}

impl ColumnPattern {
    /// Compile `pattern` for case-insensitive search.
    ///
    /// # Errors
    ///
    /// Returns [`SigAdjError::InvalidPattern`] if the pattern is not a valid
    /// regular expression.
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|error| report(SigAdjError::invalid_pattern(pattern, error)))?;
        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// First name, in iteration order, that the pattern matches.
    pub fn first_match<'a, I>(&self, names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names.into_iter().find(|name| self.is_match(name))
    }
}

/// Resolve the first column of `df` whose name matches `pattern`.
///
/// # Errors
///
/// - [`SigAdjError::InvalidPattern`] if `pattern` does not compile.
/// - [`SigAdjError::ColumnNotFound`] if no column matches.
///
/// # Example
///
/// ```ignore
/// let speed = resolve_column(&df, "speed")?; // "AvgSpeedMph"
/// ```
pub fn resolve_column(df: &DataFrame, pattern: &str) -> Result<String> {
    let compiled = ColumnPattern::new(pattern)?;
    resolve_column_with(df, &compiled)
}

/// Resolve a column using an already compiled pattern.
///
/// # Errors
///
/// Returns [`SigAdjError::ColumnNotFound`] if no column matches.
pub fn resolve_column_with(df: &DataFrame, pattern: &ColumnPattern) -> Result<String> {
    info!(pattern = pattern.as_str(), columns = df.width(), "resolving column");
    let names = df.get_columns().iter().map(|column| column.name().as_str());
    match pattern.first_match(names) {
        Some(name) => {
            debug!(pattern = pattern.as_str(), column = name, "column resolved");
            Ok(name.to_string())
        }
        None => Err(report(SigAdjError::column_not_found(pattern.as_str()))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_match_follows_iteration_order() {
        let pattern = ColumnPattern::new("flag").expect("pattern");
        let names = ["Phase", "NorthRunningFlag", "SouthRunningFlag"];
        assert_eq!(pattern.first_match(names), Some("NorthRunningFlag"));
    }

    #[test]
    fn matching_ignores_case() {
        let pattern = ColumnPattern::new("SPEED").expect("pattern");
        assert!(pattern.is_match("avgSpeedMph"));
        assert!(!pattern.is_match("Volume"));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let error = ColumnPattern::new("(unclosed").expect_err("invalid pattern");
        assert!(matches!(error, SigAdjError::InvalidPattern { .. }));
        assert!(error.cause_message().is_some());
    }
}
