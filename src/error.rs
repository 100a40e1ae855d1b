//! Error types for loading and normalizing cohort data

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or normalizing a source file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Source file could not be opened.
    #[error("failed to open {path}: {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV reader failed (malformed quoting, ragged row, invalid UTF-8).
    #[error("failed to read CSV {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// JSON source is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON source is valid but not an array of objects.
    #[error("unexpected JSON layout in {path}: {reason}")]
    JsonShape { path: PathBuf, reason: String },

    /// No parser handles the file's extension.
    #[error("unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    /// Header lacks one or more required columns.
    #[error("missing required column(s): {}", .columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    /// Header names the same column more than once.
    #[error("duplicate column(s) in header: {}", .columns.join(", "))]
    DuplicateColumns { columns: Vec<String> },

    /// A cell holds a value outside its column's contract.
    #[error("line {line}, column '{column}': expected {expected}, found {value}")]
    InvalidCell {
        line: usize,
        column: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Result type for load operations.
pub type Result<T> = std::result::Result<T, LoadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_columns_display() {
        let err = LoadError::MissingColumns {
            columns: vec!["age".into(), "ftime".into()],
        };
        assert_eq!(err.to_string(), "missing required column(s): age, ftime");
    }

    #[test]
    fn test_duplicate_columns_display() {
        let err = LoadError::DuplicateColumns {
            columns: vec!["bmi".into()],
        };
        assert_eq!(err.to_string(), "duplicate column(s) in header: bmi");
    }

    #[test]
    fn test_invalid_cell_display() {
        let err = LoadError::InvalidCell {
            line: 7,
            column: "sex",
            value: "\"unknown\"".into(),
            expected: "one of female, male",
        };
        assert_eq!(
            err.to_string(),
            "line 7, column 'sex': expected one of female, male, found \"unknown\""
        );
    }
}
