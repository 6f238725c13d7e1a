//! errors.rs - Custom error types for the boostrules-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! Input failures are split by kind (missing file, decode, malformed row) so
//! the operator sees what actually went wrong.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `boostrules-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum BoostRulesError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read input {}: {source}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input is not valid UTF-8 near line {line}: {message}")]
    Decode { line: u64, message: String },

    #[error("Malformed CSV row at line {line}: {message}")]
    MalformedRow { line: u64, message: String },

    #[error("Failed to write output {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize rule document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid rule document: {0}")]
    InvalidDocument(String),

    #[error("An unexpected I/O error occurred: {0}")]
    Io(#[from] std::io::Error),
}

impl BoostRulesError {
    /// Classifies a `csv::Error` raised while reading rows.
    pub(crate) fn from_csv(err: csv::Error) -> Self {
        let line = err.position().map(|p| p.line()).unwrap_or(0);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => BoostRulesError::Io(e),
            csv::ErrorKind::Utf8 { .. } => BoostRulesError::Decode { line, message },
            _ => BoostRulesError::MalformedRow { line, message },
        }
    }
}

/// Result type for boostrules-core operations.
pub type Result<T> = std::result::Result<T, BoostRulesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_row_is_malformed() {
        let data = "a,b\n1,2\n3\n";
        let mut reader = csv::ReaderBuilder::new().from_reader(data.as_bytes());
        let err = reader
            .records()
            .find_map(|r| r.err())
            .expect("ragged row should fail");
        match BoostRulesError::from_csv(err) {
            BoostRulesError::MalformedRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_decode_error() {
        let data: &[u8] = b"a,b\n\xff\xfe,2\n";
        let mut reader = csv::ReaderBuilder::new().from_reader(data);
        let err = reader
            .records()
            .find_map(|r| r.err())
            .expect("invalid utf-8 should fail");
        assert!(matches!(
            BoostRulesError::from_csv(err),
            BoostRulesError::Decode { .. }
        ));
    }
}
