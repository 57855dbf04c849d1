use serde::Serialize;
use thiserror::Error;

/// A recoverable problem with one section of a report.
///
/// The affected snapshot field keeps its default; every other section is
/// processed normally.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionError {
    /// A detail payload was present but could not be decoded.
    #[error("section {key} is malformed: {message}")]
    Malformed { key: String, message: String },
    /// An aggregate value was present but did not parse as its scalar type.
    #[error("aggregate {key} value {value:?} is not a valid {expected}")]
    InvalidScalar {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl SectionError {
    pub fn malformed(key: &str, source: &serde_json::Error) -> Self {
        SectionError::Malformed {
            key: key.to_string(),
            message: source.to_string(),
        }
    }

    /// The bag key the error is attributed to.
    pub fn key(&self) -> &str {
        match self {
            SectionError::Malformed { key, .. } | SectionError::InvalidScalar { key, .. } => key,
        }
    }
}

/// A report that cannot be normalized at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReportError {
    #[error("report has no host name")]
    MissingHostName,
    #[error("report has no timestamp")]
    MissingTimestamp,
    #[error("report timestamp {0:?} is not a recognized date/time")]
    InvalidTimestamp(String),
    #[error("{field} is longer than {max} characters")]
    FieldTooLong { field: &'static str, max: usize },
}
