use std::path::PathBuf;
use thiserror::Error;

use crate::gt::FLAT_STRIDE;
use crate::validation::ValidationReport;

/// The main error type for boxbound operations.
#[derive(Debug, Error)]
pub enum BoxboundError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse ground-truth CSV from {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write ground-truth CSV to {path}: {source}")]
    CsvWrite {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to parse ground-truth JSON from {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write ground-truth JSON to {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(
        "Ground-truth buffer length {len} is not a multiple of {FLAT_STRIDE} \
         (left, top, right, bottom, score per box)"
    )]
    GroundTruthBuffer { len: usize },

    #[error("Invalid search state: {0}")]
    InvalidState(String),

    #[error("Validation failed with {error_count} error(s) and {warning_count} warning(s)")]
    ValidationFailed {
        error_count: usize,
        warning_count: usize,
        report: ValidationReport,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}
