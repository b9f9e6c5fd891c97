//! Error types for the report extractor.
//!
//! Run-level failures abort the process; document-level failures are logged
//! by the caller and the document is skipped.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    /// The input folder could not be listed.
    #[error("Cannot read input folder {}: {source}", .path.display())]
    InputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A single document could not be read (missing, unreadable, not UTF-8).
    #[error("Cannot read {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The report artifact could not be written.
    #[error("Cannot write report to {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ::config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ReportError>;
