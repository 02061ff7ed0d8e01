//! Unified error type for posture-audit.

use std::path::PathBuf;
use thiserror::Error;

use super::context::{IoOperation, ParseFormat};
use crate::config::ConfigError;

/// Unified error type for all posture-audit operations.
#[derive(Error, Debug)]
pub enum PostureError {
    /// I/O operation failed.
    #[error("Failed to {operation} {path}: {source}")]
    Io {
        path: PathBuf,
        operation: IoOperation,
        #[source]
        source: std::io::Error,
    },

    /// Parse error with preserved source.
    #[error("Failed to parse {format} in {path}: {source}")]
    Parse {
        path: PathBuf,
        format: ParseFormat,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// File not found.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// CSV writer failure.
    #[error("Failed to write CSV to {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A required column is absent from the header row.
    #[error("Missing required column {column} in {path}")]
    MissingColumn { path: PathBuf, column: String },

    /// A data row is too short to hold a required column.
    #[error("Missing required field {field} on line {line} of {path}")]
    MissingField {
        path: PathBuf,
        line: u64,
        field: String,
    },

    /// A finding lacks a component its format guarantees.
    #[error("Finding {finding_id} has no {component} component")]
    MissingComponent {
        finding_id: String,
        component: &'static str,
    },

    /// An ARN with too few segments to carry region and account.
    #[error("Finding {finding_id} has a malformed ARN: {arn}")]
    InvalidArn { finding_id: String, arn: String },

    /// An exclusion row with fewer than four columns.
    #[error("Invalid exclusion on line {line} of {path}: {message}")]
    InvalidExclusion {
        path: PathBuf,
        line: u64,
        message: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PostureError {
    /// Create an I/O read error.
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            return Self::FileNotFound(path);
        }
        Self::Io {
            path,
            operation: IoOperation::Read,
            source,
        }
    }

    /// Create an I/O write error.
    pub fn write_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Write,
            source,
        }
    }

    /// Create an I/O error for a file or directory that could not be created.
    pub fn create_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Create,
            source,
        }
    }

    /// Create an I/O error for an output that could not be opened for appending.
    pub fn append_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            operation: IoOperation::Append,
            source,
        }
    }

    /// Create a parse error with JSON format.
    pub fn json_parse_error(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            format: ParseFormat::Json,
            source: Box::new(source),
        }
    }

    /// Create a parse error with CSV format.
    ///
    /// I/O failures surfaced through the CSV reader are reported as I/O errors.
    pub fn csv_parse_error(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        let path = path.into();
        if let csv::ErrorKind::Io(io) = source.kind() {
            return Self::read_error(path, std::io::Error::new(io.kind(), io.to_string()));
        }
        Self::Parse {
            path,
            format: ParseFormat::Csv,
            source: Box::new(source),
        }
    }

    /// Whether the input was readable but structurally incomplete.
    pub fn is_data_shape(&self) -> bool {
        matches!(
            self,
            Self::MissingColumn { .. }
                | Self::MissingField { .. }
                | Self::MissingComponent { .. }
                | Self::InvalidArn { .. }
                | Self::InvalidExclusion { .. }
        )
    }

    /// Process exit code for this error: 3 for data-shape errors, 2 otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.is_data_shape() { 3 } else { 2 }
    }

    /// Get the root cause of the error chain.
    pub fn root_cause(&self) -> &dyn std::error::Error {
        let mut current: &dyn std::error::Error = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }
}
