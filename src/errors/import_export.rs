//! Import and export error types
//!
//! Covers reading the revenue document and rendering solved geometry into
//! output formats.
//!
//! ```rust
//! use jmu_sankey::errors::ImportExportError;
//!
//! let err = ImportExportError::InputSchema("missing key 'jmu-revenues'".to_string());
//! assert!(err.is_input_error());
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Import and export operation errors
#[derive(Error, Debug)]
pub enum ImportExportError {
    /// Input document does not match the record schema
    #[error("Input schema error: {0}")]
    InputSchema(String),

    /// File could not be read or written
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Template registration or rendering failed
    #[error("Template error: {0}")]
    Template(String),

    /// CSV serialisation failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialisation failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Export operation failed
    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl ImportExportError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ImportExportError::Io {
            path: path.into(),
            source,
        }
    }

    /// Check if this error was raised while reading input
    pub fn is_input_error(&self) -> bool {
        matches!(self, ImportExportError::InputSchema(_))
    }

    /// Get error code for reporting
    pub fn error_code(&self) -> &'static str {
        match self {
            ImportExportError::InputSchema(_) => "INPUT_SCHEMA",
            ImportExportError::Io { .. } => "IO_ERROR",
            ImportExportError::Template(_) => "TEMPLATE_ERROR",
            ImportExportError::Csv(_) | ImportExportError::Json(_) => "SERIALIZATION_ERROR",
            ImportExportError::ExportFailed(_) => "EXPORT_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_schema_error() {
        let err = ImportExportError::InputSchema("record 2: missing field `value`".to_string());
        assert_eq!(
            err.to_string(),
            "Input schema error: record 2: missing field `value`"
        );
        assert!(err.is_input_error());
        assert_eq!(err.error_code(), "INPUT_SCHEMA");
    }

    #[test]
    fn test_io_error_names_path() {
        let err = ImportExportError::io(
            "missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert!(err.to_string().contains("missing.json"));
        assert!(!err.is_input_error());
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
