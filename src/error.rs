//! 変換処理のエラー型

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading, converting or writing a locale dataset.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input file could not be read (missing, unreadable or not UTF-8).
    #[error("Failed to read '{}': {source}", .path.display())]
    Io {
        /// Path of the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The catalog JSON could not be parsed or serialized.
    #[error("Invalid locale catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the converted output failed.
    #[error("Failed to write output: {0}")]
    Output(#[source] std::io::Error),
}

impl ConvertError {
    /// Wraps an I/O error with the path that caused it.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
