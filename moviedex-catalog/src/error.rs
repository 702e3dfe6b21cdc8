use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building, querying, or exporting the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while writing an export or settings file
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// CSV writer failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Year text did not parse as a whole number
    #[error("Invalid year: {0:?}")]
    InvalidYear(String),

    /// Rating text did not parse as a finite number
    #[error("Invalid rating: {0:?}")]
    InvalidRating(String),

    /// Export filename was not a plain file name
    #[error("Invalid export filename: {0:?}")]
    InvalidFilename(String),

    /// settings.toml could not be read back or updated
    #[error("Settings error: {0}")]
    Settings(String),
}

impl CatalogError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_year(input: impl Into<String>) -> Self {
        Self::InvalidYear(input.into())
    }

    pub fn invalid_rating(input: impl Into<String>) -> Self {
        Self::InvalidRating(input.into())
    }

    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
