use thiserror::Error;

use moviedex_catalog::CatalogError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error on the terminal or a log file
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Catalog, export, or settings failure
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Logger could not be installed
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    pub(crate) fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
