use thiserror::Error;

use ikemen_lab_lib::LibraryError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Library-level failure (scanning, dispatch, analysis)
    #[error("{0}")]
    Library(#[from] LibraryError),

    /// Sprite or definition analysis failed
    #[error("Analysis error: {0}")]
    Analysis(#[from] ikemen_lab_core::AnalysisError),

    /// JSON serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub(crate) fn other(msg: impl Into<String>) -> Self {
        Self::Other(msg.into())
    }
}
