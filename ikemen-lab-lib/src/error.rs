use std::path::PathBuf;

use thiserror::Error;

use ikemen_lab_core::AnalysisError;

/// Errors from library-level operations (scanning, dispatch).
#[derive(Debug, Error)]
pub enum LibraryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    #[error("No analyzer recognizes {}", .0.display())]
    UnrecognizedFormat(PathBuf),
}
