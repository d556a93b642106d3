//! Shared services for working with a content library: analyzer
//! dispatch, folder and entry scanning, settings.

pub mod context;
pub mod error;
pub mod scanner;
pub mod settings;

pub use context::{ContentContext, ContentFolder, FolderScanResult};
pub use error::LibraryError;
pub use scanner::{ContentEntry, scan_content_entries};

pub use ikemen_lab_core::{
    AnalysisError, AnalysisOptions, ContentAnalyzer, ContentIdentification, ContentKind,
};
pub use ikemen_lab_def::{DefAnalyzer, DefFile};
pub use ikemen_lab_sff::{SffAnalyzer, SffFile};
