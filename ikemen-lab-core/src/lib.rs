use serde::{Deserialize, Serialize};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

pub mod error;
pub mod kind;
pub mod util;

pub use error::AnalysisError;
pub use kind::{ContentKind, KindParseError};

/// Options that control how content analysis is performed.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOptions {
    /// Quick mode: read as little data as possible.
    /// Sprite analysis stops at directory metadata and skips pixel decoding.
    pub quick: bool,

    /// Path to the file being analyzed. Used by definition analyzers to
    /// resolve relative references (e.g., the sprite file next to a .def).
    pub file_path: Option<PathBuf>,
}

impl AnalysisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quick(mut self, quick: bool) -> Self {
        self.quick = quick;
        self
    }

    pub fn file_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.file_path = Some(path.into());
        self
    }
}

/// Information extracted from analyzing a content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentIdentification {
    /// Content kind decided from the file's own structure, never its name
    pub kind: Option<ContentKind>,

    /// Effective display name (displayname over name, comment-extracted
    /// real name for stages)
    pub display_name: Option<String>,

    /// Author credited in the definition
    pub author: Option<String>,

    /// Version date string as written by the author (free-form)
    pub version_date: Option<String>,

    /// Engine version the content targets (mugenversion / ikemenversion)
    pub engine_version: Option<String>,

    /// Sprite file referenced by the definition, relative to it
    pub sprite_file: Option<String>,

    /// Actual file size on disk in bytes
    pub file_size: Option<u64>,

    /// Additional format-specific metadata
    pub extra: std::collections::HashMap<String, String>,
}

impl ContentIdentification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_kind(mut self, kind: ContentKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// A reader that implements both Read and Seek.
pub trait ReadSeek: Read + Seek {}
impl<T: Read + Seek> ReadSeek for T {}

/// Trait for analyzing content files (definitions, sprite containers).
///
/// Implementors should extract identifying information from the file's
/// own structure (section layout for text definitions, headers and
/// directories for binary containers), never from its name.
pub trait ContentAnalyzer: Send + Sync {
    /// Analyze a file from a reader and extract identification information.
    ///
    /// # Arguments
    /// * `reader` - A reader positioned at the start of the file
    /// * `options` - Analysis options (quick mode, source path)
    ///
    /// # Returns
    /// * `Ok(ContentIdentification)` - Successfully extracted identification info
    /// * `Err(AnalysisError)` - Failed to analyze (invalid format, I/O error, etc.)
    fn analyze(
        &self,
        reader: &mut dyn ReadSeek,
        options: &AnalysisOptions,
    ) -> Result<ContentIdentification, AnalysisError>;

    /// Returns the name of the file format this analyzer handles.
    fn format_name(&self) -> &'static str;

    /// Returns file extensions commonly associated with this format.
    fn file_extensions(&self) -> &'static [&'static str];

    /// Check if the reader contains data this analyzer can handle.
    ///
    /// This performs a quick check (magic bytes, text shape) without full
    /// analysis. Useful for auto-detection when the extension lies.
    fn can_handle(&self, reader: &mut dyn ReadSeek) -> bool;

    /// Check if this analyzer matches a path's extension (case-insensitive).
    fn matches_extension(&self, path: &Path) -> bool {
        let ext = match path.extension().and_then(|e| e.to_str()) {
            Some(e) => e.to_lowercase(),
            None => return false,
        };
        self.file_extensions().iter().any(|e| *e == ext)
    }
}
