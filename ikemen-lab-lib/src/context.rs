//! Analyzer registry and content-library folder scanning.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use ikemen_lab_core::{
    AnalysisOptions, ContentAnalyzer, ContentIdentification, ContentKind,
};
use ikemen_lab_def::DefAnalyzer;
use ikemen_lab_sff::SffAnalyzer;

use crate::error::LibraryError;

/// Context holding all registered format analyzers.
///
/// This is the main entry point for using the library. Create a
/// context, register analyzers, then use it to identify files and scan
/// library folders.
pub struct ContentContext {
    analyzers: Vec<Box<dyn ContentAnalyzer>>,
}

impl Default for ContentContext {
    fn default() -> Self {
        Self::with_default_analyzers()
    }
}

impl ContentContext {
    /// Create a new empty context.
    pub fn new() -> Self {
        Self {
            analyzers: Vec::new(),
        }
    }

    /// Context with the definition and sprite-container analyzers.
    pub fn with_default_analyzers() -> Self {
        let mut ctx = Self::new();
        ctx.register(DefAnalyzer::new());
        ctx.register(SffAnalyzer::new());
        ctx
    }

    /// Register a format analyzer.
    pub fn register<A: ContentAnalyzer + 'static>(&mut self, analyzer: A) -> &mut Self {
        self.analyzers.push(Box::new(analyzer));
        self
    }

    /// All registered analyzers.
    pub fn analyzers(&self) -> impl Iterator<Item = &dyn ContentAnalyzer> {
        self.analyzers.iter().map(|a| a.as_ref())
    }

    /// The analyzer claiming a path's extension, if any.
    pub fn analyzer_for(&self, path: &Path) -> Option<&dyn ContentAnalyzer> {
        self.analyzers().find(|a| a.matches_extension(path))
    }

    /// Identify a file: dispatch by extension, fall back to content
    /// sniffing when the extension claims nothing.
    pub fn identify_path(
        &self,
        path: &Path,
        options: &AnalysisOptions,
    ) -> Result<ContentIdentification, LibraryError> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);

        if let Some(analyzer) = self.analyzer_for(path) {
            return Ok(analyzer.analyze(&mut reader, options)?);
        }
        for analyzer in self.analyzers() {
            if analyzer.can_handle(&mut reader) {
                log::debug!(
                    "{} identified by content sniff as {}",
                    path.display(),
                    analyzer.format_name()
                );
                return Ok(analyzer.analyze(&mut reader, options)?);
            }
        }
        Err(LibraryError::UnrecognizedFormat(path.to_path_buf()))
    }

    /// Scan a library root and match subfolders to content kinds.
    ///
    /// Folder names match kind aliases case-insensitively (`chars`,
    /// `stages`, `data`, `font`, ...). Returns matched folders and the
    /// names of any non-hidden folders that didn't match.
    pub fn scan_content_folders(
        &self,
        root: &Path,
        filter: Option<&[ContentKind]>,
    ) -> std::io::Result<FolderScanResult> {
        let mut matches = Vec::new();
        let mut unrecognized = Vec::new();

        let mut dir_entries: Vec<std::fs::DirEntry> =
            std::fs::read_dir(root)?.flatten().collect();
        dir_entries.sort_by_key(|e| e.path());

        for entry in dir_entries {
            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let folder_name = match path.file_name().and_then(|n| n.to_str()) {
                Some(name) => name.to_string(),
                None => continue,
            };

            let kind = match folder_name.parse::<ContentKind>() {
                Ok(kind) if kind != ContentKind::Unknown => kind,
                _ => {
                    if !folder_name.starts_with('.') {
                        unrecognized.push(folder_name);
                    }
                    continue;
                }
            };

            if let Some(kinds) = filter {
                if !kinds.contains(&kind) {
                    continue;
                }
            }

            matches.push(ContentFolder {
                path,
                folder_name,
                kind,
            });
        }

        Ok(FolderScanResult {
            matches,
            unrecognized,
        })
    }
}

/// A content folder matched during a root directory scan.
#[derive(Debug, Clone)]
pub struct ContentFolder {
    /// Path to the folder.
    pub path: PathBuf,
    /// Name of the folder (e.g., "chars", "stages").
    pub folder_name: String,
    /// The content kind this folder was matched to.
    pub kind: ContentKind,
}

/// Result of scanning a library root for content folders.
#[derive(Debug)]
pub struct FolderScanResult {
    /// Folders that matched a content kind.
    pub matches: Vec<ContentFolder>,
    /// Non-hidden folder names that didn't match any kind.
    pub unrecognized: Vec<String>,
}

#[cfg(test)]
#[path = "tests/context_tests.rs"]
mod tests;
