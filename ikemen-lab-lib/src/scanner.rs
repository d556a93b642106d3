//! Directory scanner for content folders.
//!
//! Handles both loose definition files (stages, storyboards) and
//! packaged character directories where the definition sits inside a
//! folder next to its sprite and sound files.

use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A logical content entry: a loose definition file or a packaged
/// directory with one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentEntry {
    /// A definition file at the folder's top level.
    LooseDef(PathBuf),
    /// A directory containing a definition file (character packages).
    Package {
        /// The directory name (e.g., "kfm").
        name: String,
        /// The selected definition file inside the directory.
        def: PathBuf,
    },
}

impl ContentEntry {
    /// Sort key for ordering entries alphabetically.
    pub fn sort_key(&self) -> &OsStr {
        match self {
            ContentEntry::LooseDef(p) => p.file_name().unwrap_or_default(),
            ContentEntry::Package { name, .. } => OsStr::new(name),
        }
    }

    /// The display name for this entry (file stem or package dir name).
    pub fn display_name(&self) -> &str {
        match self {
            ContentEntry::LooseDef(p) => {
                p.file_stem().and_then(|n| n.to_str()).unwrap_or("?")
            }
            ContentEntry::Package { name, .. } => name,
        }
    }

    /// The definition file to analyze for this entry.
    pub fn def_path(&self) -> &Path {
        match self {
            ContentEntry::LooseDef(p) => p,
            ContentEntry::Package { def, .. } => def,
        }
    }
}

/// Scan a content folder and return logical entries.
///
/// Handles:
/// - Top-level `.def` files
/// - Package subdirectories containing `.def` files; the definition
///   named after the directory wins, else the first alphabetically
/// - Hidden files and directories are skipped
pub fn scan_content_entries(folder: &Path) -> std::io::Result<Vec<ContentEntry>> {
    let mut entries: Vec<ContentEntry> = Vec::new();
    let mut dir_entries: Vec<std::fs::DirEntry> =
        std::fs::read_dir(folder)?.flatten().collect();
    dir_entries.sort_by_key(|e| e.path());

    for entry in &dir_entries {
        let path = entry.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        if name.starts_with('.') {
            continue;
        }

        if path.is_file() {
            if is_def(&path) {
                entries.push(ContentEntry::LooseDef(path));
            }
        } else if path.is_dir() {
            if let Some(def) = select_package_def(&path, &name) {
                entries.push(ContentEntry::Package { name, def });
            }
        }
    }

    entries.sort_by(|a, b| a.sort_key().cmp(b.sort_key()));
    Ok(entries)
}

fn is_def(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("def"))
        .unwrap_or(false)
}

/// Pick the definition file for a package directory: the one whose
/// stem matches the directory name, else the first alphabetically.
fn select_package_def(dir: &Path, dir_name: &str) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;
    let mut defs: Vec<PathBuf> = entries
        .flatten()
        .filter_map(|e| {
            let path = e.path();
            if path.is_file() && is_def(&path) {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    defs.sort();

    defs.iter()
        .find(|p| {
            p.file_stem()
                .and_then(|s| s.to_str())
                .map(|s| s.eq_ignore_ascii_case(dir_name))
                .unwrap_or(false)
        })
        .cloned()
        .or_else(|| defs.into_iter().next())
}

#[cfg(test)]
#[path = "tests/scanner_tests.rs"]
mod tests;
