//! Section-aware parser for DEF/CNS definition text.
//!
//! The format is INI-like with engine-specific quirks:
//! ```text
//! [SectionName]
//! key = value ; trailing comment
//! key2 = "quoted value"
//! ```
//!
//! Community-authored content is of wildly inconsistent quality, so the
//! parser is tolerant by contract: malformed lines are skipped, never
//! reported. A parse always produces a usable result.

use std::collections::HashMap;
use std::path::Path;

/// Parsed contents of one definition file.
///
/// Immutable after construction. Keys and section names are lowercased;
/// the flat map is the union of all sections plus any top-level pairs
/// seen before the first section header, last writer winning on
/// duplicates, whether in-section or across the whole file.
#[derive(Debug, Clone, Default)]
pub struct DefFile {
    values: HashMap<String, String>,
    sections: HashMap<String, HashMap<String, String>>,
}

impl DefFile {
    /// Parse definition text into a `DefFile`. Never fails.
    pub fn parse(content: &str) -> Self {
        let mut def = DefFile::default();
        let mut current: Option<String> = None;

        for raw_line in content.lines() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with(';') {
                continue;
            }

            // Section header: text between the first '[' and the first ']'.
            // A '[' line with no ']' is not a header and falls through to
            // key=value handling, where the missing '=' skips it.
            if line.starts_with('[') {
                if let Some(end) = line.find(']') {
                    let name = line[1..end].to_lowercase();
                    def.sections.entry(name.clone()).or_default();
                    current = Some(name);
                    continue;
                }
            }

            let Some(eq) = line.find('=') else {
                continue;
            };
            let key = line[..eq].trim().to_lowercase();
            let mut value = line[eq + 1..].trim();

            // Everything from the first ';' on is a trailing comment.
            if let Some(semi) = value.find(';') {
                value = value[..semi].trim();
            }

            // Every quote character is deleted, not just matching pairs.
            // Lossy for values with intentional embedded quotes; preserved
            // because the engine's own content relies on it.
            let value = value.replace('"', "");

            if let Some(section) = &current {
                def.sections
                    .entry(section.clone())
                    .or_default()
                    .insert(key.clone(), value.clone());
            }
            def.values.insert(key, value);
        }

        def
    }

    /// Parse a definition file from disk. UTF-8 is assumed; invalid
    /// sequences are replaced rather than rejected.
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::parse(&String::from_utf8_lossy(&bytes)))
    }

    /// Root-level lookup against the flat map.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(&key.to_lowercase()).map(String::as_str)
    }

    /// Section-scoped lookup.
    ///
    /// When the section exists, only its own keys are consulted; there
    /// is no fallback to the flat map, and callers wanting one compose it
    /// explicitly with `or_else`. When the section does not exist, the
    /// lookup degrades to the flat map.
    pub fn value_in(&self, section: &str, key: &str) -> Option<&str> {
        match self.sections.get(&section.to_lowercase()) {
            Some(map) => map.get(&key.to_lowercase()).map(String::as_str),
            None => self.value(key),
        }
    }

    /// Root-level integer lookup. Returns `default` unless the value
    /// parses as a base-10 integer; parse failure is never an error.
    pub fn int(&self, key: &str, default: i32) -> i32 {
        self.value(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Section-scoped integer lookup with the same lookup rules as
    /// [`value_in`](Self::value_in) and the same never-fails contract.
    pub fn int_in(&self, section: &str, key: &str, default: i32) -> i32 {
        self.value_in(section, key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    /// Whether a section header was present (even an empty one).
    pub fn has_section(&self, name: &str) -> bool {
        self.sections.contains_key(&name.to_lowercase())
    }

    /// All section names, lowercased, in no particular order.
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// All keys in the flat map, lowercased.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// All values in the flat map (the union of every section).
    pub fn flat_values(&self) -> impl Iterator<Item = &str> {
        self.values.values().map(String::as_str)
    }
}

#[cfg(test)]
#[path = "tests/parse_tests.rs"]
mod tests;
