//! Sprite-container analyzer.
//!
//! An SFF on its own says nothing about what kind of content it belongs
//! to (the definition file decides that), so this analyzer reports
//! container facts: version, sprite and palette counts, portrait
//! dimensions, and the v1 comment field when authors left one.

use ikemen_lab_core::{
    AnalysisError, AnalysisOptions, ContentAnalyzer, ContentIdentification, ReadSeek,
};
use std::io::SeekFrom;

use crate::file::SffFile;
use crate::header::{SffHeader, sniff};

/// Analyzer for SFF sprite containers.
#[derive(Debug, Default)]
pub struct SffAnalyzer;

impl SffAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ContentAnalyzer for SffAnalyzer {
    fn analyze(
        &self,
        reader: &mut dyn ReadSeek,
        options: &AnalysisOptions,
    ) -> Result<ContentIdentification, AnalysisError> {
        let file_size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut sff = SffFile::open(reader)?;

        let mut id = ContentIdentification::new();
        id.file_size = Some(file_size);
        id.extra
            .insert("sff_version".into(), sff.header().version_string());
        id.extra
            .insert("sprite_count".into(), sff.sprites().len().to_string());
        id.extra
            .insert("palette_count".into(), sff.palette_count().to_string());

        if let SffHeader::V1(h) = sff.header() {
            if !h.comment.is_empty() {
                id.extra.insert("comment".into(), h.comment.clone());
            }
        }

        if let Some((index, info)) = sff.portrait_info() {
            id.extra.insert(
                "portrait".into(),
                format!("{}x{} ({},{})", info.width, info.height, info.group, info.item),
            );
            id.extra
                .insert("portrait_format".into(), info.format.name().into());
            // Full analysis proves the portrait actually decodes.
            if !options.quick {
                let sprite = sff.decode(index)?;
                id.extra.insert(
                    "portrait_palette".into(),
                    sprite
                        .palette
                        .as_ref()
                        .map(|p| format!("{} colors", p.len()))
                        .unwrap_or_else(|| "none".into()),
                );
            }
        }

        Ok(id)
    }

    fn format_name(&self) -> &'static str {
        "SFF sprite container"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["sff"]
    }

    fn can_handle(&self, reader: &mut dyn ReadSeek) -> bool {
        sniff(reader)
    }
}

#[cfg(test)]
#[path = "tests/analyzer_tests.rs"]
mod tests;
