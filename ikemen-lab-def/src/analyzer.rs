//! Definition-file analyzer.
//!
//! Reads the whole file as text, parses it, classifies it, and fills a
//! `ContentIdentification` with the fields downstream tooling displays.

use std::io::SeekFrom;

use ikemen_lab_core::{
    AnalysisError, AnalysisOptions, ContentAnalyzer, ContentIdentification, ContentKind, ReadSeek,
};

use crate::classify::classify;
use crate::name::stage_name;
use crate::parse::DefFile;
use crate::stats::{CameraBounds, CharacterStats};

/// How much of the file `can_handle` sniffs for text shape.
const SNIFF_LEN: usize = 512;

/// Analyzer for DEF/CNS definition files.
#[derive(Debug, Default)]
pub struct DefAnalyzer;

impl DefAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

impl ContentAnalyzer for DefAnalyzer {
    fn analyze(
        &self,
        reader: &mut dyn ReadSeek,
        _options: &AnalysisOptions,
    ) -> Result<ContentIdentification, AnalysisError> {
        let file_size = reader.seek(SeekFrom::End(0))?;
        reader.seek(SeekFrom::Start(0))?;

        let mut bytes = Vec::with_capacity(file_size as usize);
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8_lossy(&bytes);

        let def = DefFile::parse(&content);
        let kind = classify(&def);
        log::debug!("classified definition as {}", kind);

        let mut id = ContentIdentification::new().with_kind(kind);
        id.file_size = Some(file_size);

        id.display_name = match kind {
            ContentKind::Stage => stage_name(&content),
            _ => def.display_name().map(str::to_string),
        };
        id.author = def.author().map(str::to_string);
        id.version_date = def.version_date().map(str::to_string);
        id.engine_version = def.engine_version().map(str::to_string);
        id.sprite_file = def.sprite_file().map(str::to_string);

        // Gameplay constants live in a [Data] section: in the char's CNS
        // file, or occasionally inlined in the DEF itself.
        if def.has_section("data") {
            let stats = CharacterStats::from_def(&def);
            id.extra.insert("life".into(), stats.life.to_string());
            id.extra.insert("attack".into(), stats.attack.to_string());
            id.extra.insert("defence".into(), stats.defence.to_string());
            id.extra.insert("power".into(), stats.power.to_string());
            id.extra
                .insert("air_juggle".into(), stats.air_juggle.to_string());
            id.extra
                .insert("fall_defence_up".into(), stats.fall_defence_up.to_string());
        }

        if kind == ContentKind::Stage {
            let bounds = CameraBounds::from_def(&def);
            id.extra.insert(
                "camera_bounds".into(),
                format!(
                    "left={} right={} high={} low={}",
                    bounds.left, bounds.right, bounds.high, bounds.low
                ),
            );
        }

        Ok(id)
    }

    fn format_name(&self) -> &'static str {
        "Definition (DEF/CNS)"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["def", "cns"]
    }

    fn can_handle(&self, reader: &mut dyn ReadSeek) -> bool {
        if reader.seek(SeekFrom::Start(0)).is_err() {
            return false;
        }
        let mut buf = [0u8; SNIFF_LEN];
        let n = match reader.read(&mut buf) {
            Ok(n) => n,
            Err(_) => return false,
        };
        let _ = reader.seek(SeekFrom::Start(0));
        if n == 0 {
            return false;
        }

        // Text shape: no NUL bytes, and at least one section header or
        // key=value separator in the sniffed window.
        let head = &buf[..n];
        !head.contains(&0) && (head.contains(&b'[') || head.contains(&b'='))
    }
}

#[cfg(test)]
#[path = "tests/analyzer_tests.rs"]
mod tests;
