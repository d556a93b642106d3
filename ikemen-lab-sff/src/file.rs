//! High-level SFF access: open, enumerate, decode.

use std::fs::File;
use std::io::{BufReader, Read, Seek, SeekFrom};
use std::path::Path;

use ikemen_lab_core::AnalysisError;

use crate::header::{SffHeader, parse_header};
use crate::sprite::{Sprite, SpriteInfo};
use crate::{v1, v2};

/// Portraits live in group 9000: item 1 is the large portrait, item 0
/// the small select-screen cell.
pub const PORTRAIT_GROUP: u16 = 9000;
pub const PORTRAIT_LARGE: u16 = 1;
pub const PORTRAIT_SMALL: u16 = 0;

/// An opened sprite container with its directories parsed.
///
/// Opening reads only headers and directory tables; pixel data is
/// decoded on demand per sprite.
#[derive(Debug)]
pub struct SffFile<R> {
    reader: R,
    header: SffHeader,
    sprites: Vec<SpriteInfo>,
    palettes: Vec<v2::PaletteInfo>,
}

impl SffFile<BufReader<File>> {
    /// Open a container from disk.
    pub fn from_path(path: &Path) -> Result<Self, AnalysisError> {
        let file = File::open(path)?;
        Self::open(BufReader::new(file))
    }
}

impl<R: Read + Seek> SffFile<R> {
    /// Parse the header and both directories from a reader.
    pub fn open(mut reader: R) -> Result<Self, AnalysisError> {
        let header = parse_header(&mut reader)?;
        let (sprites, palettes) = match &header {
            SffHeader::V1(h) => {
                let file_size = reader.seek(SeekFrom::End(0))?;
                (v1::read_directory(&mut reader, h, file_size)?, Vec::new())
            }
            SffHeader::V2(h) => (
                v2::read_sprite_nodes(&mut reader, h)?,
                v2::read_palette_nodes(&mut reader, h)?,
            ),
        };
        log::debug!(
            "opened SFF v{}: {} sprites, {} palettes",
            header.version_string(),
            sprites.len(),
            palettes.len()
        );
        Ok(Self {
            reader,
            header,
            sprites,
            palettes,
        })
    }

    pub fn header(&self) -> &SffHeader {
        &self.header
    }

    /// All directory entries in file order.
    pub fn sprites(&self) -> &[SpriteInfo] {
        &self.sprites
    }

    /// Number of palettes in the directory (always 0 for v1).
    pub fn palette_count(&self) -> usize {
        self.palettes.len()
    }

    /// Directory index of a sprite by group and item number.
    pub fn find(&self, group: u16, item: u16) -> Option<usize> {
        self.sprites
            .iter()
            .position(|s| s.group == group && s.item == item)
    }

    /// Decode the sprite at a directory index.
    pub fn decode(&mut self, index: usize) -> Result<Sprite, AnalysisError> {
        if index >= self.sprites.len() {
            return Err(AnalysisError::other(format!(
                "sprite index {} out of range ({} sprites)",
                index,
                self.sprites.len()
            )));
        }
        match &self.header {
            SffHeader::V1(_) => v1::decode_sprite(&mut self.reader, &self.sprites, index),
            SffHeader::V2(_) => {
                v2::decode_sprite(&mut self.reader, &self.sprites, &self.palettes, index)
            }
        }
    }

    /// Directory entry for the portrait, large preferred over small.
    pub fn portrait_info(&self) -> Option<(usize, &SpriteInfo)> {
        let index = self
            .find(PORTRAIT_GROUP, PORTRAIT_LARGE)
            .or_else(|| self.find(PORTRAIT_GROUP, PORTRAIT_SMALL))?;
        Some((index, &self.sprites[index]))
    }

    /// Decode the portrait sprite, if the container has one.
    pub fn portrait(&mut self) -> Result<Option<Sprite>, AnalysisError> {
        match self.portrait_info().map(|(index, _)| index) {
            Some(index) => self.decode(index).map(Some),
            None => Ok(None),
        }
    }
}

/// Follow a sprite's link chain to the entry that owns pixel data.
pub(crate) fn resolve_link(
    sprites: &[SpriteInfo],
    index: usize,
) -> Result<usize, AnalysisError> {
    let mut i = index;
    let mut hops = 0;
    while let Some(target) = sprites.get(i).and_then(|s| s.linked) {
        hops += 1;
        if hops > sprites.len() {
            return Err(AnalysisError::corrupted_header("sprite link cycle"));
        }
        i = target as usize;
    }
    if i >= sprites.len() {
        return Err(AnalysisError::corrupted_header(format!(
            "sprite link to missing index {}",
            i
        )));
    }
    Ok(i)
}

#[cfg(test)]
#[path = "tests/file_tests.rs"]
mod tests;
