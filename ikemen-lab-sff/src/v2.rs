//! v2 container directories: flat sprite and palette node tables with
//! payloads split between a literal-data block (ldata) and an
//! on-demand block (tdata).

use std::io::SeekFrom;

use ikemen_lab_core::{AnalysisError, ReadSeek};

use crate::codec::{lz5_decode, rle5_decode, rle8_decode};
use crate::header::{V2_PALETTE_NODE_SIZE, V2_SPRITE_NODE_SIZE, V2Header, i16_at, u16_at, u32_at};
use crate::sprite::{Palette, Sprite, SpriteFormat, SpriteInfo};

/// Directory entry for one palette.
#[derive(Debug, Clone)]
pub(crate) struct PaletteInfo {
    #[allow(dead_code)]
    pub group: u16,
    #[allow(dead_code)]
    pub item: u16,
    pub colors: u16,
    pub linked: u16,
    pub data_offset: u64,
    pub data_len: u32,
}

/// Read the sprite node table.
pub(crate) fn read_sprite_nodes(
    reader: &mut dyn ReadSeek,
    header: &V2Header,
) -> Result<Vec<SpriteInfo>, AnalysisError> {
    let mut sprites = Vec::with_capacity(header.sprite_count as usize);
    reader.seek(SeekFrom::Start(header.sprite_list_offset as u64))?;

    for i in 0..header.sprite_count {
        let mut buf = [0u8; V2_SPRITE_NODE_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                AnalysisError::corrupted_header(format!(
                    "sprite node table ends at entry {} of {}",
                    i, header.sprite_count
                ))
            } else {
                AnalysisError::Io(e)
            }
        })?;

        let format_byte = buf[14];
        let format = match format_byte {
            0 => SpriteFormat::Raw,
            2 => SpriteFormat::Rle8,
            3 => SpriteFormat::Rle5,
            4 => SpriteFormat::Lz5,
            10..=12 => SpriteFormat::Png(format_byte),
            other => {
                return Err(AnalysisError::unsupported(format!(
                    "sprite format {} in node {}",
                    other, i
                )));
            }
        };

        let data_len = u32_at(&buf, 20);
        let flags = u16_at(&buf, 26);
        let base = if flags & 1 == 0 {
            header.ldata_offset
        } else {
            header.tdata_offset
        };

        sprites.push(SpriteInfo {
            group: u16_at(&buf, 0),
            item: u16_at(&buf, 2),
            width: u16_at(&buf, 4),
            height: u16_at(&buf, 6),
            axis_x: i16_at(&buf, 8),
            axis_y: i16_at(&buf, 10),
            linked: (data_len == 0).then(|| u16_at(&buf, 12)),
            format,
            data_offset: base as u64 + u32_at(&buf, 16) as u64,
            data_len,
            palette_index: Some(u16_at(&buf, 24)),
            own_palette: false,
        });
    }

    Ok(sprites)
}

/// Read the palette node table. Palette payloads always live in ldata.
pub(crate) fn read_palette_nodes(
    reader: &mut dyn ReadSeek,
    header: &V2Header,
) -> Result<Vec<PaletteInfo>, AnalysisError> {
    let mut palettes = Vec::with_capacity(header.palette_count as usize);
    reader.seek(SeekFrom::Start(header.palette_list_offset as u64))?;

    for i in 0..header.palette_count {
        let mut buf = [0u8; V2_PALETTE_NODE_SIZE as usize];
        reader.read_exact(&mut buf).map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                AnalysisError::corrupted_header(format!(
                    "palette node table ends at entry {} of {}",
                    i, header.palette_count
                ))
            } else {
                AnalysisError::Io(e)
            }
        })?;

        palettes.push(PaletteInfo {
            group: u16_at(&buf, 0),
            item: u16_at(&buf, 2),
            colors: u16_at(&buf, 4),
            linked: u16_at(&buf, 6),
            data_offset: header.ldata_offset as u64 + u32_at(&buf, 8) as u64,
            data_len: u32_at(&buf, 12),
        });
    }

    Ok(palettes)
}

/// Load a palette by directory index, resolving link chains.
pub(crate) fn load_palette(
    reader: &mut dyn ReadSeek,
    palettes: &[PaletteInfo],
    index: usize,
) -> Result<Option<Palette>, AnalysisError> {
    let mut i = index;
    let mut hops = 0;
    loop {
        let Some(node) = palettes.get(i) else {
            return Ok(None);
        };
        if node.data_len == 0 {
            hops += 1;
            if hops > palettes.len() {
                return Err(AnalysisError::corrupted_header("palette link cycle"));
            }
            i = node.linked as usize;
            continue;
        }

        reader.seek(SeekFrom::Start(node.data_offset))?;
        let take = (node.colors as usize * 4).min(node.data_len as usize);
        let mut buf = vec![0u8; take];
        reader.read_exact(&mut buf)?;
        return Ok(Some(Palette::from_rgba(&buf)));
    }
}

/// Decode one sprite, resolving pixel links and the palette reference.
pub(crate) fn decode_sprite(
    reader: &mut dyn ReadSeek,
    sprites: &[SpriteInfo],
    palettes: &[PaletteInfo],
    index: usize,
) -> Result<Sprite, AnalysisError> {
    let resolved = crate::file::resolve_link(sprites, index)?;
    let src = &sprites[resolved];
    let out_len = src.width as usize * src.height as usize;

    reader.seek(SeekFrom::Start(src.data_offset))?;
    let mut data = vec![0u8; src.data_len as usize];
    reader.read_exact(&mut data)?;

    let pixels = match src.format {
        SpriteFormat::Raw => {
            data.resize(out_len, 0);
            data
        }
        // Compressed payloads lead with a u32 of the decompressed size;
        // the sprite dimensions are authoritative, so it is skipped.
        SpriteFormat::Rle8 => rle8_decode(skip_size_field(&data), out_len),
        SpriteFormat::Rle5 => rle5_decode(skip_size_field(&data), out_len),
        SpriteFormat::Lz5 => lz5_decode(skip_size_field(&data), out_len),
        SpriteFormat::Png(byte) => {
            return Err(AnalysisError::unsupported(format!(
                "PNG sprite payload (format {})",
                byte
            )));
        }
        SpriteFormat::Pcx => {
            return Err(AnalysisError::invalid_format(
                "PCX payload in a v2 container",
            ));
        }
    };

    let requested = &sprites[index];
    let palette = match requested.palette_index {
        Some(p) => load_palette(reader, palettes, p as usize)?,
        None => None,
    };

    Ok(Sprite {
        group: requested.group,
        item: requested.item,
        width: src.width,
        height: src.height,
        axis_x: requested.axis_x,
        axis_y: requested.axis_y,
        pixels,
        palette,
    })
}

fn skip_size_field(data: &[u8]) -> &[u8] {
    if data.len() >= 4 { &data[4..] } else { &[] }
}

#[cfg(test)]
#[path = "tests/v2_tests.rs"]
mod tests;
