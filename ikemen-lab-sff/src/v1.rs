//! v1 container directory: a linked list of 32-byte subfile headers,
//! each followed by PCX graphic data.
//!
//! Palettes in v1 are positional: a sprite either carries its own
//! palette at the tail of its PCX data or reuses the palette of the
//! nearest preceding sprite that did.

use std::io::SeekFrom;

use ikemen_lab_core::{AnalysisError, ReadSeek};

use crate::header::{V1_SUBFILE_HEADER_SIZE, V1Header, i16_at, u16_at, u32_at};
use crate::pcx;
use crate::sprite::{Sprite, SpriteFormat, SpriteInfo};

/// Walk the subfile linked list and collect directory entries.
///
/// Dimensions come from each subfile's PCX header so quick analysis
/// never has to decode pixels. A zero next-offset or an offset past the
/// end of the file terminates the walk early; community files with
/// short directories are common and not an error.
pub(crate) fn read_directory(
    reader: &mut dyn ReadSeek,
    header: &V1Header,
    file_size: u64,
) -> Result<Vec<SpriteInfo>, AnalysisError> {
    let mut sprites: Vec<SpriteInfo> = Vec::with_capacity(header.sprite_count as usize);
    let mut offset = header.first_subfile_offset as u64;

    for _ in 0..header.sprite_count {
        if offset == 0 || offset + V1_SUBFILE_HEADER_SIZE > file_size {
            log::warn!(
                "sprite directory ends early: {} of {} sprites present",
                sprites.len(),
                header.sprite_count
            );
            break;
        }
        reader.seek(SeekFrom::Start(offset))?;
        let mut buf = [0u8; V1_SUBFILE_HEADER_SIZE as usize];
        reader.read_exact(&mut buf)?;

        let next_offset = u32_at(&buf, 0) as u64;
        let length = u32_at(&buf, 4);
        let mut info = SpriteInfo {
            group: u16_at(&buf, 12),
            item: u16_at(&buf, 14),
            width: 0,
            height: 0,
            axis_x: i16_at(&buf, 8),
            axis_y: i16_at(&buf, 10),
            linked: None,
            format: SpriteFormat::Pcx,
            data_offset: offset + V1_SUBFILE_HEADER_SIZE,
            data_len: length,
            palette_index: None,
            own_palette: buf[18] == 0,
        };

        if length == 0 {
            // Linked sprite: shares pixel data with a previous entry.
            let previous = u16_at(&buf, 16);
            info.linked = Some(previous);
            if let Some(target) = sprites.get(previous as usize) {
                info.width = target.width;
                info.height = target.height;
            }
        } else {
            let peek = (length as usize).min(pcx::PCX_HEADER_SIZE);
            let mut head = vec![0u8; peek];
            reader.read_exact(&mut head)?;
            if let Some((w, h)) = pcx::peek_dimensions(&head) {
                info.width = w;
                info.height = h;
            }
        }

        sprites.push(info);
        offset = next_offset;
    }

    Ok(sprites)
}

/// Decode one sprite, resolving pixel links and the palette chain.
pub(crate) fn decode_sprite(
    reader: &mut dyn ReadSeek,
    sprites: &[SpriteInfo],
    index: usize,
) -> Result<Sprite, AnalysisError> {
    let resolved = crate::file::resolve_link(sprites, index)?;
    let data = read_payload(reader, &sprites[resolved])?;
    let mut image = pcx::decode(&data)?;

    let palette = match palette_donor(sprites, index) {
        Some(donor) if donor == resolved => image.palette.take(),
        Some(donor) => {
            let donor_data = read_payload(reader, &sprites[donor])?;
            pcx::tail_palette(&donor_data)
        }
        None => image.palette.take(),
    };

    let requested = &sprites[index];
    Ok(Sprite {
        group: requested.group,
        item: requested.item,
        width: image.width,
        height: image.height,
        axis_x: requested.axis_x,
        axis_y: requested.axis_y,
        pixels: image.pixels,
        palette,
    })
}

/// The sprite whose embedded palette is current at `index`: the nearest
/// preceding non-linked entry flagged as carrying its own.
fn palette_donor(sprites: &[SpriteInfo], index: usize) -> Option<usize> {
    (0..=index)
        .rev()
        .find(|&i| sprites[i].own_palette && sprites[i].data_len > 0)
}

fn read_payload(
    reader: &mut dyn ReadSeek,
    info: &SpriteInfo,
) -> Result<Vec<u8>, AnalysisError> {
    reader.seek(SeekFrom::Start(info.data_offset))?;
    let mut data = vec![0u8; info.data_len as usize];
    reader.read_exact(&mut data)?;
    Ok(data)
}

#[cfg(test)]
#[path = "tests/v1_tests.rs"]
mod tests;
