//! PCX decoding for v1 sprite payloads.
//!
//! Supports the subset the engine emits: 8-bit indexed, single plane,
//! RLE-encoded scanlines, optional 256-color tail palette behind a
//! 0x0C marker.

use ikemen_lab_core::AnalysisError;

use crate::header::u16_at;
use crate::sprite::Palette;

/// Fixed PCX header size.
pub const PCX_HEADER_SIZE: usize = 128;

/// Size of the optional tail palette: one marker byte plus 256 RGB colors.
const TAIL_PALETTE_SIZE: usize = 769;

const MANUFACTURER: u8 = 0x0A;
const TAIL_PALETTE_MARKER: u8 = 0x0C;

/// A decoded PCX image: indexed pixels plus the tail palette if the
/// file carried one.
#[derive(Debug, Clone)]
pub struct PcxImage {
    pub width: u16,
    pub height: u16,
    /// Row-major indexed pixels, `width * height` bytes
    pub pixels: Vec<u8>,
    pub palette: Option<Palette>,
}

/// Read image dimensions from a PCX header without decoding pixels.
///
/// Returns `None` when the buffer is too short or not an 8-bit PCX.
pub fn peek_dimensions(header: &[u8]) -> Option<(u16, u16)> {
    if header.len() < PCX_HEADER_SIZE || header[0] != MANUFACTURER || header[3] != 8 {
        return None;
    }
    let xmin = u16_at(header, 4);
    let ymin = u16_at(header, 6);
    let xmax = u16_at(header, 8);
    let ymax = u16_at(header, 10);
    if xmax < xmin || ymax < ymin {
        return None;
    }
    Some((xmax - xmin + 1, ymax - ymin + 1))
}

/// Decode a complete PCX payload.
pub fn decode(data: &[u8]) -> Result<PcxImage, AnalysisError> {
    if data.len() < PCX_HEADER_SIZE {
        return Err(AnalysisError::TooSmall {
            expected: PCX_HEADER_SIZE as u64,
            actual: data.len() as u64,
        });
    }
    if data[0] != MANUFACTURER {
        return Err(AnalysisError::invalid_format(format!(
            "not a PCX image: manufacturer byte 0x{:02X}, expected 0x0A",
            data[0]
        )));
    }
    let encoding = data[2];
    let bits_per_pixel = data[3];
    if bits_per_pixel != 8 {
        return Err(AnalysisError::unsupported(format!(
            "{}-bit PCX; only 8-bit indexed sprites are supported",
            bits_per_pixel
        )));
    }
    let planes = data[65];
    if planes != 1 {
        return Err(AnalysisError::unsupported(format!(
            "{}-plane PCX; only single-plane sprites are supported",
            planes
        )));
    }

    let xmin = u16_at(data, 4);
    let ymin = u16_at(data, 6);
    let xmax = u16_at(data, 8);
    let ymax = u16_at(data, 10);
    if xmax < xmin || ymax < ymin {
        return Err(AnalysisError::corrupted_header(format!(
            "PCX window is inverted: ({},{})-({},{})",
            xmin, ymin, xmax, ymax
        )));
    }
    let width = (xmax - xmin + 1) as usize;
    let height = (ymax - ymin + 1) as usize;
    let bytes_per_line = u16_at(data, 66) as usize;

    let palette = tail_palette(data);
    let image_end = if palette.is_some() {
        data.len() - TAIL_PALETTE_SIZE
    } else {
        data.len()
    };

    let pixels = decode_scanlines(
        &data[PCX_HEADER_SIZE..image_end],
        width,
        height,
        bytes_per_line.max(width),
        encoding,
    );

    Ok(PcxImage {
        width: width as u16,
        height: height as u16,
        pixels,
        palette,
    })
}

/// The 256-color palette appended after the image data, if present.
pub(crate) fn tail_palette(data: &[u8]) -> Option<Palette> {
    if data.len() < PCX_HEADER_SIZE + TAIL_PALETTE_SIZE {
        return None;
    }
    let tail = &data[data.len() - TAIL_PALETTE_SIZE..];
    if tail[0] != TAIL_PALETTE_MARKER {
        return None;
    }
    Some(Palette::from_rgb(&tail[1..]))
}

/// Scanline-oriented RLE decode. Runs never cross a scanline; padding
/// bytes beyond the visible width are consumed and dropped. Truncated
/// data leaves the remaining pixels at index 0.
fn decode_scanlines(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_line: usize,
    encoding: u8,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height];
    let mut pos = 0usize;

    'rows: for row in 0..height {
        let mut col = 0usize;
        while col < bytes_per_line {
            let Some(&b) = data.get(pos) else { break 'rows };
            pos += 1;
            let (count, value) = if encoding == 1 && b >= 0xC0 {
                let Some(&v) = data.get(pos) else { break 'rows };
                pos += 1;
                ((b & 0x3F) as usize, v)
            } else {
                (1, b)
            };
            for _ in 0..count {
                if col >= bytes_per_line {
                    break;
                }
                if col < width {
                    pixels[row * width + col] = value;
                }
                col += 1;
            }
        }
    }

    pixels
}

#[cfg(test)]
#[path = "tests/pcx_tests.rs"]
mod tests;
