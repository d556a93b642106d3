//! SFF container header parsing.
//!
//! Both container generations share a 512-byte header starting with the
//! `ElecbyteSpr\0` signature and four version bytes (minor-to-major;
//! the last byte is the major version, 1 or 2). The field layout after
//! that diverges completely.

use std::io::SeekFrom;

use ikemen_lab_core::{AnalysisError, ReadSeek};
use ikemen_lab_core::util::read_ascii;

/// Container signature, including the terminating NUL.
pub const SIGNATURE: [u8; 12] = *b"ElecbyteSpr\0";

/// Both header generations occupy 512 bytes.
pub const HEADER_SIZE: u64 = 512;

/// v1 subfile headers are 32 bytes, PCX data follows immediately.
pub const V1_SUBFILE_HEADER_SIZE: u64 = 32;

/// v2 sprite directory nodes are 28 bytes each.
pub const V2_SPRITE_NODE_SIZE: u64 = 28;

/// v2 palette directory nodes are 16 bytes each.
pub const V2_PALETTE_NODE_SIZE: u64 = 16;

/// Parsed SFF header, one variant per container generation.
#[derive(Debug, Clone)]
pub enum SffHeader {
    V1(V1Header),
    V2(V2Header),
}

#[derive(Debug, Clone)]
pub struct V1Header {
    pub version: [u8; 4],
    pub group_count: u32,
    pub sprite_count: u32,
    pub first_subfile_offset: u32,
    pub subheader_size: u32,
    /// Palette type byte: non-zero means sprites share palettes by default
    pub shared_palette: bool,
    /// Free-text comment field, often a generator tag
    pub comment: String,
}

#[derive(Debug, Clone)]
pub struct V2Header {
    pub version: [u8; 4],
    pub sprite_list_offset: u32,
    pub sprite_count: u32,
    pub palette_list_offset: u32,
    pub palette_count: u32,
    pub ldata_offset: u32,
    pub ldata_length: u32,
    pub tdata_offset: u32,
    pub tdata_length: u32,
}

impl SffHeader {
    /// Human-readable version string, e.g. "1.010" or "2.000".
    pub fn version_string(&self) -> String {
        let v = match self {
            Self::V1(h) => h.version,
            Self::V2(h) => h.version,
        };
        format!("{}.{}{}{}", v[3], v[2], v[1], v[0])
    }

    pub fn sprite_count(&self) -> u32 {
        match self {
            Self::V1(h) => h.sprite_count,
            Self::V2(h) => h.sprite_count,
        }
    }
}

/// Read and parse the container header.
pub fn parse_header(reader: &mut dyn ReadSeek) -> Result<SffHeader, AnalysisError> {
    let file_size = reader.seek(SeekFrom::End(0))?;
    if file_size < HEADER_SIZE {
        return Err(AnalysisError::TooSmall {
            expected: HEADER_SIZE,
            actual: file_size,
        });
    }
    reader.seek(SeekFrom::Start(0))?;

    let mut buf = [0u8; HEADER_SIZE as usize];
    reader.read_exact(&mut buf)?;

    if buf[..12] != SIGNATURE {
        return Err(AnalysisError::invalid_format(
            "missing ElecbyteSpr signature",
        ));
    }

    let version = [buf[12], buf[13], buf[14], buf[15]];
    match version[3] {
        1 => Ok(SffHeader::V1(V1Header {
            version,
            group_count: u32_at(&buf, 16),
            sprite_count: u32_at(&buf, 20),
            first_subfile_offset: u32_at(&buf, 24),
            subheader_size: u32_at(&buf, 28),
            shared_palette: buf[32] != 0,
            comment: read_ascii(&buf[36..512]),
        })),
        2 => Ok(SffHeader::V2(V2Header {
            version,
            sprite_list_offset: u32_at(&buf, 36),
            sprite_count: u32_at(&buf, 40),
            palette_list_offset: u32_at(&buf, 44),
            palette_count: u32_at(&buf, 48),
            ldata_offset: u32_at(&buf, 52),
            ldata_length: u32_at(&buf, 56),
            tdata_offset: u32_at(&buf, 60),
            tdata_length: u32_at(&buf, 64),
        })),
        other => Err(AnalysisError::unsupported(format!(
            "SFF major version {} (only 1 and 2 are supported)",
            other
        ))),
    }
}

/// Quick signature check for format auto-detection.
pub fn sniff(reader: &mut dyn ReadSeek) -> bool {
    if reader.seek(SeekFrom::Start(0)).is_err() {
        return false;
    }
    let mut magic = [0u8; 12];
    let ok = reader.read_exact(&mut magic).is_ok() && magic == SIGNATURE;
    let _ = reader.seek(SeekFrom::Start(0));
    ok
}

pub(crate) fn u32_at(buf: &[u8], off: usize) -> u32 {
    u32::from_le_bytes([buf[off], buf[off + 1], buf[off + 2], buf[off + 3]])
}

pub(crate) fn u16_at(buf: &[u8], off: usize) -> u16 {
    u16::from_le_bytes([buf[off], buf[off + 1]])
}

pub(crate) fn i16_at(buf: &[u8], off: usize) -> i16 {
    i16::from_le_bytes([buf[off], buf[off + 1]])
}

#[cfg(test)]
#[path = "tests/header_tests.rs"]
mod tests;
