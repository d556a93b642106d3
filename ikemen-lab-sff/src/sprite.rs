//! Sprite and palette types shared by both container versions.

/// An indexed-color palette, 256 entries or fewer, RGBA per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Build from packed 3-byte RGB groups (PCX tail palettes).
    pub fn from_rgb(bytes: &[u8]) -> Self {
        let colors = bytes
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2], 255])
            .collect();
        Self { colors }
    }

    /// Build from packed 4-byte RGBA groups (v2 palette data).
    pub fn from_rgba(bytes: &[u8]) -> Self {
        let colors = bytes.chunks_exact(4).map(|c| [c[0], c[1], c[2], c[3]]).collect();
        Self { colors }
    }

    /// Color for an index; out-of-range indices are opaque black.
    pub fn color(&self, index: u8) -> [u8; 4] {
        self.colors
            .get(index as usize)
            .copied()
            .unwrap_or([0, 0, 0, 255])
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Pixel storage format of a sprite inside the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteFormat {
    /// PCX graphic data (v1 subfiles)
    Pcx,
    /// Uncompressed indexed bytes (v2 format 0)
    Raw,
    /// Run-length, 6-bit counts (v2 format 2)
    Rle8,
    /// Run-length, 3-bit counts with packed color data (v2 format 3)
    Rle5,
    /// LZ back-references with control bytes (v2 format 4)
    Lz5,
    /// PNG payload (v2.01 formats 10-12); recognized, not decoded
    Png(u8),
}

impl SpriteFormat {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Pcx => "PCX",
            Self::Raw => "raw",
            Self::Rle8 => "RLE8",
            Self::Rle5 => "RLE5",
            Self::Lz5 => "LZ5",
            Self::Png(_) => "PNG",
        }
    }
}

/// Directory entry for one sprite, known before any pixel decoding.
#[derive(Debug, Clone)]
pub struct SpriteInfo {
    /// Group number (9000 holds portraits)
    pub group: u16,
    /// Item number within the group
    pub item: u16,
    pub width: u16,
    pub height: u16,
    /// Drawing axis relative to the top-left corner
    pub axis_x: i16,
    pub axis_y: i16,
    /// Directory index of the sprite this one shares pixel data with
    pub linked: Option<u16>,
    pub format: SpriteFormat,
    pub(crate) data_offset: u64,
    pub(crate) data_len: u32,
    /// Palette directory index (v2 only)
    pub(crate) palette_index: Option<u16>,
    /// Whether the sprite carries its own palette (v1 only)
    pub(crate) own_palette: bool,
}

/// A fully decoded sprite: indexed pixels plus the palette to view
/// them through.
#[derive(Debug, Clone)]
pub struct Sprite {
    pub group: u16,
    pub item: u16,
    pub width: u16,
    pub height: u16,
    pub axis_x: i16,
    pub axis_y: i16,
    /// Row-major indexed pixels, `width * height` bytes
    pub pixels: Vec<u8>,
    pub palette: Option<Palette>,
}

impl Sprite {
    /// Expand to RGBA. Index 0 is transparent, the engine's convention
    /// for all sprite art. Returns `None` without a palette.
    pub fn rgba(&self) -> Option<Vec<u8>> {
        let palette = self.palette.as_ref()?;
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &index in &self.pixels {
            if index == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
            } else {
                out.extend_from_slice(&palette.color(index));
            }
        }
        Some(out)
    }
}
