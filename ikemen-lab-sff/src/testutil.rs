//! Builders for synthetic SFF containers used across the test modules.

use crate::header::SIGNATURE;

/// A v1 test sprite: either a PCX payload or a link to an earlier entry.
pub(crate) struct V1TestSprite {
    pub group: u16,
    pub item: u16,
    pub payload: Vec<u8>,
    /// Directory index of the sprite this one links to (payload empty)
    pub link: u16,
    /// Emit the "same palette as previous" flag when false
    pub own_palette: bool,
}

impl V1TestSprite {
    pub fn pcx(group: u16, item: u16, payload: Vec<u8>, own_palette: bool) -> Self {
        Self {
            group,
            item,
            payload,
            link: 0,
            own_palette,
        }
    }

    pub fn linked(group: u16, item: u16, link: u16) -> Self {
        Self {
            group,
            item,
            payload: Vec::new(),
            link,
            own_palette: false,
        }
    }
}

/// Build a v1.010 container from test sprites.
pub(crate) fn build_v1_sff(sprites: &[V1TestSprite]) -> Vec<u8> {
    let mut out = vec![0u8; 512];
    out[..12].copy_from_slice(&SIGNATURE);
    out[12..16].copy_from_slice(&[0, 1, 0, 1]); // 1.010
    out[16..20].copy_from_slice(&1u32.to_le_bytes()); // group count
    out[20..24].copy_from_slice(&(sprites.len() as u32).to_le_bytes());
    out[24..28].copy_from_slice(&512u32.to_le_bytes()); // first subfile
    out[28..32].copy_from_slice(&32u32.to_le_bytes()); // subheader size
    out[32] = 0; // individual palettes
    let comment = b"synthetic test container";
    out[36..36 + comment.len()].copy_from_slice(comment);

    let mut offset = 512u32;
    for sprite in sprites {
        let next = offset + 32 + sprite.payload.len() as u32;
        let mut sub = [0u8; 32];
        sub[0..4].copy_from_slice(&next.to_le_bytes());
        sub[4..8].copy_from_slice(&(sprite.payload.len() as u32).to_le_bytes());
        // Axis fields stay zero; directory tests don't need them.
        sub[12..14].copy_from_slice(&sprite.group.to_le_bytes());
        sub[14..16].copy_from_slice(&sprite.item.to_le_bytes());
        sub[16..18].copy_from_slice(&sprite.link.to_le_bytes());
        sub[18] = if sprite.own_palette { 0 } else { 1 };
        out.extend_from_slice(&sub);
        out.extend_from_slice(&sprite.payload);
        offset = next;
    }

    out
}

/// A v2 test sprite node plus its payload bytes.
pub(crate) struct V2TestSprite {
    pub group: u16,
    pub item: u16,
    pub width: u16,
    pub height: u16,
    pub format: u8,
    /// Payload as stored (size prefix included for compressed formats);
    /// empty means a link to `link`
    pub data: Vec<u8>,
    pub link: u16,
    pub palette: u16,
    /// Node flags; bit 0 selects tdata over ldata
    pub flags: u16,
}

/// A v2 test palette: RGBA colors, or empty to link to another entry.
pub(crate) struct V2TestPalette {
    pub colors: Vec<[u8; 4]>,
    pub link: u16,
}

/// Build a v2.000 container: header, node tables, ldata, tdata.
pub(crate) fn build_v2_sff(sprites: &[V2TestSprite], palettes: &[V2TestPalette]) -> Vec<u8> {
    let sprite_list_offset = 512u32;
    let palette_list_offset = sprite_list_offset + 28 * sprites.len() as u32;
    let ldata_offset = palette_list_offset + 16 * palettes.len() as u32;

    // Palette payloads go first in ldata, then ldata sprite payloads.
    let mut ldata: Vec<u8> = Vec::new();
    let mut palette_nodes: Vec<[u8; 16]> = Vec::new();
    for (i, palette) in palettes.iter().enumerate() {
        let mut node = [0u8; 16];
        node[0..2].copy_from_slice(&1u16.to_le_bytes()); // group
        node[2..4].copy_from_slice(&(i as u16).to_le_bytes()); // item
        node[4..6].copy_from_slice(&(palette.colors.len() as u16).to_le_bytes());
        node[6..8].copy_from_slice(&palette.link.to_le_bytes());
        node[8..12].copy_from_slice(&(ldata.len() as u32).to_le_bytes());
        node[12..16].copy_from_slice(&((palette.colors.len() * 4) as u32).to_le_bytes());
        for color in &palette.colors {
            ldata.extend_from_slice(color);
        }
        palette_nodes.push(node);
    }

    let mut tdata: Vec<u8> = Vec::new();
    let mut sprite_nodes: Vec<[u8; 28]> = Vec::new();
    for sprite in sprites {
        let block = if sprite.flags & 1 == 0 {
            &mut ldata
        } else {
            &mut tdata
        };
        let data_offset = block.len() as u32;
        block.extend_from_slice(&sprite.data);

        let mut node = [0u8; 28];
        node[0..2].copy_from_slice(&sprite.group.to_le_bytes());
        node[2..4].copy_from_slice(&sprite.item.to_le_bytes());
        node[4..6].copy_from_slice(&sprite.width.to_le_bytes());
        node[6..8].copy_from_slice(&sprite.height.to_le_bytes());
        node[12..14].copy_from_slice(&sprite.link.to_le_bytes());
        node[14] = sprite.format;
        node[15] = 8; // color depth
        node[16..20].copy_from_slice(&data_offset.to_le_bytes());
        node[20..24].copy_from_slice(&(sprite.data.len() as u32).to_le_bytes());
        node[24..26].copy_from_slice(&sprite.palette.to_le_bytes());
        node[26..28].copy_from_slice(&sprite.flags.to_le_bytes());
        sprite_nodes.push(node);
    }

    let ldata_length = ldata.len() as u32;
    let tdata_offset = ldata_offset + ldata_length;

    let mut out = vec![0u8; 512];
    out[..12].copy_from_slice(&SIGNATURE);
    out[12..16].copy_from_slice(&[0, 0, 0, 2]); // 2.000
    out[36..40].copy_from_slice(&sprite_list_offset.to_le_bytes());
    out[40..44].copy_from_slice(&(sprites.len() as u32).to_le_bytes());
    out[44..48].copy_from_slice(&palette_list_offset.to_le_bytes());
    out[48..52].copy_from_slice(&(palettes.len() as u32).to_le_bytes());
    out[52..56].copy_from_slice(&ldata_offset.to_le_bytes());
    out[56..60].copy_from_slice(&ldata_length.to_le_bytes());
    out[60..64].copy_from_slice(&tdata_offset.to_le_bytes());
    out[64..68].copy_from_slice(&(tdata.len() as u32).to_le_bytes());

    for node in &sprite_nodes {
        out.extend_from_slice(node);
    }
    for node in &palette_nodes {
        out.extend_from_slice(node);
    }
    out.extend_from_slice(&ldata);
    out.extend_from_slice(&tdata);
    out
}

/// Prefix a compressed payload with its decompressed-size field.
pub(crate) fn with_size_prefix(decompressed: u32, stream: &[u8]) -> Vec<u8> {
    let mut data = decompressed.to_le_bytes().to_vec();
    data.extend_from_slice(stream);
    data
}

/// Encode an 8-bit PCX image. Every pixel is emitted literally, with
/// bytes >= 0xC0 escaped as one-byte runs so the decoder's RLE path
/// still round-trips.
pub(crate) fn encode_pcx(
    width: u16,
    height: u16,
    pixels: &[u8],
    palette: Option<&[u8]>,
) -> Vec<u8> {
    assert_eq!(pixels.len(), width as usize * height as usize);

    let mut out = vec![0u8; 128];
    out[0] = 0x0A;
    out[1] = 5; // version
    out[2] = 1; // RLE
    out[3] = 8; // bits per pixel
    out[8..10].copy_from_slice(&(width - 1).to_le_bytes());
    out[10..12].copy_from_slice(&(height - 1).to_le_bytes());
    out[65] = 1; // planes
    out[66..68].copy_from_slice(&width.to_le_bytes());

    for &px in pixels {
        if px >= 0xC0 {
            out.push(0xC1);
        }
        out.push(px);
    }

    if let Some(rgb) = palette {
        assert_eq!(rgb.len(), 768);
        out.push(0x0C);
        out.extend_from_slice(rgb);
    }

    out
}

/// A 768-byte RGB palette ramp: color i is (i, 0, 255 - i).
pub(crate) fn test_palette_rgb() -> Vec<u8> {
    let mut rgb = Vec::with_capacity(768);
    for i in 0..256u32 {
        rgb.push(i as u8);
        rgb.push(0);
        rgb.push(255 - i as u8);
    }
    rgb
}
