use super::*;
use std::io::Cursor;

use crate::file::SffFile;
use crate::sprite::SpriteFormat;
use crate::testutil::{V2TestPalette, V2TestSprite, build_v2_sff, with_size_prefix};

fn base_palette() -> V2TestPalette {
    V2TestPalette {
        colors: vec![
            [0, 0, 0, 0],
            [255, 0, 0, 255],
            [0, 255, 0, 255],
            [0, 0, 255, 255],
        ],
        link: 0,
    }
}

/// RLE8 sprite (2x2), a link to it, a linked palette, and a tdata
/// sprite.
fn sample_file() -> Vec<u8> {
    // Pixels [1, 1, 2, 3]: run of two 1s, then literals.
    let rle8 = with_size_prefix(4, &[0x42, 1, 2, 3]);
    let raw_tdata = vec![3, 2, 1];
    build_v2_sff(
        &[
            V2TestSprite {
                group: 0,
                item: 0,
                width: 2,
                height: 2,
                format: 2,
                data: rle8,
                link: 0,
                palette: 0,
                flags: 0,
            },
            V2TestSprite {
                group: 9000,
                item: 0,
                width: 2,
                height: 2,
                format: 2,
                data: Vec::new(),
                link: 0,
                palette: 1,
                flags: 0,
            },
            V2TestSprite {
                group: 1,
                item: 0,
                width: 3,
                height: 1,
                format: 0,
                data: raw_tdata,
                link: 0,
                palette: 0,
                flags: 1,
            },
        ],
        &[
            base_palette(),
            V2TestPalette {
                colors: Vec::new(),
                link: 0,
            },
        ],
    )
}

#[test]
fn directory_reports_metadata() {
    let sff = SffFile::open(Cursor::new(sample_file())).unwrap();
    let sprites = sff.sprites();
    assert_eq!(sprites.len(), 3);
    assert_eq!(sff.palette_count(), 2);
    assert_eq!((sprites[0].width, sprites[0].height), (2, 2));
    assert_eq!(sprites[0].format, SpriteFormat::Rle8);
    assert_eq!(sprites[0].linked, None);
    assert_eq!(sprites[1].linked, Some(0));
    assert_eq!(sprites[2].format, SpriteFormat::Raw);
}

#[test]
fn decodes_rle8_sprite_with_palette() {
    let mut sff = SffFile::open(Cursor::new(sample_file())).unwrap();
    let sprite = sff.decode(0).unwrap();
    assert_eq!(sprite.pixels, vec![1, 1, 2, 3]);
    let palette = sprite.palette.expect("palette 0 is present");
    assert_eq!(palette.len(), 4);
    assert_eq!(palette.color(1), [255, 0, 0, 255]);
}

#[test]
fn linked_sprite_and_linked_palette_resolve() {
    let mut sff = SffFile::open(Cursor::new(sample_file())).unwrap();
    let sprite = sff.decode(1).unwrap();
    assert_eq!(sprite.pixels, vec![1, 1, 2, 3]);
    assert_eq!((sprite.group, sprite.item), (9000, 0));
    // Palette 1 carries no data and links to palette 0.
    let palette = sprite.palette.expect("linked palette resolves");
    assert_eq!(palette.color(2), [0, 255, 0, 255]);
}

#[test]
fn raw_sprite_in_tdata_decodes() {
    let mut sff = SffFile::open(Cursor::new(sample_file())).unwrap();
    let sprite = sff.decode(2).unwrap();
    assert_eq!(sprite.pixels, vec![3, 2, 1]);
}

#[test]
fn rgba_expansion() {
    let mut sff = SffFile::open(Cursor::new(sample_file())).unwrap();
    let sprite = sff.decode(0).unwrap();
    let rgba = sprite.rgba().unwrap();
    assert_eq!(rgba.len(), 16);
    assert_eq!(&rgba[0..4], &[255, 0, 0, 255]);
    assert_eq!(&rgba[8..12], &[0, 255, 0, 255]);
}

#[test]
fn png_payload_is_recognized_but_not_decoded() {
    let data = build_v2_sff(
        &[V2TestSprite {
            group: 0,
            item: 0,
            width: 2,
            height: 2,
            format: 11,
            data: vec![0x89, b'P', b'N', b'G'],
            link: 0,
            palette: 0,
            flags: 0,
        }],
        &[base_palette()],
    );
    let mut sff = SffFile::open(Cursor::new(data)).unwrap();
    assert_eq!(sff.sprites()[0].format, SpriteFormat::Png(11));
    let err = sff.decode(0).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedVariant(_)));
}

#[test]
fn unknown_sprite_format_is_rejected() {
    let data = build_v2_sff(
        &[V2TestSprite {
            group: 0,
            item: 0,
            width: 1,
            height: 1,
            format: 7,
            data: vec![0],
            link: 0,
            palette: 0,
            flags: 0,
        }],
        &[],
    );
    let err = SffFile::open(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedVariant(_)));
}

#[test]
fn truncated_node_table_is_a_corrupted_header() {
    let mut data = sample_file();
    // Claim far more sprites than the file holds.
    data[40..44].copy_from_slice(&100u32.to_le_bytes());
    let err = SffFile::open(Cursor::new(data)).unwrap_err();
    assert!(matches!(err, AnalysisError::CorruptedHeader(_)));
}
