use super::*;
use crate::testutil::{encode_pcx, test_palette_rgb};

#[test]
fn decodes_simple_image_with_palette() {
    let pixels = vec![0, 1, 2, 3, 4, 5];
    let rgb = test_palette_rgb();
    let data = encode_pcx(3, 2, &pixels, Some(&rgb));

    let image = decode(&data).unwrap();
    assert_eq!(image.width, 3);
    assert_eq!(image.height, 2);
    assert_eq!(image.pixels, pixels);

    let palette = image.palette.unwrap();
    assert_eq!(palette.len(), 256);
    // Ramp palette: color i is (i, 0, 255 - i).
    assert_eq!(palette.color(3), [3, 0, 252, 255]);
}

#[test]
fn decodes_image_without_palette() {
    let data = encode_pcx(2, 2, &[9, 8, 7, 6], None);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels, vec![9, 8, 7, 6]);
    assert!(image.palette.is_none());
}

#[test]
fn high_pixel_values_survive_rle_escaping() {
    let pixels = vec![0xC0, 0xFF, 0x00, 0xC1];
    let data = encode_pcx(2, 2, &pixels, None);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels, pixels);
}

#[test]
fn run_length_encoding_expands() {
    // Hand-built: 4x1 image stored as a single run of four.
    let mut data = encode_pcx(4, 1, &[0, 0, 0, 0], None);
    data.truncate(128);
    data.extend_from_slice(&[0xC4, 7]);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels, vec![7, 7, 7, 7]);
}

#[test]
fn scanline_padding_dropped() {
    // Width 3 with 4 bytes per line: the padding byte never lands in
    // the output.
    let mut data = encode_pcx(3, 2, &[0; 6], None);
    data.truncate(128);
    data[66..68].copy_from_slice(&4u16.to_le_bytes());
    data.extend_from_slice(&[1, 2, 3, 99, 4, 5, 6, 99]);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn truncated_data_leaves_zero_pixels() {
    let mut data = encode_pcx(2, 2, &[0; 4], None);
    data.truncate(128);
    data.extend_from_slice(&[5]);
    let image = decode(&data).unwrap();
    assert_eq!(image.pixels, vec![5, 0, 0, 0]);
}

#[test]
fn peek_dimensions_reads_header_only() {
    let data = encode_pcx(40, 60, &vec![0; 2400], None);
    assert_eq!(peek_dimensions(&data[..128]), Some((40, 60)));
}

#[test]
fn peek_dimensions_rejects_non_pcx() {
    assert_eq!(peek_dimensions(&[0u8; 128]), None);
    assert_eq!(peek_dimensions(&[0x0A; 64]), None);
}

#[test]
fn rejects_short_buffer() {
    let err = decode(&[0x0A; 100]).unwrap_err();
    assert!(matches!(err, AnalysisError::TooSmall { .. }));
}

#[test]
fn rejects_bad_manufacturer() {
    let mut data = encode_pcx(2, 2, &[0; 4], None);
    data[0] = 0x42;
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidFormat(_)));
}

#[test]
fn rejects_non_8bit_depth() {
    let mut data = encode_pcx(2, 2, &[0; 4], None);
    data[3] = 1;
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedVariant(_)));
}
