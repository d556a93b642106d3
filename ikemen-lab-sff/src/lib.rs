//! SFF sprite-container parsing for MUGEN-derived engine content.
//!
//! Supports:
//! - v1.x containers (linked-list subfiles, PCX payloads, positional
//!   palettes)
//! - v2.x containers (sprite/palette node tables, RLE8 / RLE5 / LZ5
//!   payloads, indexed palettes)
//! - Portrait lookup (group 9000) with dimensions available without
//!   pixel decoding

pub mod analyzer;
pub mod codec;
pub mod file;
pub mod header;
pub mod pcx;
pub mod sprite;
mod v1;
mod v2;

#[cfg(test)]
pub(crate) mod testutil;

pub use analyzer::SffAnalyzer;
pub use file::{PORTRAIT_GROUP, PORTRAIT_LARGE, PORTRAIT_SMALL, SffFile};
pub use header::{SffHeader, V1Header, V2Header};
pub use sprite::{Palette, Sprite, SpriteFormat, SpriteInfo};
