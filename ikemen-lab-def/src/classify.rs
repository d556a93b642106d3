//! Content-type classification from parsed definition structure.
//!
//! Classification looks only at section and key presence in the parsed
//! text, never at file names or extensions, which community packs get
//! wrong constantly. The rules are ordered; installation logic depends
//! on character winning collisions with stage signals, so the order is
//! part of the contract.

use ikemen_lab_core::ContentKind;

use crate::parse::DefFile;

/// Decide what kind of content a parsed definition file describes.
///
/// Priority order:
/// 1. A `scenedef` section makes the file a storyboard, full stop.
/// 2. An `fnt` section (any version) makes it a font, never a character.
/// 3. A `files` section plus any value referencing `.cmd`, `.cns`, or
///    `.air` makes it a character. The substring search is deliberately
///    loose to tolerate varied file-reference formatting.
/// 4. A `stageinfo` or `bgdef` section, or any `bg `-prefixed background
///    element, makes it a stage; character wins when both hold.
pub fn classify(def: &DefFile) -> ContentKind {
    if def.has_section("scenedef") {
        return ContentKind::Storyboard;
    }

    if def
        .section_names()
        .any(|s| s == "fnt" || s.starts_with("fnt v"))
    {
        return ContentKind::Font;
    }

    if def.has_section("files") && has_character_reference(def) {
        return ContentKind::Character;
    }

    if def.has_section("stageinfo")
        || def.has_section("bgdef")
        || def.section_names().any(|s| s.starts_with("bg "))
        || def.keys().any(|k| k.starts_with("bg "))
    {
        return ContentKind::Stage;
    }

    ContentKind::Unknown
}

/// Any value anywhere mentioning a command, constants, or animation file.
fn has_character_reference(def: &DefFile) -> bool {
    def.flat_values().any(|v| {
        let v = v.to_lowercase();
        v.contains(".cmd") || v.contains(".cns") || v.contains(".air")
    })
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
