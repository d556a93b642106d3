//! Typed gameplay-stat extraction.
//!
//! Thin accessors over the section parser. Every field substitutes the
//! engine's own documented default when the key is absent or malformed,
//! so stat extraction succeeds even against broken community content.

use crate::parse::DefFile;

/// Engine default values for character gameplay constants.
pub const DEFAULT_LIFE: i32 = 1000;
pub const DEFAULT_ATTACK: i32 = 100;
pub const DEFAULT_DEFENCE: i32 = 100;
pub const DEFAULT_POWER: i32 = 3000;
pub const DEFAULT_AIR_JUGGLE: i32 = 15;
pub const DEFAULT_FALL_DEFENCE_UP: i32 = 50;

/// Character gameplay constants from the `[Data]` section of a CNS file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterStats {
    pub life: i32,
    pub attack: i32,
    pub defence: i32,
    pub power: i32,
    pub air_juggle: i32,
    pub fall_defence_up: i32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            life: DEFAULT_LIFE,
            attack: DEFAULT_ATTACK,
            defence: DEFAULT_DEFENCE,
            power: DEFAULT_POWER,
            air_juggle: DEFAULT_AIR_JUGGLE,
            fall_defence_up: DEFAULT_FALL_DEFENCE_UP,
        }
    }
}

impl CharacterStats {
    /// Extract stats from a parsed definition, defaulting field by field.
    pub fn from_def(def: &DefFile) -> Self {
        Self {
            life: def.int_in("data", "life", DEFAULT_LIFE),
            attack: def.int_in("data", "attack", DEFAULT_ATTACK),
            defence: def.int_in("data", "defence", DEFAULT_DEFENCE),
            power: def.int_in("data", "power", DEFAULT_POWER),
            air_juggle: def.int_in("data", "airjuggle", DEFAULT_AIR_JUGGLE),
            fall_defence_up: def.int_in("data", "fall.defence_up", DEFAULT_FALL_DEFENCE_UP),
        }
    }
}

/// Stage camera bounds from the `[Camera]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraBounds {
    pub left: i32,
    pub right: i32,
    pub high: i32,
    pub low: i32,
}

impl CameraBounds {
    /// Extract camera bounds, preferring the `[Camera]` section and
    /// falling back to root-level keys, zero when absent entirely.
    pub fn from_def(def: &DefFile) -> Self {
        Self {
            left: bound(def, "boundleft"),
            right: bound(def, "boundright"),
            high: bound(def, "boundhigh"),
            low: bound(def, "boundlow"),
        }
    }
}

fn bound(def: &DefFile, key: &str) -> i32 {
    def.value_in("camera", key)
        .or_else(|| def.value(key))
        .and_then(|v| v.parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "tests/stats_tests.rs"]
mod tests;
