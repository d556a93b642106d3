use serde::{Deserialize, Serialize};

/// Content-kind identifiers for everything the engine can load.
///
/// This enum centralizes content identity — short names, display names,
/// and library folder aliases — in one place, replacing ad-hoc string
/// matching throughout the codebase. Classification itself lives in the
/// definition-file parser; this is only the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Character,
    Stage,
    Storyboard,
    Font,
    Unknown,
}

/// All kind variants in registration order.
const ALL_KINDS: &[ContentKind] = &[
    ContentKind::Character,
    ContentKind::Stage,
    ContentKind::Storyboard,
    ContentKind::Font,
    ContentKind::Unknown,
];

impl ContentKind {
    /// Canonical short name used for CLI filters and identifiers.
    pub fn short_name(&self) -> &'static str {
        match self {
            Self::Character => "char",
            Self::Stage => "stage",
            Self::Storyboard => "storyboard",
            Self::Font => "font",
            Self::Unknown => "unknown",
        }
    }

    /// Full display name for the kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Character => "Character",
            Self::Stage => "Stage",
            Self::Storyboard => "Storyboard",
            Self::Font => "Font",
            Self::Unknown => "Unknown",
        }
    }

    /// All accepted names for this kind (case-insensitive matching).
    ///
    /// Includes the canonical short name plus the library folder names
    /// the engine conventionally uses for this kind of content.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Character => &["char", "chars", "character", "characters"],
            Self::Stage => &["stage", "stages"],
            Self::Storyboard => &["storyboard", "storyboards", "data"],
            Self::Font => &["font", "fonts"],
            Self::Unknown => &["unknown"],
        }
    }

    /// All kind variants.
    pub fn all() -> &'static [ContentKind] {
        ALL_KINDS
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Error returned when a string cannot be parsed into a `ContentKind`.
#[derive(Debug, Clone)]
pub struct KindParseError(pub String);

impl std::fmt::Display for KindParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown content kind: '{}'", self.0)
    }
}

impl std::error::Error for KindParseError {}

impl std::str::FromStr for ContentKind {
    type Err = KindParseError;

    /// Parse a kind from any recognized name (case-insensitive).
    ///
    /// Matches against `short_name()` and all entries in `aliases()`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        for &kind in ALL_KINDS {
            if kind.short_name() == lower {
                return Ok(kind);
            }
            for alias in kind.aliases() {
                if *alias == lower {
                    return Ok(kind);
                }
            }
        }
        Err(KindParseError(s.to_string()))
    }
}
