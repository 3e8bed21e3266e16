//! The creature record handed to the renderer

use std::fmt;

/// Everything known about one Pokémon for a single run.
///
/// Fields the API did not provide are `None`; they render as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pokemon {
    /// Localized display name
    pub name: Option<String>,
    /// Canonical API name (e.g. "mr-mime"), used to find the icon file
    pub alias: Option<String>,
    /// National dex number
    pub id: u32,
    /// Canonical type names in slot order; the second is `None` for single-typed creatures
    pub types: [Option<String>; 2],
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Flavor text for the configured game and language
    pub description: Option<String>,
    /// Localized genus, e.g. "Mouse Pokémon"
    pub genus: Option<String>,
    /// Pre-rendered ANSI art
    pub icon: Option<String>,
}

/// Regular or shiny coloring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Standard palette
    #[default]
    Regular,
    /// Alternate rare palette
    Shiny,
}

impl Variant {
    /// Lowercase name, also the icon subdirectory
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Shiny => "shiny",
        }
    }

    /// Whether this is the shiny variant
    #[must_use]
    pub const fn is_shiny(self) -> bool {
        matches!(self, Self::Shiny)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Regular.to_string(), "regular");
        assert_eq!(Variant::Shiny.to_string(), "shiny");
        assert!(Variant::Shiny.is_shiny());
        assert!(!Variant::default().is_shiny());
    }

    #[test]
    fn test_default_record_is_empty() {
        let pokemon = Pokemon::default();
        assert_eq!(pokemon.id, 0);
        assert!(pokemon.name.is_none());
        assert_eq!(pokemon.types, [None, None]);
    }
}
