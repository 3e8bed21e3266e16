//! Type color table
//!
//! Maps every Pokémon type to the fixed pair of colors used when drawing
//! it. The set of types is closed; anything else has no colors.

use std::fmt;
use std::str::FromStr;

use super::ansi::Rgb;
use super::RenderError;

/// A Pokémon elemental type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PokemonType {
    /// normal
    Normal,
    /// fire
    Fire,
    /// water
    Water,
    /// grass
    Grass,
    /// fighting
    Fighting,
    /// flying
    Flying,
    /// poison
    Poison,
    /// electric
    Electric,
    /// ground
    Ground,
    /// rock
    Rock,
    /// psychic
    Psychic,
    /// ice
    Ice,
    /// bug
    Bug,
    /// dragon
    Dragon,
    /// ghost
    Ghost,
    /// dark
    Dark,
    /// steel
    Steel,
    /// fairy
    Fairy,
}

impl PokemonType {
    /// Every type, in table order
    pub const ALL: [Self; 18] = [
        Self::Normal,
        Self::Fire,
        Self::Water,
        Self::Grass,
        Self::Fighting,
        Self::Flying,
        Self::Poison,
        Self::Electric,
        Self::Ground,
        Self::Rock,
        Self::Psychic,
        Self::Ice,
        Self::Bug,
        Self::Dragon,
        Self::Ghost,
        Self::Dark,
        Self::Steel,
        Self::Fairy,
    ];

    /// The canonical lowercase name used by PokéAPI
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Fire => "fire",
            Self::Water => "water",
            Self::Grass => "grass",
            Self::Fighting => "fighting",
            Self::Flying => "flying",
            Self::Poison => "poison",
            Self::Electric => "electric",
            Self::Ground => "ground",
            Self::Rock => "rock",
            Self::Psychic => "psychic",
            Self::Ice => "ice",
            Self::Bug => "bug",
            Self::Dragon => "dragon",
            Self::Ghost => "ghost",
            Self::Dark => "dark",
            Self::Steel => "steel",
            Self::Fairy => "fairy",
        }
    }

    /// Badge label: the name with its first letter capitalized
    #[must_use]
    pub fn label(self) -> String {
        let name = self.as_str();
        let mut chars = name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_ascii_uppercase().to_string() + chars.as_str()
        })
    }

    /// The colors this type is drawn with
    #[must_use]
    pub const fn colors(self) -> ColorSpec {
        // Light fills get dark text, dark fills get white text
        const DARK: Rgb = Rgb(0, 0, 0);
        const LIGHT: Rgb = Rgb(255, 255, 255);

        let (foreground, background) = match self {
            Self::Normal => (DARK, Rgb(168, 167, 122)),
            Self::Fire => (DARK, Rgb(238, 129, 48)),
            Self::Water => (DARK, Rgb(99, 144, 240)),
            Self::Grass => (DARK, Rgb(122, 199, 76)),
            Self::Fighting => (LIGHT, Rgb(194, 46, 40)),
            Self::Flying => (DARK, Rgb(169, 143, 243)),
            Self::Poison => (LIGHT, Rgb(163, 62, 161)),
            Self::Electric => (DARK, Rgb(247, 208, 44)),
            Self::Ground => (DARK, Rgb(226, 191, 101)),
            Self::Rock => (DARK, Rgb(182, 161, 54)),
            Self::Psychic => (DARK, Rgb(249, 85, 135)),
            Self::Ice => (DARK, Rgb(150, 217, 214)),
            Self::Bug => (DARK, Rgb(166, 185, 26)),
            Self::Dragon => (LIGHT, Rgb(111, 53, 252)),
            Self::Ghost => (LIGHT, Rgb(115, 87, 151)),
            Self::Dark => (LIGHT, Rgb(112, 87, 70)),
            Self::Steel => (DARK, Rgb(183, 183, 206)),
            Self::Fairy => (DARK, Rgb(214, 133, 173)),
        };

        ColorSpec {
            foreground,
            background,
        }
    }
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PokemonType {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| RenderError::UnknownType(s.to_string()))
    }
}

/// Foreground/background pair for one type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpec {
    /// Text color on top of the fill
    pub foreground: Rgb,
    /// The type's signature color
    pub background: Rgb,
}

impl ColorSpec {
    /// Foreground escape tinting text in the type's signature color
    #[must_use]
    pub fn accent(self) -> String {
        self.background.fg()
    }
}

/// Look up the colors for a type by name.
///
/// Returns `None` for names outside the closed type set.
#[must_use]
pub fn color_for(type_name: &str) -> Option<ColorSpec> {
    type_name.parse::<PokemonType>().ok().map(PokemonType::colors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_resolves_by_name() {
        for t in PokemonType::ALL {
            assert_eq!(color_for(t.as_str()), Some(t.colors()), "{t}");
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(color_for("FIRE"), Some(PokemonType::Fire.colors()));
        assert_eq!("Grass".parse::<PokemonType>(), Ok(PokemonType::Grass));
    }

    #[test]
    fn test_unknown_type_name_error() {
        assert_eq!(
            "shadow".parse::<PokemonType>(),
            Err(RenderError::UnknownType("shadow".to_string()))
        );
    }

    #[test]
    fn test_unknown_type_has_no_colors() {
        assert_eq!(color_for("shadow"), None);
        assert_eq!(color_for(""), None);
        assert_eq!(color_for("Not Found"), None);
    }

    #[test]
    fn test_labels_are_capitalized() {
        assert_eq!(PokemonType::Fire.label(), "Fire");
        assert_eq!(PokemonType::Psychic.label(), "Psychic");
    }

    #[test]
    fn test_electric_accent_fragment() {
        assert_eq!(
            PokemonType::Electric.colors().accent(),
            "\x1b[38;2;247;208;44m"
        );
    }

    #[test]
    fn test_signature_colors_are_distinct() {
        let mut seen = std::collections::HashSet::new();
        for t in PokemonType::ALL {
            let Rgb(r, g, b) = t.colors().background;
            assert!(seen.insert((r, g, b)), "duplicate color for {t}");
        }
    }
}
