//! Card display for a single Pokémon
//!
//! Renders every line of the card up front and only then writes them,
//! so a formatting failure leaves the terminal untouched. The card goes
//! to stdout; diagnostics are left to the caller.

use std::io::{self, Write};

use thiserror::Error;

use crate::pokemon::{Pokemon, Variant};
use crate::render::{
    render_description, render_title, render_type_badges, visible_width, RenderError,
};

/// Why a card could not be displayed
#[derive(Error, Debug)]
pub enum DisplayError {
    /// The record has neither name nor genus, so there is no title to draw
    #[error("title formatting failed: record #{0} has no name and no genus")]
    Title(u32),
    /// A type badge could not be rendered
    #[error("type formatting failed")]
    Types(#[source] RenderError),
    /// Writing the rendered card failed
    #[error("failed to write card")]
    Io(#[from] io::Error),
}

/// Optional parts of the card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CardOptions {
    /// Print the flavor text under the badges
    pub show_description: bool,
}

/// Render the card for `pokemon` and print it to stdout.
pub fn display(pokemon: &Pokemon, variant: Variant) -> Result<(), DisplayError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    display_to(&mut out, pokemon, variant, CardOptions::default())
}

/// Render the card for `pokemon` and write it to `out`.
///
/// Writes, in order: the icon (when present), the title line, the badge
/// line and, if enabled, the description lines.
pub fn display_to<W: Write>(
    out: &mut W,
    pokemon: &Pokemon,
    variant: Variant,
    options: CardOptions,
) -> Result<(), DisplayError> {
    let lines = render_card(pokemon, variant, options)?;

    if let Some(icon) = &pokemon.icon {
        out.write_all(icon.as_bytes())?;
        if !icon.is_empty() && !icon.ends_with('\n') {
            writeln!(out)?;
        }
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;

    Ok(())
}

/// Build the text lines of the card (everything but the icon).
fn render_card(
    pokemon: &Pokemon,
    variant: Variant,
    options: CardOptions,
) -> Result<Vec<String>, DisplayError> {
    if pokemon.name.is_none() && pokemon.genus.is_none() {
        return Err(DisplayError::Title(pokemon.id));
    }

    let title = render_title(
        pokemon.id,
        pokemon.name.as_deref(),
        pokemon.genus.as_deref(),
        variant,
    );
    let width = visible_width(&title);
    let badges = render_type_badges(&pokemon.types, width).map_err(DisplayError::Types)?;

    let mut lines = vec![title, badges];
    if options.show_description {
        if let Some(description) = &pokemon.description {
            lines.extend(render_description(description, width));
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::make_test_pokemon;

    fn render_to_string(pokemon: &Pokemon, options: CardOptions) -> Result<String, DisplayError> {
        let mut out = Vec::new();
        display_to(&mut out, pokemon, Variant::Regular, options)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_card_has_icon_title_and_badges() {
        let output = render_to_string(&make_test_pokemon(), CardOptions::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains('▀'));
        assert!(lines[1].contains("0001"));
        assert!(lines[2].contains("Grass"));
        assert!(lines[2].contains("Poison"));
    }

    #[test]
    fn test_missing_icon_is_not_fatal() {
        let pokemon = Pokemon {
            icon: None,
            ..make_test_pokemon()
        };
        let output = render_to_string(&pokemon, CardOptions::default()).unwrap();
        assert_eq!(output.lines().count(), 2);
    }

    #[test]
    fn test_icon_with_trailing_newline_not_doubled() {
        let pokemon = Pokemon {
            icon: Some("▀▀\n▄▄\n".to_string()),
            ..make_test_pokemon()
        };
        let output = render_to_string(&pokemon, CardOptions::default()).unwrap();
        assert_eq!(output.lines().count(), 4);
        assert!(output.lines().all(|l| !l.is_empty()));
    }

    #[test]
    fn test_unknown_type_prints_nothing() {
        let pokemon = Pokemon {
            types: [Some("grass".to_string()), Some("cosmic".to_string())],
            ..make_test_pokemon()
        };
        let mut out = Vec::new();
        let err = display_to(&mut out, &pokemon, Variant::Regular, CardOptions::default())
            .unwrap_err();
        assert!(matches!(err, DisplayError::Types(RenderError::UnknownType(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_nameless_record_prints_nothing() {
        let pokemon = Pokemon {
            name: None,
            genus: None,
            ..make_test_pokemon()
        };
        let mut out = Vec::new();
        let err = display_to(&mut out, &pokemon, Variant::Shiny, CardOptions::default())
            .unwrap_err();
        assert!(matches!(err, DisplayError::Title(1)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_genus_still_renders() {
        let pokemon = Pokemon {
            genus: None,
            ..make_test_pokemon()
        };
        let output = render_to_string(&pokemon, CardOptions::default()).unwrap();
        assert!(output.contains(" Bulbizarre - "));
    }

    #[test]
    fn test_badges_centered_under_title() {
        let output = render_to_string(&make_test_pokemon(), CardOptions::default()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        let title_width = visible_width(lines[1]);
        let badge_width = visible_width(lines[2].trim_start());
        let indent = lines[2].len() - lines[2].trim_start().len();
        assert_eq!(indent, (title_width - badge_width) / 2);
    }

    #[test]
    fn test_description_lines_when_enabled() {
        let options = CardOptions {
            show_description: true,
        };
        let output = render_to_string(&make_test_pokemon(), options).unwrap();
        assert!(output.lines().count() > 3);
        assert!(output.contains("graine"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            DisplayError::Title(4).to_string(),
            "title formatting failed: record #4 has no name and no genus"
        );
        assert_eq!(
            DisplayError::Types(RenderError::UnknownType("x".to_string())).to_string(),
            "type formatting failed"
        );
    }
}
