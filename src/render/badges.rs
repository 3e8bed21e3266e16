//! Type badges drawn under the title

use super::ansi::{center_pad, RESET};
use super::color::{color_for, PokemonType};
use super::RenderError;

/// Raw spaces between two badges
const BADGE_GAP: &str = "    ";

/// Build one colored badge, or fail for a name outside the type table.
fn badge(type_name: &str) -> Result<String, RenderError> {
    let colors = color_for(type_name)
        .ok_or_else(|| RenderError::UnknownType(type_name.to_string()))?;
    let label = type_name.parse::<PokemonType>()?.label();

    Ok(format!(
        "{}{} {label} {RESET}",
        colors.background.bg(),
        colors.foreground.fg(),
    ))
}

/// Render the badge row for up to two types, centered against `reference_width`.
///
/// Absent slots produce no badge. Two badges are separated by exactly four
/// raw spaces and the row always ends with a reset.
pub fn render_type_badges(
    types: &[Option<String>; 2],
    reference_width: usize,
) -> Result<String, RenderError> {
    let [first, second] = types;

    let first = first.as_deref().map(badge).transpose()?.unwrap_or_default();
    let row = match second.as_deref() {
        None => format!("{first}{RESET}"),
        Some(name) => format!("{first}{BADGE_GAP}{}{RESET}", badge(name)?),
    };

    Ok(center_pad(&row, reference_width))
}
