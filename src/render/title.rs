//! Title banner: `[ 0025 ] Name - Genus`

use super::ansi::{Rgb, RESET};
use super::color::PokemonType;
use crate::pokemon::Variant;

const ID_BACKGROUND: Rgb = Rgb(255, 255, 255);
const ID_FOREGROUND: Rgb = Rgb(0, 0, 0);

/// Build the single-line title banner.
///
/// The dex number sits in a white block; name and genus follow in the
/// default color, or tinted with the electric color for shiny variants.
/// Missing name or genus render as empty text.
#[must_use]
pub fn render_title(id: u32, name: Option<&str>, genus: Option<&str>, variant: Variant) -> String {
    let name = name.unwrap_or_default();
    let genus = genus.unwrap_or_default();

    let tint = if variant.is_shiny() {
        PokemonType::Electric.colors().accent()
    } else {
        String::new()
    };

    format!(
        "{}{} {id:04} {RESET}{tint} {name} - {genus}{RESET}",
        ID_BACKGROUND.bg(),
        ID_FOREGROUND.fg(),
    )
}
