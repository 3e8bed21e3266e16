//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::pokemon::Pokemon;

/// A fully populated Bulbasaur record with a one-line icon.
#[must_use]
pub fn make_test_pokemon() -> Pokemon {
    Pokemon {
        name: Some("Bulbizarre".to_string()),
        alias: Some("bulbasaur".to_string()),
        id: 1,
        types: [Some("grass".to_string()), Some("poison".to_string())],
        height: 7,
        weight: 69,
        description: Some(
            "Au matin de sa vie, la graine sur son dos lui fournit les éléments dont il a besoin pour grandir."
                .to_string(),
        ),
        genus: Some("Pokémon Graine".to_string()),
        icon: Some("\x1b[38;2;82;148;106m▀\x1b[0m\x1b[38;2;99;196;168m▄\x1b[0m".to_string()),
    }
}
