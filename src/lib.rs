//! Pokefetch - Pokémon cards for the terminal
//!
//! Fetches a random or chosen Pokémon from PokéAPI and prints a
//! truecolor card: pixel-art icon, title banner and type badges.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod api;
pub mod cli;
pub mod config;
pub mod pokemon;
pub mod render;
pub mod select;

#[cfg(test)]
mod testutil;

// Re-export commonly used types
pub use api::{load_icon, parse_pokemon, PokeApiClient};
pub use cli::{display, display_to, CardOptions, DisplayError};
pub use config::{Config, Language};
pub use pokemon::{Pokemon, Variant};
pub use render::{
    center_pad, color_for, render_title, render_type_badges, visible_width, ColorSpec,
    PokemonType, RenderError,
};
