//! Terminal card rendering
//!
//! Pure string building: escape-aware measurement, the type color table,
//! and the title, badge and description lines of the card. Nothing here
//! performs I/O.

pub mod ansi;
pub mod badges;
pub mod color;
pub mod description;
pub mod title;

use thiserror::Error;

pub use ansi::{center_pad, visible_width, Rgb, RESET};
pub use badges::render_type_badges;
pub use color::{color_for, ColorSpec, PokemonType};
pub use description::render_description;
pub use title::render_title;

/// A renderer could not produce valid output
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A type name outside the color table
    #[error("unknown type '{0}'")]
    UnknownType(String),
}
