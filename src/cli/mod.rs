//! CLI output
//!
//! Writes the rendered Pokémon card to the terminal.

pub mod display;

pub use display::display;
pub use display::display_to;
pub use display::CardOptions;
pub use display::DisplayError;
