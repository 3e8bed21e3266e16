//! PokéAPI integration
//!
//! Fetches the raw JSON documents, extracts the `Pokemon` record from
//! them and attaches the locally stored icon.

pub mod client;
pub mod icon;
pub mod parse;

pub use client::PokeApiClient;
pub use icon::load_icon;
pub use parse::parse_pokemon;
