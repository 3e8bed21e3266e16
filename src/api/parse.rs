//! Record extraction from PokéAPI documents
//!
//! Pulls the fields the card needs out of the `pokemon/{id}` and
//! `pokemon-species/{id}` JSON documents. Missing fields become `None`
//! (or 0 for numbers); only a document that isn't an object is an error.

use anyhow::{bail, Result};
use serde_json::Value;
use tracing::warn;

use crate::config::Language;
use crate::pokemon::Pokemon;

/// Build a `Pokemon` from its two API documents.
///
/// `language` selects the localized name, genus and flavor text; `game`
/// selects which game's flavor text is used. The icon is left empty.
pub fn parse_pokemon(
    pokemon: &Value,
    species: &Value,
    language: Language,
    game: &str,
) -> Result<Pokemon> {
    if !pokemon.is_object() {
        bail!("pokemon document is not a JSON object");
    }
    if !species.is_object() {
        bail!("pokemon-species document is not a JSON object");
    }

    let lang = language.code();
    let record = Pokemon {
        name: localized(species, "names", "name", lang),
        alias: pokemon.get("name").and_then(Value::as_str).map(str::to_string),
        id: get_u32(pokemon, "id"),
        types: parse_types(pokemon),
        height: get_u32(pokemon, "height"),
        weight: get_u32(pokemon, "weight"),
        description: flavor_text(species, lang, game),
        genus: localized(species, "genera", "genus", lang),
        icon: None,
    };

    if record.name.is_none() {
        warn!(id = record.id, lang, "no localized name");
    }
    if record.genus.is_none() {
        warn!(id = record.id, lang, "no localized genus");
    }

    Ok(record)
}

/// Read the `count` field of a paginated list document.
#[must_use]
pub fn parse_count(value: &Value) -> Option<u32> {
    value
        .get("count")
        .and_then(Value::as_u64)
        .and_then(|c| u32::try_from(c).ok())
}

fn get_u32(value: &Value, key: &str) -> u32 {
    value
        .get(key)
        .and_then(Value::as_u64)
        .map_or(0, |v| u32::try_from(v).unwrap_or(u32::MAX))
}

/// Name of the nested `{ "name": .. }` object under `key`, e.g. `language.name`.
fn nested_name<'a>(value: &'a Value, key: &str) -> Option<&'a str> {
    value.get(key)?.get("name")?.as_str()
}

/// Type names ordered by their `slot`, at most two.
fn parse_types(pokemon: &Value) -> [Option<String>; 2] {
    let mut slots: Vec<(u64, &str)> = pokemon
        .get("types")
        .and_then(Value::as_array)
        .map(|types| {
            types
                .iter()
                .filter_map(|entry| {
                    let slot = entry.get("slot").and_then(Value::as_u64).unwrap_or(u64::MAX);
                    nested_name(entry, "type").map(|name| (slot, name))
                })
                .collect()
        })
        .unwrap_or_default();
    slots.sort_by_key(|&(slot, _)| slot);

    let mut names = slots.into_iter().map(|(_, name)| name.to_string());
    [names.next(), names.next()]
}

/// Find `field` in the entry of array `key` whose `language.name` is `lang`.
fn localized(species: &Value, key: &str, field: &str, lang: &str) -> Option<String> {
    species
        .get(key)?
        .as_array()?
        .iter()
        .find(|entry| nested_name(entry, "language") == Some(lang))?
        .get(field)?
        .as_str()
        .map(str::to_string)
}

fn flavor_text(species: &Value, lang: &str, game: &str) -> Option<String> {
    species
        .get("flavor_text_entries")?
        .as_array()?
        .iter()
        .find(|entry| {
            nested_name(entry, "language") == Some(lang)
                && nested_name(entry, "version") == Some(game)
        })?
        .get("flavor_text")?
        .as_str()
        .map(normalize_flavor_text)
}

/// Flavor text carries the games' hard line breaks, form feeds and soft
/// hyphens; collapse them into plain single-spaced text.
fn normalize_flavor_text(text: &str) -> String {
    text.replace('\u{ad}', "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
