//! Random choice of Pokémon and variant

use anyhow::{bail, Result};
use rand::Rng;

use crate::pokemon::Variant;

/// Pick a dex number uniformly in `1..=count`.
pub fn random_id<R: Rng + ?Sized>(rng: &mut R, count: u32) -> Result<u32> {
    if count == 0 {
        bail!("Cannot pick a Pokémon: the API reports 0 species");
    }
    Ok(rng.gen_range(1..=count))
}

/// Check that an explicitly requested dex number exists.
pub fn check_id(id: u32, count: u32) -> Result<u32> {
    if !(1..=count).contains(&id) {
        bail!("Invalid id {id}: must be an integer between 1 and {count}");
    }
    Ok(id)
}

/// Roll for shininess: one chance in `shiny_rate`.
///
/// A rate of 0 is treated as 1 (always shiny).
pub fn roll_variant<R: Rng + ?Sized>(rng: &mut R, shiny_rate: u32) -> Variant {
    if rng.gen_range(0..shiny_rate.max(1)) == 0 {
        Variant::Shiny
    } else {
        Variant::Regular
    }
}
