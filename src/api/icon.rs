//! Icon lookup
//!
//! Icons are pre-rendered ANSI art stored as
//! `{icons_dir}/{regular|shiny}/{alias}.txt`, with `{icons_dir}/unknown.txt`
//! as the fallback for creatures that have no art.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::pokemon::Variant;

/// File name of the fallback icon
pub const UNKNOWN_ICON: &str = "unknown.txt";

/// Path of the icon for `alias` in the given variant
#[must_use]
pub fn icon_path(icons_dir: &Path, variant: Variant, alias: &str) -> PathBuf {
    icons_dir.join(variant.as_str()).join(format!("{alias}.txt"))
}

/// Load the icon for `alias`, falling back to the unknown icon.
///
/// A missing icon is not an error: returns `None` after logging a warning.
#[must_use]
pub fn load_icon(icons_dir: &Path, variant: Variant, alias: Option<&str>) -> Option<String> {
    let candidates = alias
        .map(|alias| icon_path(icons_dir, variant, alias))
        .into_iter()
        .chain(std::iter::once(icons_dir.join(UNKNOWN_ICON)));

    for path in candidates {
        match fs::read_to_string(&path) {
            Ok(icon) => {
                debug!(path = %path.display(), "loaded icon");
                return Some(icon);
            }
            Err(err) => debug!(path = %path.display(), %err, "icon not readable"),
        }
    }

    warn!(
        dir = %icons_dir.display(),
        alias = alias.unwrap_or_default(),
        "no icon found"
    );
    None
}
