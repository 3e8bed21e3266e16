//! Configuration parser
//!
//! Parses an optional `pokefetch.toml`. Every field has a default, so an
//! empty file (or no file at all) is a valid configuration.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Config file looked up when `--config` is not given
pub const DEFAULT_CONFIG_PATH: &str = "pokefetch.toml";

/// Language of names, genus and flavor text
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    En,
    /// French
    #[default]
    Fr,
    /// German
    De,
    /// Spanish
    Es,
    /// Italian
    It,
    /// Japanese
    Ja,
    /// Korean
    Ko,
}

impl Language {
    /// Language code as used by PokéAPI
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
            Self::It => "it",
            Self::Ja => "ja",
            Self::Ko => "ko",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Language for localized text (default: fr)
    #[serde(default)]
    pub language: Language,
    /// Game version whose flavor text is shown (default: omega-ruby)
    #[serde(default = "default_game")]
    pub game: String,
    /// One in `shiny_rate` draws is shiny (default: 4)
    #[serde(default = "default_shiny_rate")]
    pub shiny_rate: u32,
    /// PokéAPI base URL, without trailing slash
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Directory holding `regular/` and `shiny/` icon files
    #[serde(default = "default_icons_dir")]
    pub icons_dir: PathBuf,
    /// HTTP request timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Print the flavor text under the badges
    #[serde(default)]
    pub show_description: bool,
}

fn default_game() -> String {
    "omega-ruby".to_string()
}

const fn default_shiny_rate() -> u32 {
    4
}

fn default_api_url() -> String {
    "https://pokeapi.co/api/v2".to_string()
}

fn default_icons_dir() -> PathBuf {
    PathBuf::from("assets/icons")
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: Language::default(),
            game: default_game(),
            shiny_rate: default_shiny_rate(),
            api_url: default_api_url(),
            icons_dir: default_icons_dir(),
            timeout_secs: default_timeout_secs(),
            show_description: false,
        }
    }
}

impl Config {
    /// Parse a config file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse config content from a string
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse pokefetch.toml")?;
        config.validate()?;
        Ok(config)
    }

    /// Load the configuration for a run.
    ///
    /// An explicit path must exist. Without one, `pokefetch.toml` in the
    /// working directory is used if present, defaults otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_path(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_PATH);
                if path.exists() {
                    Self::from_path(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.shiny_rate == 0 {
            bail!("shiny_rate must be at least 1");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        if self.api_url.trim().is_empty() {
            bail!("api_url cannot be empty");
        }
        if self.game.trim().is_empty() {
            bail!("game cannot be empty");
        }
        Ok(())
    }
}
