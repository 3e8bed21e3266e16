//! Pokefetch - Pokémon cards for the terminal
//!
//! CLI entry point.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use pokefetch::cli::{display_to, CardOptions};
use pokefetch::config::{Config, Language};
use pokefetch::select::{check_id, random_id, roll_variant};
use pokefetch::{load_icon, parse_pokemon, PokeApiClient, Variant};

/// Print a Pokémon card in the terminal
///
/// Picks a random Pokémon (or the one given with --id), fetches its
/// localized name, genus and types from PokéAPI and draws its icon,
/// title and type badges in truecolor.
#[derive(Parser, Debug)]
#[command(name = "pokefetch", version, about)]
struct Cli {
    /// National dex number to show instead of a random one
    #[arg(long)]
    id: Option<u32>,

    /// One in N Pokémon is shiny
    #[arg(short = 's', long, value_parser = clap::value_parser!(u32).range(1..))]
    shiny_rate: Option<u32>,

    /// Always show the shiny variant
    #[arg(long)]
    shiny: bool,

    /// Language for name, genus and description
    #[arg(long, value_enum)]
    lang: Option<Language>,

    /// Game version whose description is shown (e.g. omega-ruby)
    #[arg(long)]
    game: Option<String>,

    /// Directory holding regular/ and shiny/ icon files
    #[arg(long)]
    icons_dir: Option<PathBuf>,

    /// PokéAPI base URL
    #[arg(long)]
    api_url: Option<String>,

    /// Print the description under the card
    #[arg(long)]
    describe: bool,

    /// Path to the configuration file (pokefetch.toml by default)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log requests and choices to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded configuration.
    fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(lang) = self.lang {
            config.language = lang;
        }
        if let Some(game) = &self.game {
            config.game.clone_from(game);
        }
        if let Some(rate) = self.shiny_rate {
            config.shiny_rate = rate;
        }
        if let Some(dir) = &self.icons_dir {
            config.icons_dir.clone_from(dir);
        }
        if let Some(url) = &self.api_url {
            config.api_url.clone_from(url);
        }
        config.show_description |= self.describe;
        config.validate()?;
        Ok(config)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pokefetch={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<()> {
    let config = cli.apply(Config::load(cli.config.as_deref())?)?;
    let client = PokeApiClient::new(&config.api_url, Duration::from_secs(config.timeout_secs))?;

    let count = client
        .species_count()
        .await
        .context("Failed to fetch the number of Pokémon")?;
    let (id, variant) = {
        let mut rng = rand::thread_rng();
        let id = match cli.id {
            Some(id) => check_id(id, count)?,
            None => random_id(&mut rng, count)?,
        };
        let variant = if cli.shiny {
            Variant::Shiny
        } else {
            roll_variant(&mut rng, config.shiny_rate)
        };
        (id, variant)
    };
    debug!(id, %variant, count, "selected");

    let (pokemon_json, species_json) = client
        .fetch(id)
        .await
        .with_context(|| format!("Failed to fetch Pokémon #{id}"))?;
    let mut pokemon = parse_pokemon(&pokemon_json, &species_json, config.language, &config.game)
        .with_context(|| format!("Failed to parse Pokémon #{id}"))?;
    pokemon.icon = load_icon(&config.icons_dir, variant, pokemon.alias.as_deref());

    let options = CardOptions {
        show_description: config.show_description,
    };
    let stdout = std::io::stdout();
    display_to(&mut stdout.lock(), &pokemon, variant, options)
        .context("Error displaying Pokémon")?;

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
