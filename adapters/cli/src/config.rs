//! Run settings resolved from the command line and an optional TOML file.

use std::{fs, path::Path, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use life_core::{Dimensions, Glyphs};
use life_system_seeding::Preset;
use serde::Deserialize;
use tracing::warn;

/// Command-line arguments accepted by the `life` binary.
#[derive(Debug, Default, Parser)]
#[command(
    name = "life",
    version,
    about = "Conway's Game of Life on a toroidal grid, rendered as text"
)]
pub(crate) struct Args {
    /// Starting configuration.
    #[arg(long, value_enum)]
    pub(crate) preset: Option<PresetKind>,
    /// Number of columns.
    #[arg(long)]
    pub(crate) width: Option<u32>,
    /// Number of rows.
    #[arg(long)]
    pub(crate) height: Option<u32>,
    /// Live cells seeded by the random preset (defaults to a quarter of the grid).
    #[arg(long)]
    pub(crate) population: Option<usize>,
    /// Seed of the random preset (defaults to a fresh random seed).
    #[arg(long)]
    pub(crate) seed: Option<u64>,
    /// Pause between generations in milliseconds.
    #[arg(long = "delay-ms")]
    pub(crate) delay_ms: Option<u64>,
    /// Number of generations to run; 0 runs until interrupted.
    #[arg(long)]
    pub(crate) generations: Option<u64>,
    /// Glyph drawn for live cells.
    #[arg(long)]
    pub(crate) alive: Option<char>,
    /// Glyph drawn for dead cells.
    #[arg(long)]
    pub(crate) dead: Option<char>,
    /// Append frames instead of clearing the terminal between them.
    #[arg(long)]
    pub(crate) no_clear: bool,
    /// TOML file providing defaults for any of the options above.
    #[arg(long)]
    pub(crate) config: Option<PathBuf>,
}

/// Preset names accepted on the command line and in configuration files.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum PresetKind {
    /// Hand-placed five-cell seed on a 30x30 grid.
    Fixed,
    /// Single glider on a 20x20 grid.
    Glider,
    /// Random population.
    Random,
}

/// Contents of the optional configuration file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    preset: Option<PresetKind>,
    width: Option<u32>,
    height: Option<u32>,
    population: Option<usize>,
    seed: Option<u64>,
    delay_ms: Option<u64>,
    generations: Option<u64>,
    alive: Option<char>,
    dead: Option<char>,
    clear_screen: Option<bool>,
}

impl FileConfig {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration at {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("invalid configuration at {}", path.display()))
    }

    fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("failed to parse configuration toml contents")
    }
}

/// Fully validated settings driving one run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub(crate) dimensions: Dimensions,
    pub(crate) preset: Preset,
    pub(crate) delay: Duration,
    pub(crate) generations: Option<u64>,
    pub(crate) glyphs: Glyphs,
    pub(crate) clear_screen: bool,
}

impl Settings {
    /// Loads the configuration file named by `args`, if any, and resolves settings.
    pub(crate) fn from_args(args: Args) -> Result<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        Self::resolve(args, file, rand::random)
    }

    /// Merges command-line arguments over file values over preset defaults.
    pub(crate) fn resolve(
        args: Args,
        file: FileConfig,
        random_seed: impl FnOnce() -> u64,
    ) -> Result<Self> {
        let kind = args.preset.or(file.preset).unwrap_or(PresetKind::Random);
        let population = args.population.or(file.population);
        let seed = args.seed.or(file.seed);

        let preset = match kind {
            PresetKind::Fixed => Preset::Fixed,
            PresetKind::Glider => Preset::Glider,
            PresetKind::Random => Preset::Random {
                population,
                seed: seed.unwrap_or_else(random_seed),
            },
        };
        if kind != PresetKind::Random && (population.is_some() || seed.is_some()) {
            warn!(?kind, "population and seed only apply to the random preset");
        }

        let (default_width, default_height) = preset.default_size();
        let width = args.width.or(file.width).unwrap_or(default_width);
        let height = args.height.or(file.height).unwrap_or(default_height);
        let dimensions = Dimensions::new(width, height)
            .with_context(|| format!("invalid grid size {width}x{height}"))?;

        let defaults = Glyphs::default();
        let alive = args.alive.or(file.alive).unwrap_or(defaults.alive());
        let dead = args.dead.or(file.dead).unwrap_or(defaults.dead());
        let glyphs = Glyphs::new(alive, dead).context("invalid glyphs")?;

        let delay = args
            .delay_ms
            .or(file.delay_ms)
            .map_or_else(|| preset.default_delay(), Duration::from_millis);
        let generations = args
            .generations
            .or(file.generations)
            .filter(|&limit| limit > 0);
        let clear_screen = !args.no_clear && file.clear_screen.unwrap_or(true);

        Ok(Self {
            dimensions,
            preset,
            delay,
            generations,
            glyphs,
            clear_screen,
        })
    }
}
