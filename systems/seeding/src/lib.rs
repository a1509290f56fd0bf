#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic seeding system that emits the initial population of a grid.
//!
//! The system never touches a grid directly. It answers with a batch of
//! [`Command`] values which the caller applies before the first generation.

use std::time::Duration;

use life_core::{CellCoord, Command, Dimensions, Pattern};
use rand::{seq::index, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

/// Cells seeded by the [`Preset::Fixed`] configuration as `(row, column)` pairs.
pub const FIXED_SEED: [(u32, u32); 5] = [(1, 3), (3, 2), (3, 3), (3, 4), (2, 4)];

/// Share of cells brought to life when a random preset has no explicit population.
const DEFAULT_RANDOM_DENSITY_PERCENT: usize = 25;

/// Starting configurations the seeding system knows how to produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// Five hand-placed cells forming a glider near the top-left corner.
    Fixed,
    /// A single glider anchored at the origin.
    Glider,
    /// A uniformly random population of distinct cells.
    Random {
        /// Number of live cells to seed; `None` seeds a quarter of the grid.
        population: Option<usize>,
        /// Seed of the deterministic random generator.
        seed: u64,
    },
}

impl Preset {
    /// Grid size the preset is designed for as `(width, height)`.
    #[must_use]
    pub const fn default_size(&self) -> (u32, u32) {
        match self {
            Self::Fixed => (30, 30),
            Self::Glider => (20, 20),
            Self::Random { .. } => (60, 30),
        }
    }

    /// Pause between generations the preset is designed for.
    #[must_use]
    pub const fn default_delay(&self) -> Duration {
        match self {
            Self::Fixed => Duration::from_millis(300),
            Self::Glider => Duration::from_millis(100),
            Self::Random { .. } => Duration::from_millis(200),
        }
    }
}

/// Pure system translating a [`Preset`] into seeding commands.
#[derive(Debug)]
pub struct Seeding {
    preset: Preset,
    source: Source,
}

/// Per-preset state; only random seeding owns a generator.
#[derive(Debug)]
enum Source {
    Fixed,
    Glider,
    Random {
        population: Option<usize>,
        rng: ChaCha8Rng,
    },
}

impl Seeding {
    /// Creates a seeding system for the provided preset.
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        let source = match preset {
            Preset::Fixed => Source::Fixed,
            Preset::Glider => Source::Glider,
            Preset::Random { population, seed } => Source::Random {
                population,
                rng: ChaCha8Rng::seed_from_u64(seed),
            },
        };
        Self { preset, source }
    }

    /// Preset driving the system.
    #[must_use]
    pub const fn preset(&self) -> Preset {
        self.preset
    }

    /// Emits the commands that seed a grid of the provided size.
    ///
    /// Fixed and glider presets always emit the same batch. Random presets
    /// draw a fresh population from the generator on every call, so a
    /// sequence of calls is reproducible for a given seed.
    pub fn seed(&mut self, dimensions: Dimensions, out: &mut Vec<Command>) {
        match &mut self.source {
            Source::Fixed => {
                out.extend(FIXED_SEED.iter().map(|&(row, column)| Command::SetCell {
                    cell: CellCoord::new(row, column),
                    alive: true,
                }));
            }
            Source::Glider => out.push(Command::PlacePattern {
                pattern: Pattern::Glider,
                anchor: CellCoord::new(0, 0),
            }),
            Source::Random { population, rng } => {
                let requested = (*population).unwrap_or_else(|| default_population(dimensions));
                seed_random(rng, dimensions, requested, out);
            }
        }
    }
}

fn seed_random(
    rng: &mut ChaCha8Rng,
    dimensions: Dimensions,
    requested: usize,
    out: &mut Vec<Command>,
) {
    let cell_count = dimensions.cell_count();
    let population = if requested > cell_count {
        warn!(
            requested,
            cell_count, "random population exceeds grid capacity; clamping"
        );
        cell_count
    } else {
        requested
    };

    let mut indices = index::sample(rng, cell_count, population).into_vec();
    indices.sort_unstable();

    let width = dimensions.width() as usize;
    out.extend(indices.into_iter().map(|index| Command::SetCell {
        cell: CellCoord::new((index / width) as u32, (index % width) as u32),
        alive: true,
    }));
    debug!(population, "seeded random population");
}

/// Population seeded by a random preset without an explicit count.
#[must_use]
pub fn default_population(dimensions: Dimensions) -> usize {
    dimensions.cell_count() * DEFAULT_RANDOM_DENSITY_PERCENT / 100
}
