#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line driver that seeds a grid and animates it in the terminal.

mod config;

use std::ops::ControlFlow;

use anyhow::Result;
use clap::Parser;
use life_core::{Command, Event};
use life_rendering::{Presentation, RenderingBackend, TerminalBackend};
use life_system_seeding::Seeding;
use life_world::{self as world, query, Grid};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Args, Settings};

/// Entry point for the `life` command-line interface.
fn main() -> Result<()> {
    init_tracing();
    let settings = Settings::from_args(Args::parse())?;
    run(&settings, TerminalBackend::stdout())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Seeds a grid according to `settings` and hands the frame loop to `backend`.
fn run(settings: &Settings, backend: impl RenderingBackend) -> Result<()> {
    let mut grid = Grid::with_dimensions(settings.dimensions);
    let mut events = Vec::new();

    let mut seeding = Seeding::new(settings.preset);
    let mut commands = Vec::new();
    seeding.seed(grid.dimensions(), &mut commands);
    for command in commands {
        world::apply(&mut grid, command, &mut events);
    }

    info!(
        preset = ?settings.preset,
        width = grid.width(),
        height = grid.height(),
        population = grid.population(),
        "starting simulation"
    );

    let presentation = Presentation::new(settings.delay, settings.clear_screen, true);
    let glyphs = settings.glyphs;
    let limit = settings.generations;

    backend.run(presentation, |scene| {
        if limit.is_some_and(|limit| grid.generation() >= limit) {
            info!(generation = grid.generation(), "generation limit reached");
            return ControlFlow::Break(());
        }

        events.clear();
        world::apply(&mut grid, Command::Advance, &mut events);
        for event in &events {
            if let Event::GenerationAdvanced {
                generation,
                population,
                births,
                deaths,
            } = event
            {
                debug!(generation, population, births, deaths, "generation advanced");
            }
        }

        scene.grid = query::render_with(&grid, glyphs);
        scene.generation = grid.generation();
        ControlFlow::Continue(())
    })
}
