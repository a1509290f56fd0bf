#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Shared presentation contracts for life adapters.
//!
//! Adapters describe what to show with a [`Scene`] and hand control to a
//! [`RenderingBackend`], which owns the frame loop, writes every frame to its
//! output device and paces the loop.

use std::{
    io::{self, Write},
    ops::ControlFlow,
    thread,
    time::Duration,
};

use anyhow::{Context, Result as AnyResult};
use tracing::{debug, trace};

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// Static presentation settings chosen by the adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Presentation {
    /// Pause inserted after each presented frame.
    pub frame_delay: Duration,
    /// Whether each frame starts by clearing the terminal.
    pub clear_screen: bool,
    /// Whether the generation counter is appended below the grid.
    pub show_generation: bool,
}

impl Presentation {
    /// Creates a new presentation descriptor.
    #[must_use]
    pub const fn new(frame_delay: Duration, clear_screen: bool, show_generation: bool) -> Self {
        Self {
            frame_delay,
            clear_screen,
            show_generation,
        }
    }
}

impl Default for Presentation {
    fn default() -> Self {
        Self::new(Duration::ZERO, true, true)
    }
}

/// Snapshot of the simulation prepared for the next frame.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Scene {
    /// Serialized grid, one line per row.
    pub grid: String,
    /// Generation the serialized grid belongs to.
    pub generation: u64,
}

impl Scene {
    /// Creates a new scene descriptor.
    #[must_use]
    pub fn new(grid: impl Into<String>, generation: u64) -> Self {
        Self {
            grid: grid.into(),
            generation,
        }
    }
}

/// Builds the exact text written for one frame.
#[must_use]
pub fn compose_frame(presentation: &Presentation, scene: &Scene) -> String {
    let mut frame = String::with_capacity(CLEAR_SCREEN.len() + scene.grid.len() + 24);
    if presentation.clear_screen {
        frame.push_str(CLEAR_SCREEN);
    }
    frame.push_str(&scene.grid);
    if !scene.grid.is_empty() && !scene.grid.ends_with('\n') {
        frame.push('\n');
    }
    if presentation.show_generation {
        frame.push_str(&format!("generation: {}\n", scene.generation));
    }
    frame
}

/// Rendering backend capable of presenting life scenes.
pub trait RenderingBackend {
    /// Runs the backend until `update_scene` breaks the loop.
    ///
    /// Before every frame the closure receives the scene to fill in. It
    /// returns [`ControlFlow::Break`] to stop without presenting another
    /// frame.
    fn run<F>(self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(&mut Scene) -> ControlFlow<()>;
}

/// Backend writing plain-text frames to any [`Write`] sink.
#[derive(Debug)]
pub struct TerminalBackend<W> {
    writer: W,
}

impl TerminalBackend<io::Stdout> {
    /// Creates a backend writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalBackend<W> {
    /// Creates a backend writing to the provided sink.
    #[must_use]
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the backend and returns the underlying sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn present(&mut self, frame: &str) -> AnyResult<()> {
        self.writer
            .write_all(frame.as_bytes())
            .context("failed to write frame")?;
        self.writer.flush().context("failed to flush frame")
    }
}

impl<W: Write> RenderingBackend for &mut TerminalBackend<W> {
    fn run<F>(self, presentation: Presentation, mut update_scene: F) -> AnyResult<()>
    where
        F: FnMut(&mut Scene) -> ControlFlow<()>,
    {
        let mut scene = Scene::default();
        let mut frames: u64 = 0;
        while let ControlFlow::Continue(()) = update_scene(&mut scene) {
            self.present(&compose_frame(&presentation, &scene))?;
            frames += 1;
            trace!(generation = scene.generation, "presented frame");
            if !presentation.frame_delay.is_zero() {
                thread::sleep(presentation.frame_delay);
            }
        }
        debug!(frames, "terminal backend stopped");
        Ok(())
    }
}

impl<W: Write> RenderingBackend for TerminalBackend<W> {
    fn run<F>(mut self, presentation: Presentation, update_scene: F) -> AnyResult<()>
    where
        F: FnMut(&mut Scene) -> ControlFlow<()>,
    {
        (&mut self).run(presentation, update_scene)
    }
}
