#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the toroidal life engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative grid, and pure systems. Adapters and systems submit
//! [`Command`] values describing desired mutations, the grid executes those
//! commands via its `apply` entry point, and then reports [`Event`] values
//! describing what changed. Nothing in this crate simulates anything.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Glyph rendered for a live cell unless the caller chooses otherwise.
pub const DEFAULT_ALIVE_GLYPH: char = 'W';

/// Glyph rendered for a dead cell unless the caller chooses otherwise.
pub const DEFAULT_DEAD_GLYPH: char = '.';

/// Number of cells in a Moore neighborhood, excluding the centre cell.
pub const NEIGHBORHOOD_SIZE: u8 = 8;

/// Commands that express all permissible grid mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Forces a single cell into the provided state, bypassing the life rule.
    SetCell {
        /// Cell to mutate. Coordinates wrap around the torus.
        cell: CellCoord,
        /// State the cell should hold after the command.
        alive: bool,
    },
    /// Stamps a named pattern relative to the provided anchor cell.
    PlacePattern {
        /// Pattern to stamp.
        pattern: Pattern,
        /// Upper-left cell of the pattern's bounding box.
        anchor: CellCoord,
    },
    /// Kills every cell and resets the generation counter.
    Clear,
    /// Advances the simulation by exactly one generation.
    Advance,
}

/// Events reported by the grid after processing commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Confirms that a seeding command flipped the state of a cell.
    CellChanged {
        /// Canonical (wrapped) coordinate of the cell.
        cell: CellCoord,
        /// State the cell holds after the change.
        alive: bool,
    },
    /// Confirms that a pattern was stamped into the grid.
    PatternPlaced {
        /// Pattern that was stamped.
        pattern: Pattern,
        /// Canonical (wrapped) anchor of the pattern.
        anchor: CellCoord,
    },
    /// Announces that every cell was killed.
    Cleared,
    /// Announces that a generation was committed.
    GenerationAdvanced {
        /// Number of generations committed since construction or the last clear.
        generation: u64,
        /// Live cells after the commit.
        population: usize,
        /// Cells that came alive during the generation.
        births: usize,
        /// Cells that died during the generation.
        deaths: usize,
    },
}

/// Location of a cell expressed as zero-based row and column indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellCoord {
    row: u32,
    column: u32,
}

impl CellCoord {
    /// Creates a new cell coordinate from a row (y) and a column (x).
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Zero-based row index (y) of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }

    /// Zero-based column index (x) of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }
}

/// Validated size of a grid. Both axes are strictly positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDimensions", into = "RawDimensions")]
pub struct Dimensions {
    width: NonZeroU32,
    height: NonZeroU32,
}

impl Dimensions {
    /// Validates the provided width and height.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] when either axis is zero or when the
    /// cell count does not fit in a single allocation.
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        let columns = NonZeroU32::new(width).ok_or(DimensionError::ZeroWidth)?;
        let rows = NonZeroU32::new(height).ok_or(DimensionError::ZeroHeight)?;
        let _ = (width as usize)
            .checked_mul(height as usize)
            .filter(|&cells| cells <= isize::MAX as usize)
            .ok_or(DimensionError::TooLarge { width, height })?;
        Ok(Self {
            width: columns,
            height: rows,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width.get()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height.get()
    }

    /// Total number of cells covered by the dimensions.
    ///
    /// Never overflows: construction rejects sizes whose product does.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width.get() as usize * self.height.get() as usize
    }

    /// Wraps an arbitrary signed coordinate onto the torus.
    #[must_use]
    pub fn wrap(&self, row: i64, column: i64) -> CellCoord {
        let row = row.rem_euclid(i64::from(self.height()));
        let column = column.rem_euclid(i64::from(self.width()));
        CellCoord::new(row as u32, column as u32)
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawDimensions {
    width: u32,
    height: u32,
}

impl TryFrom<RawDimensions> for Dimensions {
    type Error = DimensionError;

    fn try_from(raw: RawDimensions) -> Result<Self, Self::Error> {
        Self::new(raw.width, raw.height)
    }
}

impl From<Dimensions> for RawDimensions {
    fn from(dimensions: Dimensions) -> Self {
        Self {
            width: dimensions.width(),
            height: dimensions.height(),
        }
    }
}

/// Reasons a grid size is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// The grid must contain at least one column.
    #[error("grid width must be positive")]
    ZeroWidth,
    /// The grid must contain at least one row.
    #[error("grid height must be positive")]
    ZeroHeight,
    /// The grid would hold more cells than a single buffer can address.
    #[error("grid of {width}x{height} cells is too large")]
    TooLarge {
        /// Requested number of columns.
        width: u32,
        /// Requested number of rows.
        height: u32,
    },
}

/// Pair of single-character glyphs used to serialize a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGlyphs", into = "RawGlyphs")]
pub struct Glyphs {
    alive: char,
    dead: char,
}

impl Glyphs {
    /// Validates a glyph pair.
    ///
    /// # Errors
    ///
    /// Returns [`GlyphError`] when a glyph is not a visible ASCII character
    /// (whitespace, control and zero-width characters included), or when
    /// both glyphs are identical.
    pub fn new(alive: char, dead: char) -> Result<Self, GlyphError> {
        for glyph in [alive, dead] {
            if !glyph.is_ascii_graphic() {
                return Err(GlyphError::Unprintable { glyph });
            }
        }
        if alive == dead {
            return Err(GlyphError::Indistinguishable { glyph: alive });
        }
        Ok(Self { alive, dead })
    }

    /// Glyph emitted for a live cell.
    #[must_use]
    pub const fn alive(&self) -> char {
        self.alive
    }

    /// Glyph emitted for a dead cell.
    #[must_use]
    pub const fn dead(&self) -> char {
        self.dead
    }

    /// Glyph matching the provided cell state.
    #[must_use]
    pub const fn for_state(&self, alive: bool) -> char {
        if alive {
            self.alive
        } else {
            self.dead
        }
    }
}

impl Default for Glyphs {
    fn default() -> Self {
        Self {
            alive: DEFAULT_ALIVE_GLYPH,
            dead: DEFAULT_DEAD_GLYPH,
        }
    }
}

#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawGlyphs {
    alive: char,
    dead: char,
}

impl TryFrom<RawGlyphs> for Glyphs {
    type Error = GlyphError;

    fn try_from(raw: RawGlyphs) -> Result<Self, Self::Error> {
        Self::new(raw.alive, raw.dead)
    }
}

impl From<Glyphs> for RawGlyphs {
    fn from(glyphs: Glyphs) -> Self {
        Self {
            alive: glyphs.alive,
            dead: glyphs.dead,
        }
    }
}

/// Reasons a glyph pair is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GlyphError {
    /// Glyphs must be visible so every rendered line keeps its width.
    #[error("glyph {glyph:?} is not printable")]
    Unprintable {
        /// Offending glyph.
        glyph: char,
    },
    /// Live and dead cells would render identically.
    #[error("alive and dead glyphs are both {glyph:?}")]
    Indistinguishable {
        /// Glyph shared by both states.
        glyph: char,
    },
}

/// Named patterns that can be stamped into a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pattern {
    /// Five-cell spaceship travelling one cell down and right every four generations.
    Glider,
    /// Horizontal period-two oscillator of three cells.
    Blinker,
    /// Two-by-two still life.
    Block,
}

impl Pattern {
    /// Live cells of the pattern as `(row, column)` offsets from its anchor.
    #[must_use]
    pub const fn offsets(&self) -> &'static [(u32, u32)] {
        match self {
            Self::Glider => &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
            Self::Blinker => &[(0, 0), (0, 1), (0, 2)],
            Self::Block => &[(0, 0), (0, 1), (1, 0), (1, 1)],
        }
    }
}
