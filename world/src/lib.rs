#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative grid state for the toroidal life engine.
//!
//! The [`Grid`] owns a dense, fixed-size torus of cells stored as two
//! row-major buffers. Each generation is computed into the staging buffer
//! from the current buffer alone and then swapped in, so the rule for every
//! cell sees one consistent snapshot.

mod generation;
mod neighbors;

use life_core::{CellCoord, Command, DimensionError, Dimensions, Event, Pattern};

pub use generation::{next_state, Transition};
pub use neighbors::count_alive_neighbors;

/// Read-only view of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    coord: CellCoord,
    alive: bool,
}

impl Cell {
    /// Position of the cell inside its grid.
    #[must_use]
    pub const fn coord(&self) -> CellCoord {
        self.coord
    }

    /// Column index (x) of the cell.
    #[must_use]
    pub const fn x(&self) -> u32 {
        self.coord.column()
    }

    /// Row index (y) of the cell.
    #[must_use]
    pub const fn y(&self) -> u32 {
        self.coord.row()
    }

    /// Whether the cell is alive in the current generation.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.alive
    }
}

/// Dense toroidal grid of cells, double-buffered across generations.
#[derive(Clone, Debug)]
pub struct Grid {
    dimensions: Dimensions,
    current: Vec<bool>,
    next: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Creates a grid of dead cells.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] when `width` or `height` is zero, or when
    /// the cell count cannot be addressed.
    pub fn new(width: u32, height: u32) -> Result<Self, DimensionError> {
        Ok(Self::with_dimensions(Dimensions::new(width, height)?))
    }

    /// Creates a grid of dead cells from pre-validated dimensions.
    #[must_use]
    pub fn with_dimensions(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            current: vec![false; dimensions.cell_count()],
            next: vec![false; dimensions.cell_count()],
            generation: 0,
        }
    }

    /// Size of the grid.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.dimensions.width()
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.dimensions.height()
    }

    /// Generations committed since construction or the last clear.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation.
    #[must_use]
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Whether the cell at `(y, x)` is alive. Coordinates wrap.
    #[must_use]
    pub fn is_alive(&self, y: i64, x: i64) -> bool {
        self.current[self.index(self.dimensions.wrap(y, x))]
    }

    /// Read-only view of the cell at `(y, x)`. Coordinates wrap.
    #[must_use]
    pub fn cell(&self, y: i64, x: i64) -> Cell {
        let coord = self.dimensions.wrap(y, x);
        Cell {
            coord,
            alive: self.current[self.index(coord)],
        }
    }

    /// Iterates over every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let width = self.width() as usize;
        self.current.iter().enumerate().map(move |(index, &alive)| Cell {
            coord: CellCoord::new((index / width) as u32, (index % width) as u32),
            alive,
        })
    }

    /// Forces the cell at `(y, x)` into the provided state. Coordinates wrap.
    ///
    /// Seeding bypasses the life rule and is meant to be used between
    /// generations, typically before the first one.
    pub fn set_alive(&mut self, y: i64, x: i64, alive: bool) {
        let _ = self.set_cell(self.dimensions.wrap(y, x), alive);
    }

    /// Stamps `pattern` with its bounding box anchored at `(y, x)`.
    ///
    /// Cells outside the pattern are left untouched; pattern cells wrap.
    pub fn place_pattern(&mut self, pattern: Pattern, y: i64, x: i64) {
        for &(row, column) in pattern.offsets() {
            self.set_alive(y + i64::from(row), x + i64::from(column), true);
        }
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.current.fill(false);
        self.next.fill(false);
        self.generation = 0;
    }

    /// Advances the grid by one generation.
    ///
    /// The rule is first staged for every cell against the current
    /// generation and only then committed, so no cell observes a neighbor
    /// that was already updated in the same generation.
    pub fn advance(&mut self) -> Transition {
        generation::stage(self.dimensions, &self.current, &mut self.next);
        let transition = generation::commit(&mut self.current, &mut self.next);
        self.generation = self.generation.saturating_add(1);
        transition
    }

    pub(crate) fn current_buffer(&self) -> &[bool] {
        &self.current
    }

    fn index(&self, coord: CellCoord) -> usize {
        coord.row() as usize * self.width() as usize + coord.column() as usize
    }

    fn set_cell(&mut self, coord: CellCoord, alive: bool) -> bool {
        let index = self.index(coord);
        let changed = self.current[index] != alive;
        self.current[index] = alive;
        changed
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
            && self.generation == other.generation
            && self.current == other.current
    }
}

impl Eq for Grid {}

/// Applies the provided command to the grid, mutating state deterministically.
pub fn apply(grid: &mut Grid, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::SetCell { cell, alive } => {
            let cell = wrap_coord(grid, cell);
            if grid.set_cell(cell, alive) {
                out_events.push(Event::CellChanged { cell, alive });
            }
        }
        Command::PlacePattern { pattern, anchor } => {
            let anchor = wrap_coord(grid, anchor);
            for &(row, column) in pattern.offsets() {
                let cell = grid.dimensions.wrap(
                    i64::from(anchor.row()) + i64::from(row),
                    i64::from(anchor.column()) + i64::from(column),
                );
                if grid.set_cell(cell, true) {
                    out_events.push(Event::CellChanged { cell, alive: true });
                }
            }
            out_events.push(Event::PatternPlaced { pattern, anchor });
        }
        Command::Clear => {
            grid.clear();
            out_events.push(Event::Cleared);
        }
        Command::Advance => {
            let Transition { births, deaths } = grid.advance();
            out_events.push(Event::GenerationAdvanced {
                generation: grid.generation(),
                population: grid.population(),
                births,
                deaths,
            });
        }
    }
}

fn wrap_coord(grid: &Grid, cell: CellCoord) -> CellCoord {
    grid.dimensions
        .wrap(i64::from(cell.row()), i64::from(cell.column()))
}

/// Query functions that provide read-only access to the grid state.
pub mod query {
    use life_core::Glyphs;

    use super::Grid;

    /// Serializes the current generation using the default glyphs.
    ///
    /// See [`render_with`].
    #[must_use]
    pub fn render(grid: &Grid) -> String {
        render_with(grid, Glyphs::default())
    }

    /// Serializes the current generation as `height` lines of `width` glyphs.
    ///
    /// Rows appear top to bottom and columns left to right; every line,
    /// including the last, ends with `\n`. The grid is not mutated, so two
    /// calls without an intervening advance return identical text.
    #[must_use]
    pub fn render_with(grid: &Grid, glyphs: Glyphs) -> String {
        let width = grid.width() as usize;
        let mut output = String::with_capacity((width + 1) * grid.height() as usize);
        for row in grid.current.chunks(width) {
            output.extend(row.iter().map(|&alive| glyphs.for_state(alive)));
            output.push('\n');
        }
        output
    }

    /// Coordinates of every live cell in row-major order.
    #[must_use]
    pub fn live_cells(grid: &Grid) -> Vec<(u32, u32)> {
        grid.cells()
            .filter(|cell| cell.is_alive())
            .map(|cell| (cell.y(), cell.x()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_dead() {
        let grid = Grid::new(6, 4).expect("valid grid");

        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
        assert_eq!(grid.cells().count(), 24);
        assert!(grid.cells().all(|cell| !cell.is_alive()));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(Grid::new(0, 4), Err(DimensionError::ZeroWidth));
        assert_eq!(Grid::new(4, 0), Err(DimensionError::ZeroHeight));
    }

    #[test]
    fn set_alive_wraps_coordinates() {
        let mut grid = Grid::new(5, 4).expect("valid grid");
        grid.set_alive(-1, 5, true);

        assert!(grid.is_alive(3, 0));
        assert_eq!(grid.cell(3, 0).coord(), CellCoord::new(3, 0));
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn cells_iterate_in_row_major_order() {
        let grid = Grid::new(3, 2).expect("valid grid");
        let coords: Vec<(u32, u32)> = grid.cells().map(|cell| (cell.y(), cell.x())).collect();

        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn apply_set_cell_reports_only_changes() {
        let mut grid = Grid::new(4, 4).expect("valid grid");
        let mut events = Vec::new();
        let cell = CellCoord::new(1, 2);

        apply(&mut grid, Command::SetCell { cell, alive: true }, &mut events);
        apply(&mut grid, Command::SetCell { cell, alive: true }, &mut events);

        assert_eq!(events, vec![Event::CellChanged { cell, alive: true }]);
    }

    #[test]
    fn apply_advance_reports_generation_summary() {
        let mut grid = Grid::new(5, 5).expect("valid grid");
        let mut events = Vec::new();
        grid.place_pattern(Pattern::Blinker, 2, 1);

        apply(&mut grid, Command::Advance, &mut events);

        assert_eq!(
            events,
            vec![Event::GenerationAdvanced {
                generation: 1,
                population: 3,
                births: 2,
                deaths: 2,
            }]
        );
    }

    #[test]
    fn apply_clear_resets_generation() {
        let mut grid = Grid::new(4, 4).expect("valid grid");
        let mut events = Vec::new();
        grid.place_pattern(Pattern::Block, 1, 1);
        let _ = grid.advance();

        apply(&mut grid, Command::Clear, &mut events);

        assert_eq!(events, vec![Event::Cleared]);
        assert_eq!(grid.population(), 0);
        assert_eq!(grid.generation(), 0);
    }

    #[test]
    fn render_uses_one_line_per_row() {
        let mut grid = Grid::new(3, 2).expect("valid grid");
        grid.set_alive(0, 1, true);
        grid.set_alive(1, 2, true);

        assert_eq!(query::render(&grid), ".W.\n..W\n");
    }
}
