//! Moore-neighborhood counting on a toroidal grid.

use life_core::{Dimensions, NEIGHBORHOOD_SIZE};

use crate::Grid;

/// Offsets of the eight Moore neighbors expressed as `(row, column)` deltas.
const OFFSETS: [(i8, i8); NEIGHBORHOOD_SIZE as usize] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Counts the live neighbors of the cell at `(y, x)`.
///
/// Coordinates may lie outside the grid; they are wrapped onto the torus
/// before counting, so row 0 neighbors row `height - 1` and column 0
/// neighbors column `width - 1`. Only the current generation is read. The
/// result is always within `0..=8`.
#[must_use]
pub fn count_alive_neighbors(grid: &Grid, y: i64, x: i64) -> u8 {
    let cell = grid.dimensions().wrap(y, x);
    count_in(
        grid.dimensions(),
        grid.current_buffer(),
        cell.row() as usize,
        cell.column() as usize,
    )
}

/// Counts live neighbors of an already-wrapped cell inside a row-major buffer.
///
/// On grids narrower or shorter than three cells several offsets resolve to
/// the same cell. Each offset is counted on its own, except offsets that
/// resolve back onto the queried cell, which never count.
pub(crate) fn count_in(dimensions: Dimensions, cells: &[bool], row: usize, column: usize) -> u8 {
    let width = dimensions.width() as usize;
    let height = dimensions.height() as usize;

    let mut alive = 0;
    for (row_delta, column_delta) in OFFSETS {
        let neighbor_row = shift(row, row_delta, height);
        let neighbor_column = shift(column, column_delta, width);
        if neighbor_row == row && neighbor_column == column {
            continue;
        }
        if cells[neighbor_row * width + neighbor_column] {
            alive += 1;
        }
    }
    alive
}

fn shift(index: usize, delta: i8, len: usize) -> usize {
    match delta {
        -1 => (index + len - 1) % len,
        1 => (index + 1) % len,
        _ => index,
    }
}
