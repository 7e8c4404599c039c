//! Moore-neighborhood counting with a zero-filled boundary.
//!
//! Counts are a separable 3x3 box sum: every row in `y-1..=y+1` contributes a
//! sliding horizontal 3-sum, and the center cell is subtracted at the end.
//! Rows and columns outside the grid contribute nothing.

use crate::{Cell, Grid};

#[inline]
fn alive_at(row: &[Cell], x: usize) -> u8 {
    row.get(x).map_or(0, |cell| u8::from(cell.is_alive()))
}

/// Adds the horizontal 3-sum of `row` around each column into `out`
fn add_row_sums(row: &[Cell], out: &mut [u8]) {
    debug_assert_eq!(row.len(), out.len());

    // window holds the alive count of columns x-1..=x+1
    let mut window = alive_at(row, 0) + alive_at(row, 1);
    for (x, count) in out.iter_mut().enumerate() {
        *count += window;
        if x >= 1 {
            window -= alive_at(row, x - 1);
        }
        window += alive_at(row, x + 2);
    }
}

/// Writes the alive neighbor count of every cell in row `y` into `out`
///
/// Only reads `grid`, so the counts always describe the generation `grid`
/// holds, regardless of what the caller is writing elsewhere.
pub(super) fn row_counts(grid: &Grid, y: i32, out: &mut [u8]) {
    out.fill(0);
    for row in (y - 1..=y + 1).filter_map(|ry| grid.row(ry)) {
        add_row_sums(row, out);
    }
    if let Some(center) = grid.row(y) {
        for (count, cell) in out.iter_mut().zip(center) {
            *count -= u8::from(cell.is_alive());
        }
    }
}
