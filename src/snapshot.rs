use crate::{Cell, Grid, Pos2};
use std::fmt;

/// An owned, read-only copy of the grid at one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    grid: Grid,
    generation: u64,
}
impl Snapshot {
    pub(crate) fn new(grid: Grid, generation: u64) -> Self {
        Self { grid, generation }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.grid.width()
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.grid.height()
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.grid.get(x, y)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        self.grid.alive()
    }

    pub fn alive_count(&self) -> usize {
        self.grid.alive_count()
    }

    /// Cells whose state differs from `previous`, with their new state
    ///
    /// Returns [`None`] when the dimensions differ, in which case nothing
    /// short of a full redraw is meaningful.
    pub fn diff(&self, previous: &Snapshot) -> Option<Vec<(Pos2, Cell)>> {
        if self.width() != previous.width() || self.height() != previous.height() {
            return None;
        }

        let width = self.width() as usize;
        let changed = self
            .grid
            .cells()
            .iter()
            .zip(previous.grid.cells())
            .enumerate()
            .filter(|(_, (now, before))| now != before)
            .map(|(i, (&now, _))| (Pos2::new((i % width) as i32, (i / width) as i32), now))
            .collect();
        Some(changed)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_str(if cell.is_alive() { "█" } else { "·" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
