use crate::{Cell, Grid, Pos2};
use tracing::debug;

/// The cells planted on construction and reset: a horizontal run of three,
/// which the first generation turns into a vertical blinker centered on
/// `(6, 5)`
pub const SEED_CELLS: [Pos2; 3] = [Pos2::new(5, 5), Pos2::new(6, 5), Pos2::new(7, 5)];

/// Smallest width holding every [`SEED_CELLS`] entry
pub const SEED_MIN_WIDTH: i32 = 8;
/// Smallest height holding every [`SEED_CELLS`] entry
pub const SEED_MIN_HEIGHT: i32 = 6;

/// Plants the seed into `grid`, dropping cells that fall outside of it
///
/// Returns the number of cells planted.
pub(super) fn plant(grid: &mut Grid) -> usize {
    let planted = SEED_CELLS
        .iter()
        .filter(|pos| grid.set(pos.x, pos.y, Cell::Alive))
        .count();
    if planted < SEED_CELLS.len() {
        debug!(
            width = grid.width(),
            height = grid.height(),
            planted,
            "seed truncated to grid bounds"
        );
    }
    planted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimum_size_holds_full_seed() {
        let mut grid = Grid::dead(SEED_MIN_WIDTH, SEED_MIN_HEIGHT);

        assert_eq!(plant(&mut grid), SEED_CELLS.len());
        assert_eq!(grid.alive().collect::<Vec<_>>(), SEED_CELLS.to_vec());
    }

    #[test]
    fn narrow_grid_truncates_seed() {
        let mut grid = Grid::dead(7, 8);

        assert_eq!(plant(&mut grid), 2);
        assert_eq!(
            grid.alive().collect::<Vec<_>>(),
            vec![Pos2::new(5, 5), Pos2::new(6, 5)]
        );
    }

    #[test]
    fn short_grid_drops_seed() {
        let mut grid = Grid::dead(16, 5);

        assert_eq!(plant(&mut grid), 0);
        assert_eq!(grid.alive_count(), 0);
    }
}
