mod neighbors;
mod rule;
mod seed;

pub use self::seed::{SEED_CELLS, SEED_MIN_HEIGHT, SEED_MIN_WIDTH};
use crate::{Cell, Error, Grid, Result, Snapshot};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Owns the grid and generation counter of a bounded Game of Life
///
/// Every mutation goes through [`toggle`], [`advance`] or [`reset`]; readers
/// get an owned [`Snapshot`].
///
/// [`toggle`]: GridEngine::toggle
/// [`advance`]: GridEngine::advance
/// [`reset`]: GridEngine::reset
#[derive(Debug, Clone)]
pub struct GridEngine {
    current: Grid,
    // back buffer, only meaningful while an advance is being computed
    next: Grid,
    generation: u64,
}

impl GridEngine {
    /// Creates a `width` x `height` engine holding the seed pattern at generation 0
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let mut engine = Self {
            current: Grid::dead(width, height),
            next: Grid::dead(width, height),
            generation: 0,
        };
        engine.reset();
        debug!(width, height, "grid engine created");
        Ok(engine)
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.current.width()
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.current.height()
    }
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
    #[inline]
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        self.current.get(x, y)
    }
    pub fn alive_count(&self) -> usize {
        self.current.alive_count()
    }

    /// Flips the cell at `(x, y)` and returns its new state
    ///
    /// Fails with [`Error::OutOfBounds`] without touching the grid if the
    /// coordinates are outside of it. The generation counter never changes.
    pub fn toggle(&mut self, x: i32, y: i32) -> Result<Cell> {
        if !self.current.contains(x, y) {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }

        let cell = self.current.get(x, y).toggled();
        self.current.set(x, y, cell);
        trace!(x, y, ?cell, "toggled cell");
        Ok(cell)
    }

    /// Computes and commits the next generation
    pub fn advance(&mut self) {
        let width = self.current.width() as usize;
        let mut counts = vec![0; width];
        for (y, row) in self.next.cells_mut().chunks_mut(width).enumerate() {
            next_row(&self.current, y as i32, &mut counts, row);
        }
        self.commit();
    }

    /// Same as [`advance`](GridEngine::advance), with horizontal bands of
    /// rows computed on the rayon thread pool
    pub fn advance_parallel(&mut self) {
        let width = self.current.width() as usize;
        let height = self.current.height() as usize;
        let band_rows = height.div_ceil(rayon::current_num_threads().max(1));

        let current = &self.current;
        self.next
            .cells_mut()
            .par_chunks_mut(band_rows * width)
            .enumerate()
            .for_each(|(band, cells)| {
                let mut counts = vec![0; width];
                for (i, row) in cells.chunks_mut(width).enumerate() {
                    let y = band * band_rows + i;
                    next_row(current, y as i32, &mut counts, row);
                }
            });
        self.commit();
    }

    /// Clears the grid, plants the seed again and sets the generation back to 0
    pub fn reset(&mut self) {
        self.current.clear();
        let planted = seed::plant(&mut self.current);
        self.generation = 0;
        debug!(planted, "grid reset");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.current.clone(), self.generation)
    }

    fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.generation += 1;
        debug!(
            generation = self.generation,
            alive = self.current.alive_count(),
            "advanced generation"
        );
    }
}

/// Writes the next state of row `y` of `current` into `out`
///
/// `counts` is scratch space of the grid's width.
fn next_row(current: &Grid, y: i32, counts: &mut [u8], out: &mut [Cell]) {
    neighbors::row_counts(current, y, counts);
    let row = current.row(y).unwrap_or(&[]);
    for ((next, &cell), &n) in out.iter_mut().zip(row).zip(counts.iter()) {
        *next = rule::next_state(cell, n);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Pos2;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    /// An engine with only `alive` set, the seed cleared away
    fn engine_with(width: i32, height: i32, alive: &[Pos2]) -> GridEngine {
        let mut engine = GridEngine::new(width, height).expect("valid dimensions");
        let seeded: Vec<Pos2> = engine.snapshot().alive().collect();
        for p in seeded.iter().chain(alive) {
            engine.toggle(p.x, p.y).expect("in bounds");
        }
        engine
    }

    fn random_engine(width: i32, height: i32, seed: u64) -> GridEngine {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut engine = GridEngine::new(width, height).expect("valid dimensions");
        for y in 0..height {
            for x in 0..width {
                if rng.random_bool(0.35) {
                    engine.toggle(x, y).expect("in bounds");
                }
            }
        }
        engine
    }

    fn alive(engine: &GridEngine) -> Vec<Pos2> {
        engine.snapshot().alive().collect()
    }

    #[test]
    fn rejects_non_positive_dimensions() {
        assert!(matches!(
            GridEngine::new(0, 5),
            Err(Error::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(
            GridEngine::new(5, -1),
            Err(Error::InvalidDimensions { width: 5, height: -1 })
        ));
        assert!(GridEngine::new(1, 1).is_ok());
    }

    #[test]
    fn construction_plants_seed() {
        let engine = GridEngine::new(16, 16).unwrap();

        assert_eq!(engine.generation(), 0);
        assert_eq!(alive(&engine), SEED_CELLS.to_vec());
    }

    #[test]
    fn small_grid_truncates_seed() {
        let engine = GridEngine::new(6, 6).unwrap();

        assert_eq!(alive(&engine), vec![pos(5, 5)]);
    }

    #[test]
    fn single_cell_grid_stays_dead() {
        let mut engine = GridEngine::new(1, 1).unwrap();
        engine.toggle(0, 0).unwrap();
        engine.advance();

        assert_eq!(engine.cell(0, 0), Cell::Dead);
        assert_eq!(engine.generation(), 1);
    }

    #[test]
    fn isolated_corner_cell_dies() {
        let mut engine = engine_with(8, 8, &[pos(0, 0)]);
        engine.advance();

        assert!(alive(&engine).is_empty());
    }

    #[test]
    fn three_neighbors_give_birth() {
        let mut engine = engine_with(3, 3, &[pos(0, 0), pos(2, 0), pos(0, 2)]);
        assert_eq!(engine.cell(1, 1), Cell::Dead);
        engine.advance();

        assert_eq!(engine.cell(1, 1), Cell::Alive);
    }

    #[test]
    fn block_is_still_life() {
        let block = [pos(2, 2), pos(3, 2), pos(2, 3), pos(3, 3)];
        let mut engine = engine_with(6, 6, &block);

        for _ in 0..10 {
            engine.advance();
            assert_eq!(alive(&engine), block.to_vec());
        }
    }

    #[test]
    fn seed_oscillates_as_blinker() {
        let mut engine = GridEngine::new(16, 16).unwrap();

        engine.advance();
        assert_eq!(alive(&engine), vec![pos(6, 4), pos(6, 5), pos(6, 6)]);

        engine.advance();
        assert_eq!(alive(&engine), SEED_CELLS.to_vec());
        assert_eq!(engine.generation(), 2);
    }

    #[test]
    fn toggle_twice_restores_cell() {
        let mut engine = random_engine(10, 7, 3);
        let before = engine.snapshot();

        assert_eq!(engine.toggle(4, 6).unwrap(), before.get(4, 6).toggled());
        engine.toggle(4, 6).unwrap();

        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn toggle_out_of_bounds_leaves_grid_unchanged() {
        let mut engine = GridEngine::new(16, 16).unwrap();
        let before = engine.snapshot();

        for (x, y) in [(-1, 0), (16, 3), (0, 16), (3, -7)] {
            let err = engine.toggle(x, y).unwrap_err();
            assert!(matches!(
                err,
                Error::OutOfBounds { width: 16, height: 16, .. }
            ));
        }
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn generation_counts_advances_until_reset() {
        let mut engine = GridEngine::new(12, 12).unwrap();
        for _ in 0..5 {
            engine.advance();
        }
        engine.toggle(0, 0).unwrap();
        assert_eq!(engine.generation(), 5);

        engine.reset();
        assert_eq!(engine.generation(), 0);
        assert_eq!(alive(&engine), SEED_CELLS.to_vec());
    }

    #[test]
    fn advance_is_deterministic() {
        let mut a = random_engine(20, 20, 11);
        let mut b = a.clone();

        for _ in 0..4 {
            a.advance();
            b.advance();
            assert_eq!(a.snapshot(), b.snapshot());
        }
    }

    #[test]
    fn parallel_matches_serial() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(4)
            .build()
            .unwrap();

        for (width, height, seed) in [(37, 23, 1), (5, 3, 2), (1, 9, 3), (64, 64, 4)] {
            let mut serial = random_engine(width, height, seed);
            let mut parallel = serial.clone();

            for _ in 0..6 {
                serial.advance();
                pool.install(|| parallel.advance_parallel());
                assert_eq!(serial.snapshot(), parallel.snapshot(), "{width}x{height}");
            }
        }
    }
}
