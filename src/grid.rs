use crate::Pos2;

/// The state of a single grid position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}
impl Cell {
    #[inline]
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}
impl From<bool> for Cell {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// A fixed-size, row-major grid of cells
///
/// Anything outside `[0, width) x [0, height)` reads as [`Cell::Dead`], there
/// is no wraparound at the edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-dead grid. Dimensions are validated by the engine.
    pub(crate) fn dead(width: i32, height: i32) -> Self {
        debug_assert!(width > 0 && height > 0, "non-positive grid dimensions");
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (0..self.width).contains(&x) && (0..self.height).contains(&y)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.contains(x, y)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.index(x, y)
            .map_or(Cell::Dead, |i| self.cells[i])
    }

    /// Sets an in-bounds cell, returning `false` if `(x, y)` is outside the grid
    pub(crate) fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// The cells of row `y`, or [`None`] if the row is outside the grid
    #[inline]
    pub fn row(&self, y: i32) -> Option<&[Cell]> {
        if !(0..self.height).contains(&y) {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
    #[inline]
    pub(crate) fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Positions of every alive cell, in row-major order
    pub fn alive(&self) -> impl Iterator<Item = Pos2> + '_ {
        let width = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| Pos2::new((i % width) as i32, (i / width) as i32))
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}
