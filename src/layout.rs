use crate::Pos2;

/// Uniform mapping between display-area points and grid cells
///
/// Every cell occupies a `cell_width` x `cell_height` region, laid out
/// row-major from `origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellLayout {
    origin: Pos2,
    cell_width: i32,
    cell_height: i32,
    columns: i32,
    rows: i32,
}
impl CellLayout {
    /// Cell sizes below 1 are clamped to 1
    pub fn new(origin: Pos2, cell_width: i32, cell_height: i32, columns: i32, rows: i32) -> Self {
        Self {
            origin,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            columns,
            rows,
        }
    }

    /// The cell whose region contains `point`, if any
    pub fn cell_at(&self, point: Pos2) -> Option<Pos2> {
        let offset = point - self.origin;
        if offset.x < 0 || offset.y < 0 {
            return None;
        }
        let cell = Pos2::new(offset.x / self.cell_width, offset.y / self.cell_height);
        (cell.x < self.columns && cell.y < self.rows).then_some(cell)
    }

    /// Top-left point of the region drawn for `cell`
    pub fn cell_origin(&self, cell: Pos2) -> Pos2 {
        self.origin + Pos2::new(cell.x * self.cell_width, cell.y * self.cell_height)
    }

    /// The point just below the last row of cells
    pub fn below(&self) -> Pos2 {
        self.origin + Pos2::new(0, self.rows * self.cell_height)
    }
}
