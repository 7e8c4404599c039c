use crate::Cell;
use std::sync::OnceLock;

/// Neighbor counts range over `0..=8` in a Moore neighborhood
const NEIGHBOR_COUNTS: usize = 9;
type RuleIndex = [[Cell; NEIGHBOR_COUNTS]; 2];

/// Returns a Singleton lookup table for the Game of Life ruleset
///
/// Equivalent to calling [`generate_rule_index`] once and storing the result
fn get_rule_index() -> &'static RuleIndex {
    static CELL: OnceLock<RuleIndex> = OnceLock::new();
    CELL.get_or_init(generate_rule_index)
}

/// Creates a lookup table for the B3/S23 ruleset
///
/// The outer index is the current state of the cell (`0` dead, `1` alive),
/// the inner index is its number of alive neighbors.
fn generate_rule_index() -> RuleIndex {
    let mut index = [[Cell::Dead; NEIGHBOR_COUNTS]; 2];
    for (alive, row) in index.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = match (alive == 1, neighbors) {
                (true, 2) | (_, 3) => Cell::Alive,
                _ => Cell::Dead,
            };
        }
    }
    index
}

/// The next state of a cell given its current state and alive neighbor count
#[inline]
pub(super) fn next_state(cell: Cell, neighbors: u8) -> Cell {
    debug_assert!((neighbors as usize) < NEIGHBOR_COUNTS, "too many neighbors");
    get_rule_index()[usize::from(cell.is_alive())][neighbors as usize]
}
