//! Random placement on free cells

use std::collections::HashSet;

use rand::Rng;

use super::grid::Grid;
use crate::Cell;

/// Set of cells covered by the snake or any entity
pub type Occupied = HashSet<Cell>;

/// Draw uniformly random cells until one is not in `occupied`.
///
/// `occupied` must leave at least one cell of `grid` free, otherwise this
/// never returns. Debug builds assert the precondition.
pub fn pick<R: Rng + ?Sized>(occupied: &Occupied, grid: Grid, rng: &mut R) -> Cell {
    debug_assert!(
        (occupied.iter().filter(|c| grid.contains(**c)).count() as u64) < grid.cell_count(),
        "no free cell left on a {}x{} board",
        grid.width,
        grid.height
    );

    loop {
        let cell = Cell::new(
            rng.random_range(0..grid.width) as i32,
            rng.random_range(0..grid.height) as i32,
        );
        if !occupied.contains(&cell) {
            return cell;
        }
    }
}
