//! Exhaustion checks for a 3x3 grid.

use crate::Cell;
use tracing::instrument;

/// Checks if every cell in the grid is settled.
///
/// For squares this means every square holds a mark; for sub-boards it
/// means every sub-board is won or drawn.
#[instrument(skip(cells))]
pub fn is_full<C: Cell>(cells: &[C; 9]) -> bool {
    cells.iter().all(Cell::is_settled)
}
