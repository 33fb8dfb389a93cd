//! Game rules for ultimate tic-tac-toe.
//!
//! Pure functions over a 3x3 grid of [`Cell`](crate::Cell)s. The same checks
//! run at both levels: over the squares of a sub-board, and over the
//! sub-boards of the outer board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, completed_lines, line_winner};
