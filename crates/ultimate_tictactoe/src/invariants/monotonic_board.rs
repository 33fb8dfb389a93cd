//! Monotonic board invariant: squares never change once set.

use super::Invariant;
use crate::{GameState, OuterBoard};

/// Invariant: Board squares are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board must write every square
/// exactly once and reproduce the current squares.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut reconstructed = OuterBoard::new();

        for mov in game.history() {
            if !reconstructed.mark_square(mov.address, mov.player) {
                return false;
            }
        }

        reconstructed
            .sub_boards()
            .iter()
            .zip(game.board().sub_boards())
            .all(|(rebuilt, actual)| rebuilt.squares() == actual.squares())
    }

    fn description() -> &'static str {
        "Board squares are monotonic (never overwritten)"
    }
}
