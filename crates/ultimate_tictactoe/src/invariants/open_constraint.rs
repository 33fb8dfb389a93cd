//! Open constraint invariant: the active constraint never names a closed sub-board.

use super::Invariant;
use crate::GameState;

/// Invariant: The active constraint is absent or addresses a playable sub-board.
///
/// After a finished game the constraint is always absent.
pub struct OpenConstraintInvariant;

impl Invariant<GameState> for OpenConstraintInvariant {
    fn holds(game: &GameState) -> bool {
        match game.active_constraint() {
            None => true,
            Some(pos) => !game.result().is_over() && game.board().is_sub_board_playable(pos),
        }
    }

    fn description() -> &'static str {
        "Active constraint addresses an open sub-board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(OpenConstraintInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_constraint_after_move_holds() {
        let mut game = GameState::new();
        game.apply_move(Address::new(Position::Center, Position::TopLeft));
        assert_eq!(game.active_constraint(), Some(Position::TopLeft));
        assert!(OpenConstraintInvariant::holds(&game));
    }

    #[test]
    fn test_constraint_on_closed_board_violates() {
        // X wins sub-board 0 via its top row.
        let mut game = GameState::new();
        for (outer, inner) in [(0, 1), (1, 0), (0, 2), (2, 0), (0, 0)] {
            game.apply_move(Address::new(
                Position::from_index(outer).unwrap(),
                Position::from_index(inner).unwrap(),
            ));
        }
        game.constraint = Some(Position::TopLeft);
        assert!(!OpenConstraintInvariant::holds(&game));
    }
}
