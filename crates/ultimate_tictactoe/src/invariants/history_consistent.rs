//! History consistency invariant: history length matches occupied squares.

use super::Invariant;
use crate::{GameState, Square};

/// Invariant: History length equals number of occupied squares.
///
/// Every move in history corresponds to exactly one occupied square.
/// No moves are missing, no squares are filled without a move.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let occupied_count = game
            .board()
            .sub_boards()
            .iter()
            .flat_map(|board| board.squares())
            .filter(|s| **s != Square::Empty)
            .count();

        game.history().len() == occupied_count
    }

    fn description() -> &'static str {
        "History length matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Address, Player, Position};

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_single_move_holds() {
        let mut game = GameState::new();
        game.apply_move(Address::new(Position::TopRight, Position::BottomLeft));
        assert!(HistoryConsistentInvariant::holds(&game));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_unrecorded_square_violates() {
        let mut game = GameState::new();
        game.board
            .mark_square(Address::new(Position::Center, Position::Center), Player::X);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}
