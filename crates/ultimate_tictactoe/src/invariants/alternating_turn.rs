//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... and, while the game is running,
/// the player to move is the one after the last move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let mut expected = Player::X;
        for mov in game.history() {
            if mov.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        game.result().is_over() || game.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
