//! Settled owners invariant: ownership agrees with the marks underneath it.

use super::Invariant;
use crate::rules::completed_lines;
use crate::{GameResult, GameState, Owner};

/// Invariant: Every owner and the game result follow from the squares.
///
/// - A won sub-board has a line for its owner and none for the opponent
/// - A drawn sub-board is full with no line
/// - An open sub-board has no line and an empty square
/// - The outer winner and game result match the outer line pattern
pub struct SettledOwnersInvariant;

impl Invariant<GameState> for SettledOwnersInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();

        let sub_boards_settled = board.sub_boards().iter().all(|sub| {
            let mut lines = completed_lines(sub.squares());
            let first = lines.next();
            if let Some(mark) = first
                && lines.any(|other| other != mark)
            {
                return false;
            }
            match sub.owner() {
                Owner::Won(player) => first == Some(player),
                Owner::Drawn => first.is_none() && sub.is_full(),
                Owner::Open => first.is_none() && !sub.is_full(),
            }
        });

        let outer = board.outer_line_pattern();
        let result_settled = match game.result() {
            GameResult::Won(player) => outer == Some(player) && board.winner() == Some(player),
            GameResult::Drawn => outer.is_none() && board.winner().is_none() && board.is_full(),
            GameResult::InProgress => outer.is_none() && board.winner().is_none() && !board.is_full(),
        };

        sub_boards_settled && result_settled
    }

    fn description() -> &'static str {
        "Sub-board owners and game result match the board"
    }
}
