//! Moves and move outcomes.
//!
//! A move names only an address; the engine supplies the player. What comes
//! back is a [`MoveOutcome`] value: illegal input is an ordinary result, not
//! an error path.

use crate::{Address, GameResult, Owner, Player};
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// An accepted move: a player placing their mark at an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player who moved.
    pub player: Player,
    /// Where the mark was placed.
    pub address: Address,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.address)
    }
}

/// Why a move was refused.
///
/// Every variant is recoverable: the game is untouched and the caller can
/// simply ask for different input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RejectReason {
    /// The move targets a sub-board other than the active constraint.
    #[display("Move must be played in the active sub-board")]
    WrongSubBoard,

    /// The targeted sub-board is already won or drawn.
    #[display("Sub-board is already closed")]
    SubBoardClosed,

    /// The targeted square already holds a mark.
    #[display("Square is already occupied")]
    CellOccupied,

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for RejectReason {}

/// Result of [`GameState::apply_move`](crate::GameState::apply_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was written.
    Applied {
        /// New owner of the sub-board the move closed, if it closed one.
        sub_board_closed: Option<Owner>,
        /// Terminal result, if the move ended the game.
        game_result: Option<GameResult>,
    },
    /// The move was refused; nothing changed.
    Rejected(RejectReason),
}

impl MoveOutcome {
    /// Returns true if the move was written.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }

    /// Returns the rejection reason, if the move was refused.
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Applied { .. } => None,
        }
    }
}
