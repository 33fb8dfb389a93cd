//! Overall game result.

use crate::Player;
use serde::{Deserialize, Serialize};

/// Current result of a game.
///
/// `Won` and `Drawn` are terminal: once reached, no further move is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GameResult {
    /// Game is ongoing.
    #[default]
    InProgress,
    /// A player completed an outer line.
    Won(Player),
    /// Every sub-board closed without an outer line.
    Drawn,
}

impl GameResult {
    /// Returns true if the game has terminated.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameResult::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::Won(player) => Some(*player),
            GameResult::InProgress | GameResult::Drawn => None,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::InProgress => write!(f, "In progress"),
            GameResult::Won(player) => write!(f, "Player {} wins", player),
            GameResult::Drawn => write!(f, "Draw"),
        }
    }
}
