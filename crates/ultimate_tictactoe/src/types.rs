//! Core domain types for ultimate tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    #[default]
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Single-character glyph used by text renderers.
    pub fn glyph(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// A leaf square inside a sub-board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// Owner of a sub-board.
///
/// A sub-board starts `Open` and is closed exactly once, either by a
/// completed line (`Won`) or by filling up without one (`Drawn`). A drawn
/// sub-board belongs to nobody and never completes an outer line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Owner {
    /// Still accepting moves.
    #[default]
    Open,
    /// Claimed by a player.
    Won(Player),
    /// Filled without a line.
    Drawn,
}

impl Owner {
    /// Returns true once the sub-board accepts no further moves.
    pub fn is_closed(self) -> bool {
        !matches!(self, Owner::Open)
    }

    /// Returns the claiming player, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            Owner::Won(player) => Some(player),
            Owner::Open | Owner::Drawn => None,
        }
    }
}

impl std::fmt::Display for Owner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Owner::Open => write!(f, "open"),
            Owner::Won(player) => write!(f, "won by {}", player),
            Owner::Drawn => write!(f, "drawn"),
        }
    }
}

/// Read-only capability shared by both levels of the board tree.
///
/// Leaf squares and sub-boards are distinct types; this trait lets line and
/// fullness checks run over either without caring which level they inspect.
pub trait Cell {
    /// The player this cell counts for when evaluating lines.
    fn mark(&self) -> Option<Player>;

    /// True once the cell can never change again.
    fn is_settled(&self) -> bool;

    /// True if a move could still land here.
    fn is_playable(&self) -> bool {
        !self.is_settled()
    }
}

impl Cell for Square {
    fn mark(&self) -> Option<Player> {
        self.player()
    }

    fn is_settled(&self) -> bool {
        *self != Square::Empty
    }
}
