//! The two-level board: an outer 3x3 grid of 3x3 sub-boards.
//!
//! The model answers ownership and playability questions and performs the
//! single-square write. It carries no turn logic; deciding who may move
//! where, and when a sub-board closes, belongs to [`GameState`](crate::GameState).

use crate::rules::{is_full, line_winner};
use crate::{Address, Cell, Owner, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// One of the nine inner 3x3 grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubBoard {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
    /// Set once, when a line or a full grid closes the sub-board.
    owner: Owner,
}

impl SubBoard {
    /// Creates an empty, open sub-board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Returns the owner.
    pub fn owner(&self) -> Owner {
        self.owner
    }

    /// True once won or drawn.
    pub fn is_closed(&self) -> bool {
        self.owner.is_closed()
    }

    /// True iff every square holds a mark.
    pub fn is_full(&self) -> bool {
        is_full(&self.squares)
    }

    /// The player holding a complete line of squares, if any.
    pub fn line_pattern(&self) -> Option<Player> {
        line_winner(&self.squares)
    }

    /// Writes a mark into an empty square; returns whether it was written.
    fn place(&mut self, pos: Position, player: Player) -> bool {
        let slot = &mut self.squares[pos.to_index()];
        if *slot != Square::Empty {
            return false;
        }
        *slot = Square::Occupied(player);
        true
    }
}

impl Cell for SubBoard {
    fn mark(&self) -> Option<Player> {
        self.owner.winner()
    }

    fn is_settled(&self) -> bool {
        self.is_closed()
    }

    fn is_playable(&self) -> bool {
        !self.is_closed() && self.squares.iter().any(|s| *s == Square::Empty)
    }
}

/// The outer 3x3 grid of sub-boards.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OuterBoard {
    /// Sub-boards in row-major order (0-8).
    boards: [SubBoard; 9],
    /// Set once, when sub-board owners complete an outer line.
    winner: Option<Player>,
}

impl OuterBoard {
    /// Creates an all-empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sub-board at the given outer position.
    pub fn sub_board(&self, pos: Position) -> &SubBoard {
        &self.boards[pos.to_index()]
    }

    /// Returns all sub-boards in row-major order.
    pub fn sub_boards(&self) -> &[SubBoard; 9] {
        &self.boards
    }

    /// Returns the square at a full address.
    pub fn square(&self, address: Address) -> Square {
        self.sub_board(address.outer).get(address.inner)
    }

    /// Returns the recorded outer winner.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Sets the square's mark iff it is empty; returns whether it was written.
    ///
    /// Performs no win detection and ignores sub-board ownership.
    #[instrument(skip(self))]
    pub fn mark_square(&mut self, address: Address, player: Player) -> bool {
        self.boards[address.outer.to_index()].place(address.inner, player)
    }

    /// True iff the sub-board is open and has at least one empty square.
    pub fn is_sub_board_playable(&self, pos: Position) -> bool {
        self.sub_board(pos).is_playable()
    }

    /// The player holding a complete line inside a sub-board, if any.
    pub fn sub_board_line_pattern(&self, pos: Position) -> Option<Player> {
        self.sub_board(pos).line_pattern()
    }

    /// The player whose won sub-boards complete an outer line, if any.
    ///
    /// Drawn sub-boards count for nobody.
    pub fn outer_line_pattern(&self) -> Option<Player> {
        line_winner(&self.boards)
    }

    /// True iff every square of the sub-board holds a mark.
    pub fn is_sub_board_full(&self, pos: Position) -> bool {
        self.sub_board(pos).is_full()
    }

    /// True iff every sub-board is won or drawn.
    pub fn is_full(&self) -> bool {
        is_full(&self.boards)
    }

    /// Closes a sub-board. Ownership is set at most once.
    pub(crate) fn close_sub_board(&mut self, pos: Position, owner: Owner) {
        let board = &mut self.boards[pos.to_index()];
        if board.owner.is_closed() {
            warn!(?pos, current = ?board.owner, requested = ?owner, "Sub-board already closed");
            debug_assert!(false, "Invariant violation: sub-board closed twice");
            return;
        }
        board.owner = owner;
    }

    /// Records the outer winner. Set at most once.
    pub(crate) fn set_winner(&mut self, player: Player) {
        debug_assert!(self.winner.is_none(), "Invariant violation: winner set twice");
        if self.winner.is_none() {
            self.winner = Some(player);
        }
    }

    /// Formats the board as a 9x9 grid, sub-boards separated by rules.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..9 {
            if row > 0 && row % 3 == 0 {
                result.push_str("------+-------+------\n");
            }
            for col in 0..9 {
                if col > 0 && col % 3 == 0 {
                    result.push_str("| ");
                }
                let symbol = match Address::from_global(row, col).map(|a| self.square(a)) {
                    Some(Square::Occupied(player)) => player.glyph(),
                    _ => '.',
                };
                result.push(symbol);
                if col < 8 {
                    result.push(' ');
                }
            }
            result.push('\n');
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(outer: usize, inner: usize) -> Address {
        Address::new(
            Position::from_index(outer).unwrap(),
            Position::from_index(inner).unwrap(),
        )
    }

    #[test]
    fn test_mark_square_only_once() {
        let mut board = OuterBoard::new();
        assert!(board.mark_square(addr(4, 0), Player::X));
        assert!(!board.mark_square(addr(4, 0), Player::O));
        assert_eq!(board.square(addr(4, 0)), Square::Occupied(Player::X));
    }

    #[test]
    fn test_exhausted_sub_board_not_playable() {
        let mut board = OuterBoard::new();
        // X O X / X O O / O X X: full, no line.
        let marks = [
            Player::X,
            Player::O,
            Player::X,
            Player::X,
            Player::O,
            Player::O,
            Player::O,
            Player::X,
            Player::X,
        ];
        for (inner, player) in marks.into_iter().enumerate() {
            assert!(board.mark_square(addr(2, inner), player));
        }
        assert!(board.is_sub_board_full(Position::TopRight));
        assert_eq!(board.sub_board_line_pattern(Position::TopRight), None);
        assert_eq!(board.sub_board(Position::TopRight).owner(), Owner::Open);
        assert!(!board.is_sub_board_playable(Position::TopRight));
    }

    #[test]
    fn test_closed_sub_board_not_playable() {
        let mut board = OuterBoard::new();
        board.mark_square(addr(0, 0), Player::O);
        board.close_sub_board(Position::TopLeft, Owner::Won(Player::O));
        assert!(!board.is_sub_board_playable(Position::TopLeft));
        assert!(board.is_sub_board_playable(Position::Center));
    }

    #[test]
    fn test_outer_line_ignores_drawn_boards() {
        let mut board = OuterBoard::new();
        board.close_sub_board(Position::TopLeft, Owner::Won(Player::X));
        board.close_sub_board(Position::TopCenter, Owner::Drawn);
        board.close_sub_board(Position::TopRight, Owner::Won(Player::X));
        assert_eq!(board.outer_line_pattern(), None);

        board.close_sub_board(Position::Center, Owner::Won(Player::X));
        board.close_sub_board(Position::BottomLeft, Owner::Won(Player::X));
        assert_eq!(board.outer_line_pattern(), Some(Player::X));
    }

    #[test]
    fn test_outer_full_requires_every_board_closed() {
        let mut board = OuterBoard::new();
        for pos in Position::ALL.into_iter().take(8) {
            board.close_sub_board(pos, Owner::Drawn);
        }
        assert!(!board.is_full());
        board.close_sub_board(Position::BottomRight, Owner::Won(Player::O));
        assert!(board.is_full());
    }

    #[test]
    fn test_display_layout() {
        let mut board = OuterBoard::new();
        board.mark_square(addr(0, 0), Player::X);
        board.mark_square(addr(8, 8), Player::O);
        let text = board.display();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[0], "X . . | . . . | . . .");
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[10], ". . . | . . . | . . O");
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn test_closing_sub_board_twice_panics() {
        let mut board = OuterBoard::new();
        board.close_sub_board(Position::Center, Owner::Drawn);
        board.close_sub_board(Position::Center, Owner::Won(Player::X));
    }
}
