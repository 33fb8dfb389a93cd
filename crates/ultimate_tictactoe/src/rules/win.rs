//! Line detection for a 3x3 grid.

use crate::{Cell, Player, Position};
use tracing::{instrument, warn};

/// Every line on a 3x3 grid, scanned rows first, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Yields the owning player of every complete line, in scan order.
pub fn completed_lines<C: Cell>(cells: &[C; 9]) -> impl Iterator<Item = Player> + '_ {
    LINES.into_iter().filter_map(move |[a, b, c]| {
        let mark = cells[a.to_index()].mark()?;
        (cells[b.to_index()].mark() == Some(mark) && cells[c.to_index()].mark() == Some(mark))
            .then_some(mark)
    })
}

/// Returns the player holding a complete line, if any.
///
/// Under sequential play only one player can ever complete a line in a
/// grid. Lines for both players mean the grid was written outside the
/// rules; debug builds assert on it, release builds keep the last line
/// found in scan order.
#[instrument(skip(cells))]
pub fn line_winner<C: Cell>(cells: &[C; 9]) -> Option<Player> {
    let mut winner = None;
    for mark in completed_lines(cells) {
        if let Some(previous) = winner
            && previous != mark
        {
            warn!(?previous, ?mark, "Both players complete a line in one grid");
            debug_assert!(false, "Invariant violation: lines completed by both players");
        }
        winner = Some(mark);
    }
    winner
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    fn grid(marks: &str) -> [Square; 9] {
        let mut squares = [Square::Empty; 9];
        for (slot, ch) in squares.iter_mut().zip(marks.chars()) {
            *slot = match ch {
                'X' => Square::Occupied(Player::X),
                'O' => Square::Occupied(Player::O),
                _ => Square::Empty,
            };
        }
        squares
    }

    #[test]
    fn test_no_winner_empty_grid() {
        assert_eq!(line_winner(&grid(".........")), None);
    }

    #[test]
    fn test_winner_top_row() {
        assert_eq!(line_winner(&grid("XXX......")), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        assert_eq!(line_winner(&grid(".O..O..O.")), Some(Player::O));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        assert_eq!(line_winner(&grid("..O.O.O..")), Some(Player::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        assert_eq!(line_winner(&grid("XX.OO....")), None);
    }

    #[test]
    fn test_full_grid_without_line() {
        assert_eq!(line_winner(&grid("XOXXOOOXX")), None);
    }

    #[test]
    fn test_same_player_multiple_lines() {
        // Row and diagonal both X.
        let squares = grid("XXXOXO..X");
        assert_eq!(completed_lines(&squares).count(), 2);
        assert_eq!(line_winner(&squares), Some(Player::X));
    }

    #[test]
    #[should_panic(expected = "Invariant violation")]
    fn test_lines_for_both_players_panic() {
        line_winner(&grid("XXXOOO..."));
    }
}
