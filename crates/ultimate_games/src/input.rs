//! Input mapping: turning raw user input into board addresses.

use crossterm::event::KeyCode;
use tracing::instrument;
use ultimate_tictactoe::Address;

/// Resolves typed text to an address.
///
/// Accepts `"r c r c"`, `"r,c,r,c"`, `"(r,c,r,c)"` and the compact `"rcrc"`.
#[instrument]
pub fn resolve_address(text: &str) -> Option<Address> {
    let text = text.trim();
    if let Ok(address) = text.parse::<Address>() {
        return Some(address);
    }

    let digits: Vec<usize> = text
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as usize))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        [or, oc, ir, ic] => Address::from_coords(*or, *oc, *ir, *ic),
        _ => None,
    }
}

/// Moves the cursor one square on the flattened 9x9 grid.
///
/// The cursor stops at the edges rather than wrapping.
pub fn move_cursor(cursor: Address, key: KeyCode) -> Address {
    let (row, col) = (cursor.global_row(), cursor.global_col());

    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(8), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(8)),
        _ => (row, col),
    };

    Address::from_global(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_tictactoe::Position;

    #[test]
    fn test_resolve_spaced_and_compact() {
        let expected = Address::from_coords(1, 1, 0, 0);
        assert_eq!(resolve_address("1 1 0 0"), expected);
        assert_eq!(resolve_address(" 1,1,0,0 "), expected);
        assert_eq!(resolve_address("1100"), expected);
    }

    #[test]
    fn test_resolve_rejects_garbage() {
        assert_eq!(resolve_address(""), None);
        assert_eq!(resolve_address("1103"), None);
        assert_eq!(resolve_address("110"), None);
        assert_eq!(resolve_address("center"), None);
    }

    #[test]
    fn test_cursor_crosses_sub_board_edge() {
        let cursor = Address::new(Position::TopLeft, Position::TopRight);
        let moved = move_cursor(cursor, KeyCode::Right);
        assert_eq!(moved, Address::new(Position::TopCenter, Position::TopLeft));
    }

    #[test]
    fn test_cursor_stops_at_grid_edge() {
        let corner = Address::new(Position::BottomRight, Position::BottomRight);
        assert_eq!(move_cursor(corner, KeyCode::Down), corner);
        assert_eq!(move_cursor(corner, KeyCode::Right), corner);
        let origin = Address::new(Position::TopLeft, Position::TopLeft);
        assert_eq!(move_cursor(origin, KeyCode::Up), origin);
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        let cursor = Address::new(Position::Center, Position::Center);
        assert_eq!(move_cursor(cursor, KeyCode::Char('x')), cursor);
    }
}
