//! Plain-text rendering of a game for line-oriented modes.

use ultimate_tictactoe::{GameResult, GameState, MoveOutcome, Owner, Position};

/// Glyph summarising a sub-board owner on the outer map.
pub fn owner_glyph(owner: Owner) -> char {
    match owner {
        Owner::Open => '.',
        Owner::Won(player) => player.glyph(),
        Owner::Drawn => '#',
    }
}

/// Outer 3x3 map of sub-board owners.
pub fn owner_map(game: &GameState) -> String {
    let mut result = String::new();
    for row in Position::ALL.chunks(3) {
        let line: Vec<String> = row
            .iter()
            .map(|pos| owner_glyph(game.board().sub_board(*pos).owner()).to_string())
            .collect();
        result.push_str(&line.join(" "));
        result.push('\n');
    }
    result
}

/// One-line description of whose turn it is and where they may play.
pub fn status_line(game: &GameState) -> String {
    match game.result() {
        GameResult::InProgress => match game.active_constraint() {
            Some(pos) => format!(
                "{} to move in sub-board {} ({},{})",
                game.current_player(),
                pos,
                pos.row(),
                pos.col()
            ),
            None => format!("{} to move in any open sub-board", game.current_player()),
        },
        result => format!("Game over: {}", result),
    }
}

/// Full text view: squares, owner map and status.
pub fn render_game(game: &GameState) -> String {
    format!(
        "{}\nSub-boards:\n{}\n{}\n",
        game.board().display(),
        owner_map(game),
        status_line(game)
    )
}

/// Message announcing what a move changed, if anything worth announcing.
pub fn describe_outcome(outcome: &MoveOutcome) -> Option<String> {
    match outcome {
        MoveOutcome::Rejected(reason) => Some(format!("Illegal move: {}", reason)),
        MoveOutcome::Applied {
            game_result: Some(result),
            ..
        } => Some(result.to_string()),
        MoveOutcome::Applied {
            sub_board_closed: Some(owner),
            ..
        } => Some(format!("Sub-board {}", owner)),
        MoveOutcome::Applied { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ultimate_tictactoe::{Address, RejectReason};

    fn addr(outer: usize, inner: usize) -> Address {
        Address::new(
            Position::from_index(outer).unwrap(),
            Position::from_index(inner).unwrap(),
        )
    }

    #[test]
    fn test_status_line_reports_constraint() {
        let mut game = GameState::new();
        assert_eq!(status_line(&game), "X to move in any open sub-board");
        game.apply_move(addr(4, 2));
        assert_eq!(status_line(&game), "O to move in sub-board Top-right (0,2)");
    }

    #[test]
    fn test_owner_map_marks_won_boards() {
        let moves = [addr(0, 1), addr(1, 0), addr(0, 2), addr(2, 0), addr(0, 0)];
        let game = GameState::replay(&moves).unwrap();
        assert_eq!(owner_map(&game), "X . .\n. . .\n. . .\n");
    }

    #[test]
    fn test_render_game_contains_all_parts() {
        let game = GameState::new();
        let text = render_game(&game);
        assert!(text.contains("------+-------+------"));
        assert!(text.contains("Sub-boards:"));
        assert!(text.ends_with("X to move in any open sub-board\n"));
    }

    #[test]
    fn test_describe_outcome() {
        assert_eq!(
            describe_outcome(&MoveOutcome::Rejected(RejectReason::CellOccupied)),
            Some("Illegal move: Square is already occupied".to_string())
        );
        assert_eq!(
            describe_outcome(&MoveOutcome::Applied {
                sub_board_closed: Some(Owner::Drawn),
                game_result: None,
            }),
            Some("Sub-board drawn".to_string())
        );
        assert_eq!(
            describe_outcome(&MoveOutcome::Applied {
                sub_board_closed: None,
                game_result: None,
            }),
            None
        );
    }
}
