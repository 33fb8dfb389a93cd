//! End-to-end scenarios for the rules engine.

use ultimate_tictactoe::{
    Address, GameResult, GameState, MoveOutcome, Owner, Player, Position, RejectReason,
};

fn addr(outer: usize, inner: usize) -> Address {
    Address::new(
        Position::from_index(outer).unwrap(),
        Position::from_index(inner).unwrap(),
    )
}

/// X wins sub-boards 0, 1 and 2 (the outer top row) in 17 legal moves.
///
/// X keeps sending O to a sub-board where O's only sensible reply sends X
/// straight back to the sub-board X is working on.
fn top_row_win() -> Vec<Address> {
    [
        (0, 1),
        (1, 0),
        (0, 2),
        (2, 0),
        (0, 0), // X takes sub-board 0
        (8, 1),
        (1, 3),
        (3, 1),
        (1, 4),
        (4, 1),
        (1, 5), // X takes sub-board 1
        (5, 2),
        (2, 3),
        (3, 2),
        (2, 4),
        (4, 2),
        (2, 5), // X takes sub-board 2 and the game
    ]
    .into_iter()
    .map(|(outer, inner)| addr(outer, inner))
    .collect()
}

#[test]
fn test_first_move_constrains_opponent() {
    let mut game = GameState::new();
    let first = Address::from_coords(1, 1, 0, 0).unwrap();

    assert!(game.apply_move(first).is_applied());
    assert_eq!(game.active_constraint(), Some(Position::TopLeft));
    assert_eq!(game.current_player(), Player::O);
    assert_eq!(game.board().square(first).player(), Some(Player::X));
}

#[test]
fn test_completing_top_row_claims_sub_board() {
    let moves = top_row_win();
    let mut game = GameState::replay(&moves[..4]).expect("legal opening");
    assert_eq!(game.board().sub_board(Position::TopLeft).owner(), Owner::Open);

    let outcome = game.apply_move(moves[4]);
    assert_eq!(
        outcome,
        MoveOutcome::Applied {
            sub_board_closed: Some(Owner::Won(Player::X)),
            game_result: None,
        }
    );
    assert_eq!(
        game.board().sub_board(Position::TopLeft).owner(),
        Owner::Won(Player::X)
    );
}

#[test]
fn test_move_into_closed_board_lifts_constraint() {
    let moves = top_row_win();
    let mut game = GameState::replay(&moves[..5]).expect("legal opening");

    // The winning move's square points at the sub-board it just closed.
    assert_eq!(game.active_constraint(), None);

    // Later, O sends X to the closed sub-board 0 again: still free choice.
    assert!(game.apply_move(addr(8, 0)).is_applied());
    assert_eq!(game.active_constraint(), None);
    assert!(game.legal_moves().iter().all(|a| a.outer != Position::TopLeft));
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut game = GameState::new();
    game.apply_move(addr(4, 4)); // X sends O to the center sub-board
    let snapshot = game.clone();

    let outcome = game.apply_move(addr(4, 4));
    assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::CellOccupied));
    assert_eq!(game, snapshot);
}

#[test]
fn test_closed_sub_board_rejected_under_free_choice() {
    let moves = top_row_win();
    let mut game = GameState::replay(&moves[..5]).expect("legal opening");
    let snapshot = game.clone();

    let outcome = game.apply_move(addr(0, 4));
    assert_eq!(outcome, MoveOutcome::Rejected(RejectReason::SubBoardClosed));
    assert_eq!(game, snapshot);
}

#[test]
fn test_wrong_sub_board_rejected() {
    let mut game = GameState::new();
    game.apply_move(addr(4, 2));
    assert_eq!(
        game.apply_move(addr(3, 0)),
        MoveOutcome::Rejected(RejectReason::WrongSubBoard)
    );
}

#[test]
fn test_outer_line_wins_game() {
    let moves = top_row_win();
    let mut game = GameState::replay(&moves[..16]).expect("legal game");
    assert_eq!(game.result(), GameResult::InProgress);

    let outcome = game.apply_move(moves[16]);
    assert_eq!(
        outcome,
        MoveOutcome::Applied {
            sub_board_closed: Some(Owner::Won(Player::X)),
            game_result: Some(GameResult::Won(Player::X)),
        }
    );
    assert_eq!(game.result(), GameResult::Won(Player::X));
    assert_eq!(game.board().winner(), Some(Player::X));
    assert_eq!(game.active_constraint(), None);
    assert!(game.legal_moves().is_empty());

    // Terminal: every further move is refused and nothing changes.
    let snapshot = game.clone();
    for address in [addr(4, 4), addr(5, 0), addr(8, 8)] {
        assert_eq!(
            game.apply_move(address),
            MoveOutcome::Rejected(RejectReason::GameOver)
        );
    }
    assert_eq!(game, snapshot);
}

#[test]
fn test_replay_stops_at_illegal_move() {
    let mut moves = top_row_win();
    moves.truncate(3);
    moves.push(addr(0, 0)); // O is constrained to sub-board 2

    let err = GameState::replay(&moves).unwrap_err();
    assert_eq!(*err.index(), 3);
    assert_eq!(*err.address(), addr(0, 0));
    assert_eq!(*err.reason(), RejectReason::WrongSubBoard);
}
