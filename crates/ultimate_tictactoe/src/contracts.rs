//! Contract-based validation for ultimate tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Address, GameState, Position, RejectReason};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game has not been won or drawn.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects with [`RejectReason::GameOver`] once the game has terminated.
    ///
    /// A recorded outer winner or a fully closed outer board also counts,
    /// so a snapshot whose result lags its board still refuses moves.
    #[instrument(skip(game))]
    pub fn check(address: &Address, game: &GameState) -> Result<(), RejectReason> {
        let board = game.board();
        if game.result().is_over() || board.winner().is_some() || board.is_full() {
            Err(RejectReason::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The move targets the active sub-board, if one is set.
pub struct ConstraintSatisfied;

impl ConstraintSatisfied {
    /// Rejects with [`RejectReason::WrongSubBoard`] when the move leaves the
    /// active sub-board.
    #[instrument(skip(game))]
    pub fn check(address: &Address, game: &GameState) -> Result<(), RejectReason> {
        let Some(required) = game.active_constraint() else {
            return Ok(());
        };

        if !game.board().is_sub_board_playable(required) {
            warn!(?required, "Active constraint points at a closed sub-board");
            debug_assert!(false, "Invariant violation: constraint on closed sub-board");
        }

        if address.outer != required {
            Err(RejectReason::WrongSubBoard)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The targeted sub-board is still open.
pub struct SubBoardOpen;

impl SubBoardOpen {
    /// Rejects with [`RejectReason::SubBoardClosed`] for won or drawn sub-boards.
    #[instrument(skip(game))]
    pub fn check(address: &Address, game: &GameState) -> Result<(), RejectReason> {
        if game.board().sub_board(address.outer).is_closed() {
            Err(RejectReason::SubBoardClosed)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The square at the move's address must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Rejects with [`RejectReason::CellOccupied`] for occupied squares.
    #[instrument(skip(game))]
    pub fn check(address: &Address, game: &GameState) -> Result<(), RejectReason> {
        if game.board().sub_board(address.outer).is_empty(address.inner) {
            Ok(())
        } else {
            Err(RejectReason::CellOccupied)
        }
    }
}

/// Composite precondition, checked in order: game not over, constraint
/// satisfied, sub-board open, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(address: &Address, game: &GameState) -> Result<(), RejectReason> {
        GameNotOver::check(address, game)?;
        ConstraintSatisfied::check(address, game)?;
        SubBoardOpen::check(address, game)?;
        SquareIsEmpty::check(address, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Every game invariant holds on the new state
/// - No square or sub-board owner set before the move has changed
/// - Exactly one move was appended to the history
pub struct MoveContract;

impl Contract<GameState, Address> for MoveContract {
    fn pre(game: &GameState, action: &Address) -> Result<(), RejectReason> {
        LegalMove::check(action, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = match GameInvariants::check_all(after) {
            Ok(()) => Vec::new(),
            Err(violations) => violations,
        };

        for outer in Position::ALL {
            let was = before.board().sub_board(outer);
            let now = after.board().sub_board(outer);

            if was.is_closed() && was.owner() != now.owner() {
                violations.push(InvariantViolation::new(format!(
                    "Owner of sub-board {} changed from {} to {}",
                    outer,
                    was.owner(),
                    now.owner()
                )));
            }

            for inner in Position::ALL {
                if !was.is_empty(inner) && was.get(inner) != now.get(inner) {
                    violations.push(InvariantViolation::new(format!(
                        "Square {} overwritten",
                        Address::new(outer, inner)
                    )));
                }
            }
        }

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("History did not grow by one move"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}
