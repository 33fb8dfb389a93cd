//! The rules engine: the single writable entry point for advancing a game.

use crate::contracts::{Contract, MoveContract};
use crate::{
    Address, GameResult, Move, MoveOutcome, OuterBoard, Owner, Player, Position, RejectReason,
};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state.
///
/// Owns the board, the player to move and the active sub-board constraint.
/// The only way to change it is [`GameState::apply_move`]; everything else
/// is a read-only view for renderers and reporters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameState {
    /// The nested board.
    pub(crate) board: OuterBoard,
    /// Player to move next.
    pub(crate) current_player: Player,
    /// Sub-board the next move is restricted to, or `None` for free choice.
    pub(crate) constraint: Option<Position>,
    /// Overall result.
    pub(crate) result: GameResult,
    /// Accepted moves, oldest first.
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move, no constraint.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the board.
    pub fn board(&self) -> &OuterBoard {
        &self.board
    }

    /// Returns the player to move.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the sub-board the next move must target, if restricted.
    pub fn active_constraint(&self) -> Option<Position> {
        self.constraint
    }

    /// Returns the overall result.
    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.result.is_over()
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Validates and applies a move for the current player.
    ///
    /// On rejection the state is left exactly as it was. On acceptance the
    /// mark is written, the containing sub-board is closed if it now holds a
    /// line or is full, the outer board is checked for a line or exhaustion,
    /// and, unless the game ended, the constraint moves to the sub-board
    /// matching the square just played (or is lifted if that sub-board cannot
    /// take a move) and the turn passes.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn apply_move(&mut self, address: Address) -> MoveOutcome {
        if let Err(reason) = MoveContract::pre(self, &address) {
            debug!(%reason, "Move rejected");
            return MoveOutcome::Rejected(reason);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        let player = self.current_player;
        let written = self.board.mark_square(address, player);
        debug_assert!(written, "Precondition guarantees an empty square");
        self.history.push(Move::new(player, address));
        debug!("Move applied");

        let sub_board_closed = self.settle_sub_board(address.outer);
        let game_result = self.settle_outer_board();

        if game_result.is_some() {
            self.constraint = None;
        } else {
            let next = address.inner;
            self.constraint = self.board.is_sub_board_playable(next).then_some(next);
            self.current_player = player.opponent();
            debug!(constraint = ?self.constraint, next_player = ?self.current_player, "Turn passed");
        }

        #[cfg(debug_assertions)]
        assert_postconditions(&before, self);

        MoveOutcome::Applied {
            sub_board_closed,
            game_result,
        }
    }

    /// Closes the sub-board if it now holds a line or is full.
    fn settle_sub_board(&mut self, pos: Position) -> Option<Owner> {
        let owner = match self.board.sub_board_line_pattern(pos) {
            Some(player) => Owner::Won(player),
            None if self.board.is_sub_board_full(pos) => Owner::Drawn,
            None => return None,
        };
        self.board.close_sub_board(pos, owner);
        info!(sub_board = %pos, %owner, "Sub-board closed");
        Some(owner)
    }

    /// Terminates the game if sub-board owners form a line or all are closed.
    fn settle_outer_board(&mut self) -> Option<GameResult> {
        let result = match self.board.outer_line_pattern() {
            Some(player) => {
                self.board.set_winner(player);
                GameResult::Won(player)
            }
            None if self.board.is_full() => GameResult::Drawn,
            None => return None,
        };
        self.result = result;
        info!(%result, moves = self.history.len(), "Game over");
        Some(result)
    }

    /// Returns every address [`apply_move`](Self::apply_move) would accept.
    #[instrument(skip(self))]
    pub fn legal_moves(&self) -> Vec<Address> {
        if self.is_over() {
            return Vec::new();
        }

        let targets: Vec<Position> = match self.constraint {
            Some(pos) => vec![pos],
            None => Position::ALL
                .into_iter()
                .filter(|pos| self.board.is_sub_board_playable(*pos))
                .collect(),
        };

        targets
            .into_iter()
            .flat_map(|outer| {
                let sub = self.board.sub_board(outer);
                Position::ALL
                    .into_iter()
                    .filter(move |inner| sub.is_empty(*inner))
                    .map(move |inner| Address::new(outer, inner))
            })
            .collect()
    }

    /// Replays moves from a fresh game.
    ///
    /// Stops at the first refused move and reports where and why.
    #[instrument(skip(moves), fields(count = moves.len()))]
    pub fn replay(moves: &[Address]) -> Result<Self, ReplayError> {
        let mut game = Self::new();
        for (index, address) in moves.iter().copied().enumerate() {
            if let MoveOutcome::Rejected(reason) = game.apply_move(address) {
                return Err(ReplayError {
                    index,
                    address,
                    reason,
                });
            }
        }
        Ok(game)
    }
}

/// Panics if an accepted move broke a game invariant.
#[cfg(debug_assertions)]
fn assert_postconditions(before: &GameState, after: &GameState) {
    if let Err(violations) = MoveContract::post(before, after) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        tracing::warn!(%descriptions, "Postcondition failed");
        panic!("Invariant violation: {}", descriptions);
    }
}

/// A replayed move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, derive_getters::Getters)]
#[display("Move {} at {} rejected: {}", index, address, reason)]
pub struct ReplayError {
    /// Zero-based index of the refused move.
    index: usize,
    /// The refused address.
    address: Address,
    /// Why it was refused.
    reason: RejectReason,
}
