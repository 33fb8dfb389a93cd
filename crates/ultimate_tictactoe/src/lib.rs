//! Ultimate tic-tac-toe rules engine.
//!
//! A 3x3 grid of 3x3 sub-boards. Winning a sub-board claims the matching
//! cell of the outer board, and the square a player picks decides which
//! sub-board the opponent must play in next.
//!
//! # Architecture
//!
//! - **Model**: [`OuterBoard`] owns nine [`SubBoard`]s, each owning nine
//!   [`Square`]s. Both levels share the read-only [`Cell`] capability.
//! - **Engine**: [`GameState::apply_move`] validates, writes, cascades win
//!   detection upward and advances the constraint and turn.
//! - **Contracts and invariants**: preconditions produce [`RejectReason`]s;
//!   postconditions are checked in debug builds.
//!
//! # Example
//!
//! ```
//! use ultimate_tictactoe::{Address, GameState, MoveOutcome, Position};
//!
//! let mut game = GameState::new();
//! let outcome = game.apply_move(Address::new(Position::Center, Position::TopLeft));
//! assert!(outcome.is_applied());
//! assert_eq!(game.active_constraint(), Some(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod game;
mod phases;
mod position;
mod types;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::{Move, MoveOutcome, RejectReason};
pub use board::{OuterBoard, SubBoard};
pub use game::{GameState, ReplayError};
pub use phases::GameResult;
pub use position::{Address, AddressParseError, Position};
pub use types::{Cell, Owner, Player, Square};
