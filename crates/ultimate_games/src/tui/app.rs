//! Application state and key handling.

use crate::input::move_cursor;
use crate::render::{describe_outcome, status_line};
use crossterm::event::KeyCode;
use derive_getters::Getters;
use tracing::{debug, info};
use ultimate_tictactoe::{Address, GameState, Position};

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    /// The game being played.
    game: GameState,
    /// Square the next placement targets.
    cursor: Address,
    /// Message shown under the board.
    status: String,
    /// Set once the user asks to leave.
    should_quit: bool,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Creates an app with a fresh game and the cursor in the middle.
    pub fn new() -> Self {
        let game = GameState::new();
        let status = status_line(&game);
        Self {
            game,
            cursor: Address::new(Position::Center, Position::Center),
            status,
            should_quit: false,
        }
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place_at_cursor(),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, key);
            }
            _ => {}
        }
    }

    /// Starts a new game, keeping the cursor where it is.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game = GameState::new();
        self.status = status_line(&self.game);
    }

    fn place_at_cursor(&mut self) {
        let outcome = self.game.apply_move(self.cursor);
        debug!(cursor = %self.cursor, ?outcome, "Placement attempted");

        self.status = if self.game.is_over() {
            format!(
                "{}! Press 'r' to restart or 'q' to quit.",
                self.game.result()
            )
        } else {
            match describe_outcome(&outcome) {
                Some(message) => format!("{}. {}", message, status_line(&self.game)),
                None => status_line(&self.game),
            }
        };
    }
}
