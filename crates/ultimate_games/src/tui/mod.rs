//! Full-screen terminal UI for two players at one keyboard.

mod app;
mod ui;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info, instrument};

use app::App;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Runs the TUI until the user quits.
pub fn run_tui(log_file: &Path) -> Result<()> {
    // Log to a file so output does not tear the screen
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();

    info!("Starting Ultimate Games TUI");

    enable_raw_mode()?;
    let res = run_guarded(
        || {
            let mut terminal = enter_screen()?;
            let res = run_app(&mut terminal, &mut App::new());
            terminal.show_cursor()?;
            res
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "TUI loop error");
    }
    res
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` wins over an error from `restore`.
fn run_guarded<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn enter_screen() -> Result<Term> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Leaves raw mode and the alternate screen, whatever state setup reached.
fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Term, app: &mut App) -> Result<()> {
    while !*app.should_quit() {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_setup_fails() {
        let restored = Cell::new(false);
        let res: Result<()> = run_guarded(
            || Err(anyhow!("alternate screen unavailable")),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(restored.get());
        assert_eq!(res.unwrap_err().to_string(), "alternate screen unavailable");
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res: Result<u8> = run_guarded(
            || Err(anyhow!("loop failed")),
            || Err(anyhow!("restore failed")),
        );
        assert_eq!(res.unwrap_err().to_string(), "loop failed");

        let res = run_guarded(|| Ok(7), || Ok(()));
        assert_eq!(res.unwrap(), 7);
    }
}
