//! Line-oriented modes: interactive play on stdin and batch replay.

use crate::input::resolve_address;
use crate::render::{describe_outcome, render_game};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};
use ultimate_tictactoe::{Address, GameResult, GameState};

/// Runs a game reading one address per line until it ends, `q`, or EOF.
#[instrument(skip_all)]
pub fn run_play<R: BufRead, W: Write>(input: R, mut output: W) -> Result<GameResult> {
    let mut game = GameState::new();
    info!("Starting line-mode game");

    write!(output, "{}", render_game(&game))?;
    prompt(&mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read move")?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("q") || trimmed.eq_ignore_ascii_case("quit") {
            info!("Player quit");
            break;
        }
        if trimmed.is_empty() {
            prompt(&mut output)?;
            continue;
        }

        let Some(address) = resolve_address(trimmed) else {
            debug!(input = trimmed, "Unrecognised address");
            writeln!(
                output,
                "Could not read {:?}; expected outer_row outer_col inner_row inner_col",
                trimmed
            )?;
            prompt(&mut output)?;
            continue;
        };

        let outcome = game.apply_move(address);
        if let Some(message) = describe_outcome(&outcome) {
            writeln!(output, "{}", message)?;
        }
        if outcome.is_applied() {
            write!(output, "{}", render_game(&game))?;
        }
        if game.is_over() {
            break;
        }
        prompt(&mut output)?;
    }

    output.flush()?;
    Ok(game.result())
}

fn prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "> ")?;
    output.flush()?;
    Ok(())
}

/// Parses every move, replays them, and prints the final game.
#[instrument(skip(output))]
pub fn run_replay<W: Write>(moves: &[String], json: bool, mut output: W) -> Result<GameResult> {
    let addresses = moves
        .iter()
        .map(|text| {
            resolve_address(text).with_context(|| format!("Invalid address {:?}", text))
        })
        .collect::<Result<Vec<Address>>>()?;

    let game = GameState::replay(&addresses)?;
    info!(moves = game.history().len(), result = %game.result(), "Replay finished");

    if json {
        serde_json::to_writer_pretty(&mut output, &game).context("Failed to encode game")?;
        writeln!(output)?;
    } else {
        write!(output, "{}", render_game(&game))?;
    }
    Ok(game.result())
}
