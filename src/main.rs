//! tictactoe_history - Unified CLI
//!
//! Interactive terminal game, or a headless replay of a move sequence.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_history::{App, GameHistory, GameView, Position};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => {
            initialize_file_tracing(&cli.log_file, &cli.log_level)?;
            tictactoe_history::run_tui(App::new())
        }
        Command::Replay { cells, jump, json } => {
            initialize_stderr_tracing(&cli.log_level);
            run_replay(&cells, jump, json)
        }
    }
}

/// Plays `cells` in order and prints the resulting view.
fn run_replay(cells: &[u8], jump: Option<usize>, json: bool) -> Result<()> {
    let view = replay_view(cells, jump)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render_text());
    }
    Ok(())
}

/// Builds the view after playing `cells`, optionally jumping to an entry.
#[instrument]
fn replay_view(cells: &[u8], jump: Option<usize>) -> Result<GameView> {
    let positions = cells
        .iter()
        .map(|&cell| {
            Position::from_index(usize::from(cell))
                .with_context(|| format!("Cell {cell} is not on the board"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut history = GameHistory::replay(&positions)
        .with_context(|| format!("Cannot replay cells {cells:?}"))?;

    if let Some(index) = jump {
        if index >= history.len() {
            bail!(
                "Cannot jump to entry {index}: history has {} entries",
                history.len()
            );
        }
        history.jump_to(index);
    }

    info!(
        snapshots = history.len(),
        viewed = history.viewed_index(),
        status = %history.status(),
        "Replay finished"
    );

    Ok(GameView::from_history(&history))
}

/// Logs to a file so output never lands on the drawn terminal.
fn initialize_file_tracing(path: &Path, default_filter: &str) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(log_file = %path.display(), "Tracing initialized");
    Ok(())
}

fn initialize_stderr_tracing(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_jump_out_of_range_fails() {
        let err = replay_view(&[0, 4], Some(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Cannot jump to entry 3: history has 3 entries"
        );
    }

    #[test]
    fn test_replay_jump_to_last_entry_succeeds() {
        let view = replay_view(&[0, 4], Some(2)).expect("in range");
        assert_eq!(*view.viewed(), 2);
    }

    #[test]
    fn test_replay_occupied_cell_reports_context() {
        let err = replay_view(&[4, 4], None).unwrap_err();
        assert_eq!(err.to_string(), "Cannot replay cells [4, 4]");
        assert!(format!("{err:#}").contains("already occupied"), "{err:#}");
    }

    #[test]
    fn test_replay_cell_off_board_fails() {
        let err = replay_view(&[9], None).unwrap_err();
        assert_eq!(err.to_string(), "Cell 9 is not on the board");
    }

    #[test]
    fn test_replay_json_shape() {
        let view = replay_view(&[0, 4, 1, 5, 2], None).expect("legal moves");
        let value = serde_json::to_value(&view).expect("serialize");

        let keys: Vec<&str> = value
            .as_object()
            .expect("object")
            .keys()
            .map(String::as_str)
            .collect();
        for key in ["cells", "status", "winning_line", "history", "viewed"] {
            assert!(keys.contains(&key), "missing {key} in {keys:?}");
        }
        assert_eq!(value["status"], "Winner: X");
        assert_eq!(value["cells"][0], "X");
        assert_eq!(value["cells"][3], "");
        assert_eq!(value["winning_line"][0], "TopLeft");
        assert_eq!(value["history"].as_array().map(Vec::len), Some(6));
        assert_eq!(value["history"][5], "Go to move #5");
        assert_eq!(value["viewed"], 5);
    }
}
