//! Command-line interface for tictactoe_history.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_history")]
#[command(about = "Terminal tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log filter used when RUST_LOG is unset (e.g. "debug" or "tictactoe_history=trace")
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Log file for the interactive game (the terminal is busy drawing)
    #[arg(long, global = true, default_value = "tictactoe_history.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play,

    /// Play a sequence of cells headlessly and print the resulting view
    Replay {
        /// Cells to play in order, X first (0-8, row-major)
        #[arg(value_parser = clap::value_parser!(u8).range(0..=8))]
        cells: Vec<u8>,

        /// History entry to view after playing (defaults to the last)
        #[arg(long)]
        jump: Option<usize>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_play() {
        let cli = Cli::try_parse_from(["tictactoe_history"]).expect("parses");
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_replay_arguments() {
        let cli = Cli::try_parse_from(["tictactoe_history", "replay", "0", "4", "1", "--jump", "2"])
            .expect("parses");
        match cli.command {
            Some(Command::Replay { cells, jump, json }) => {
                assert_eq!(cells, vec![0, 4, 1]);
                assert_eq!(jump, Some(2));
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_replay_rejects_cell_out_of_range() {
        assert!(Cli::try_parse_from(["tictactoe_history", "replay", "9"]).is_err());
    }
}
