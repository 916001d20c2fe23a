// Ferrero Control CLI
// Headless driver for the Ferrero peg-solitaire environment

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "ferreroctl")]
#[command(about = "Ferrero puzzle environment CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Board selection shared by every subcommand
#[derive(Args, Debug, Clone, Default)]
struct BoardArgs {
    /// JSON configuration file (rows, cols, episodes)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of rows, overrides the configuration file
    #[arg(long)]
    rows: Option<usize>,

    /// Number of columns, overrides the configuration file
    #[arg(long)]
    cols: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play episodes with a random agent
    Play {
        #[command(flatten)]
        board: BoardArgs,

        /// Episode budget, overrides the configuration file
        #[arg(short, long)]
        episodes: Option<usize>,

        /// Seed for the random agent
        #[arg(long)]
        seed: Option<u64>,

        /// Print per-episode summaries as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the legal moves of the initial board
    Moves {
        #[command(flatten)]
        board: BoardArgs,

        /// Only list jumps from this cell (ROW COL)
        #[arg(long, num_args = 2, value_names = ["ROW", "COL"])]
        from: Option<Vec<usize>>,
    },

    /// Encode a raw move
    Encode {
        /// Row of the jumping piece
        row: usize,

        /// Column of the jumping piece
        col: usize,

        /// Direction (up, down, left, right)
        direction: String,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Decode an encoded action
    Decode {
        /// Encoded action
        code: usize,

        #[command(flatten)]
        board: BoardArgs,
    },

    /// Print the initial board
    Show {
        #[command(flatten)]
        board: BoardArgs,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    commands::handle_command(cli.command).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "ferreroctl", "play", "--rows", "4", "--cols", "5", "-e", "3", "--seed", "7", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Play { board, episodes, seed, json } => {
                assert_eq!((board.rows, board.cols), (Some(4), Some(5)));
                assert_eq!(episodes, Some(3));
                assert_eq!(seed, Some(7));
                assert!(json);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_parse_moves_from() {
        let cli = Cli::try_parse_from(["ferreroctl", "moves", "--from", "0", "2"]).unwrap();
        match cli.command {
            Commands::Moves { from, .. } => assert_eq!(from, Some(vec![0, 2])),
            _ => panic!("expected moves"),
        }

        let cli = Cli::try_parse_from(["ferreroctl", "moves"]).unwrap();
        assert!(matches!(cli.command, Commands::Moves { from: None, .. }));
    }
}
