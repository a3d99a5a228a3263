//! merge2048 CLI - play the sliding-tile merge game in a terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// merge2048 - slide and merge tiles until the board fills up
#[derive(Parser, Debug)]
#[command(name = "merge2048")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play in an interactive full-screen TUI
    Play {
        /// Number of rows (default: 4)
        #[arg(short, long, default_value = "4")]
        rows: u16,

        /// Number of columns (default: 4)
        #[arg(short, long, default_value = "4")]
        cols: u16,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Final summary format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Play with line-based prompts (WASD to move, Q to quit)
    Console {
        /// Number of rows (default: 4)
        #[arg(short, long, default_value = "4")]
        rows: u16,

        /// Number of columns (default: 4)
        #[arg(short, long, default_value = "4")]
        cols: u16,

        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Final summary format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = match args.command {
        Commands::Play {
            rows,
            cols,
            seed,
            format,
        } => cli::play::execute(rows, cols, seed, format),

        Commands::Console {
            rows,
            cols,
            seed,
            format,
        } => cli::console::execute(rows, cols, seed, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
