//! Console command implementation - line-based play on stdin/stdout.

use super::output::print_summary;
use super::{CliError, OutputFormat, game_config};
use merge2048::{Command, Session};
use std::io::{self, BufRead, Write};

/// Execute the console command.
///
/// # Errors
///
/// Returns an error if the session cannot be created or terminal I/O fails.
pub(crate) fn execute(
    rows: u16,
    cols: u16,
    seed: Option<u64>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut session = Session::from_config(&game_config(rows, cols, seed))?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_console(&mut session, stdin.lock(), stdout.lock())?;

    println!();
    print_summary(&session, format)
}

/// Drive a session from line input until the player quits or the board fills.
///
/// End of input counts as quitting.
fn run_console<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut out: W,
) -> Result<(), CliError> {
    writeln!(out)?;
    writeln!(out, "Welcome! Let's play the 2048 game.")?;
    writeln!(out)?;
    write!(out, "{}", session.grid())?;

    loop {
        writeln!(out, "Score: {}", session.score())?;

        let Some(command) = prompt(&mut input, &mut out)? else {
            session.quit();
            break;
        };

        match command {
            Command::Quit => {
                session.quit();
                writeln!(out, "Exiting the game. Thanks for playing!")?;
                break;
            }
            Command::Move(direction) => {
                session.apply_player_move(direction)?;
                write!(out, "{}", session.grid())?;

                if session.is_terminated() {
                    writeln!(out, "Game is Over. Check out your score.")?;
                    writeln!(out, "Thanks for playing!")?;
                    break;
                }
            }
        }
    }

    out.flush()?;
    Ok(())
}

/// Prompt until a valid command is entered. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Option<Command>, CliError> {
    writeln!(out, "Enter one of WASD (move direction) or Q (to quit)")?;

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        match line.parse::<Command>() {
            Ok(command) => return Ok(Some(command)),
            Err(e) => {
                log::debug!("{e}");
                writeln!(out, "Enter one of \"W\", \"A\", \"S\", \"D\", or \"Q\"")?;
            }
        }
    }
}
