//! Player commands.

use std::str::FromStr;

use crate::board::Direction;
use crate::error::ParseCommandError;

/// One turn of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Slide tiles in a direction.
    Move(Direction),
    /// End the game.
    Quit,
}

impl FromStr for Command {
    type Err = ParseCommandError;

    /// Parse a console token: `W`, `A`, `S`, `D` or `Q`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_ascii_uppercase().as_str() {
            "W" => Ok(Command::Move(Direction::Up)),
            "A" => Ok(Command::Move(Direction::Left)),
            "S" => Ok(Command::Move(Direction::Down)),
            "D" => Ok(Command::Move(Direction::Right)),
            "Q" => Ok(Command::Quit),
            _ => Err(ParseCommandError {
                input: token.to_string(),
            }),
        }
    }
}
