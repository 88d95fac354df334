//! Turning raw player text into commands the driver can act on. Nothing
//! here touches a board: bad input is rejected before a shot is fired.

use crate::common::InputError;
use crate::config::BOARD_SIZE;

/// What the player asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shoot { row: usize, col: usize },
    Help,
    Print,
    Quit,
}

/// Parse one line of input: `q`, `h`, `p`, or a coordinate pair.
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    match input.trim() {
        "q" | "quit" => Ok(Command::Quit),
        "h" | "help" | "?" => Ok(Command::Help),
        "p" | "print" => Ok(Command::Print),
        other => parse_coordinates(other).map(|(row, col)| Command::Shoot { row, col }),
    }
}

/// Parse `row,col` or `row col`, each in `0..BOARD_SIZE`.
pub fn parse_coordinates(input: &str) -> Result<(usize, usize), InputError> {
    let mut tokens = input
        .split(|ch: char| ch == ',' || ch.is_whitespace())
        .filter(|token| !token.is_empty());

    let (row, col) = match (tokens.next(), tokens.next()) {
        (None, _) => return Err(InputError::Empty),
        (Some(_), None) => return Err(InputError::WrongArity(1)),
        (Some(row), Some(col)) => (row, col),
    };
    let extra = tokens.count();
    if extra > 0 {
        return Err(InputError::WrongArity(2 + extra));
    }
    Ok((parse_axis(row)?, parse_axis(col)?))
}

fn parse_axis(token: &str) -> Result<usize, InputError> {
    let value: i64 = token.parse().map_err(|_| InputError::NotANumber)?;
    if (0..BOARD_SIZE as i64).contains(&value) {
        Ok(value as usize)
    } else {
        Err(InputError::OutOfRange(value))
    }
}
