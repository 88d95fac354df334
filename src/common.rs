//! Common types for the engine: shot outcomes and the error enums shared by
//! the board, the session and the input parser.

use crate::ship::ShipKind;

/// Result of resolving one shot against the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShotOutcome {
    /// Shot landed in open water.
    Miss,
    /// Shot struck a ship that is still afloat.
    Hit,
    /// Shot sank a ship, carrying its label.
    Sunk(&'static str),
    /// Shot struck a ship that was already sunk; no counter besides
    /// `shots_fired` moves.
    AlreadySunk(&'static str),
}

impl ShotOutcome {
    /// Whether the shot damaged a ship afloat, sinking it or not. A shot
    /// into a ship already sunk is not a hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk(_))
    }
}

impl core::fmt::Display for ShotOutcome {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShotOutcome::Miss => write!(f, "miss"),
            ShotOutcome::Hit => write!(f, "hit"),
            ShotOutcome::Sunk(label) => write!(f, "You just sunk a {}!", label),
            ShotOutcome::AlreadySunk(label) => write!(f, "That {} is already sunk.", label),
        }
    }
}

/// Errors returned by board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Random placement ran out of attempts for a ship.
    UnableToPlaceShip { kind: ShipKind, attempts: usize },
    /// The fleet was already placed on this board.
    AlreadyPlaced,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::UnableToPlaceShip { kind, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                kind.label(),
                attempts
            ),
            BoardError::AlreadyPlaced => write!(f, "Fleet is already placed on this board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned by a game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// A shot was already fired at this coordinate.
    AlreadyShot { row: usize, col: usize },
    /// The coordinate is off the board.
    OutOfBounds { row: usize, col: usize },
    /// Every ship is sunk; start a new game to keep playing.
    GameOver,
    /// No board could be built for the session.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::AlreadyShot { row, col } => write!(
                f,
                "You have already shot at this coordinate ({}, {})!",
                row, col
            ),
            GameError::OutOfBounds { row, col } => {
                write!(f, "Coordinate ({}, {}) is off the board", row, col)
            }
            GameError::GameOver => write!(f, "Game is over, start a new one"),
            GameError::Board(e) => write!(f, "Unable to start a game: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}

/// Errors produced while parsing player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Nothing was entered.
    Empty,
    /// Coordinates need exactly two values.
    WrongArity(usize),
    /// A token was not a number.
    NotANumber,
    /// A number fell outside `0..BOARD_SIZE`.
    OutOfRange(i64),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Empty => write!(f, "Empty input. Try again!"),
            InputError::WrongArity(n) => {
                write!(f, "Incorrect coordinates: expected 2 values, got {}. Try again!", n)
            }
            InputError::NotANumber => write!(f, "Incorrect coordinates: not a number. Try again!"),
            InputError::OutOfRange(v) => {
                write!(f, "Incorrect coordinates: {} is outside 0..9. Try again!", v)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}
