use rand::Rng;

use crate::{
    bitboard::BitBoard,
    board::{Board, Stats},
    common::{BoardError, GameError, ShotOutcome},
    config::{BOARD_SIZE, MAX_BOARD_REBUILDS, TOTAL_SHIP_CELLS},
};

/// Set of coordinates a player has fired at.
pub type ShotLog = BitBoard<u128, { BOARD_SIZE as usize }>;

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum GameStatus {
    InProgress,
    Won,
}

/// One player's run of games: the live board, the shots fired at it and the
/// random source used to build each new board.
pub struct GameSession<R: Rng> {
    rng: R,
    board: Board,
    shots: ShotLog,
    games_started: usize,
}

impl<R: Rng> GameSession<R> {
    /// Start the first game with a freshly placed fleet.
    pub fn new(mut rng: R) -> Result<Self, GameError> {
        let board = build_board(&mut rng)?;
        Ok(Self {
            rng,
            board,
            shots: ShotLog::new(),
            games_started: 1,
        })
    }

    /// Throw the current board away and start over on a brand-new one.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.board = build_board(&mut self.rng)?;
        self.shots = ShotLog::new();
        self.games_started += 1;
        log::info!("starting game #{}", self.games_started);
        Ok(())
    }

    /// Fire at (`row`, `col`). Coordinates already fired at are rejected
    /// before they reach the board, so they never count as a shot.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotOutcome, GameError> {
        if self.board.is_game_over() {
            return Err(GameError::GameOver);
        }
        let seen = self
            .shots
            .get(row, col)
            .map_err(|_| GameError::OutOfBounds { row, col })?;
        if seen {
            return Err(GameError::AlreadyShot { row, col });
        }
        self.shots
            .set(row, col)
            .map_err(|_| GameError::OutOfBounds { row, col })?;
        let outcome = self.board.shoot_at(row, col);
        if outcome.is_hit() {
            log::debug!(
                "game #{}: hit at ({}, {}), {} of {} segments down",
                self.games_started,
                row,
                col,
                self.board.hit_count(),
                TOTAL_SHIP_CELLS
            );
        }
        Ok(outcome)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Coordinates fired at in the current game.
    pub fn shots(&self) -> ShotLog {
        self.shots
    }

    pub fn stats(&self) -> Stats {
        self.board.snapshot_stats()
    }

    pub fn status(&self) -> GameStatus {
        if self.board.is_game_over() {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.board.is_game_over()
    }

    /// Number of games started in this session, the current one included.
    pub fn games_started(&self) -> usize {
        self.games_started
    }
}

/// Build a board with a full fleet, retrying from scratch when placement
/// gives up.
fn build_board<R: Rng + ?Sized>(rng: &mut R) -> Result<Board, BoardError> {
    let mut last_err = BoardError::AlreadyPlaced;
    for attempt in 1..=MAX_BOARD_REBUILDS {
        match Board::with_fleet(rng) {
            Ok(board) => return Ok(board),
            Err(e) => {
                log::warn!("board #{} discarded: {}", attempt, e);
                last_err = e;
            }
        }
    }
    Err(last_err)
}
