//! The board engine: a 10×10 grid where every cell refers to a ship (open
//! water included), random fleet placement, shot resolution and the
//! statistics a driver shows between turns.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{BoardError, ShotOutcome};
use crate::config::{BOARD_SIZE, FLEET, MAX_PLACEMENT_ATTEMPTS, NUM_SHIPS};
use crate::ship::{Orientation, Ship};

const GRID: usize = BOARD_SIZE as usize;

/// Handle to a ship owned by a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShipId(usize);

/// Snapshot of the aggregate game counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Stats {
    pub shots_fired: usize,
    pub hit_count: usize,
    pub ships_sunk: usize,
    pub ships_shot_but_not_sunk: usize,
    pub ships_untouched: usize,
}

impl fmt::Display for Stats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Shots fired: {}\nHits: {}\nShips sunk: {}\nShips shot: {}\nWhole ships: {}",
            self.shots_fired,
            self.hit_count,
            self.ships_sunk,
            self.ships_shot_but_not_sunk,
            self.ships_untouched
        )
    }
}

/// One game's board. Replaced, never reset, when a new game starts.
pub struct Board {
    /// Every ship ever placed, open water cells included.
    ships: Vec<Ship>,
    /// Real ships in placement order.
    fleet: Vec<ShipId>,
    grid: [[ShipId; GRID]; GRID],
    shots_fired: usize,
    hit_count: usize,
    ships_sunk: usize,
}

impl Board {
    /// Board with open water in every cell and all counters at zero.
    pub fn new() -> Self {
        let mut board = Board {
            ships: Vec::with_capacity(GRID * GRID + NUM_SHIPS),
            fleet: Vec::with_capacity(NUM_SHIPS),
            grid: [[ShipId(0); GRID]; GRID],
            shots_fired: 0,
            hit_count: 0,
            ships_sunk: 0,
        };
        for row in 0..GRID {
            for col in 0..GRID {
                Ship::empty_sea().place(row, col, Orientation::Horizontal, &mut board);
            }
        }
        board
    }

    /// New board with the standard fleet placed at random.
    pub fn with_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, BoardError> {
        let mut board = Self::new();
        board.place_fleet_randomly(rng)?;
        Ok(board)
    }

    /// Place the standard fleet, largest ship first, sampling a random bow
    /// and orientation for each ship until one passes
    /// [`Ship::is_placement_valid`].
    ///
    /// On error the board holds a partial fleet and must be discarded.
    pub fn place_fleet_randomly<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        if !self.fleet.is_empty() {
            return Err(BoardError::AlreadyPlaced);
        }
        for kind in FLEET {
            let ship = Ship::new(kind);
            let (row, col, orientation) = self.random_placement(rng, &ship)?;
            ship.place(row, col, orientation, self);
            log::debug!(
                "placed {} at ({}, {}) {:?}",
                kind.label(),
                row,
                col,
                orientation
            );
        }
        Ok(())
    }

    /// Sample bows and orientations uniformly until `ship` fits.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship: &Ship,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let row = rng.random_range(0..GRID);
            let col = rng.random_range(0..GRID);
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            if ship.is_placement_valid(row, col, orientation, self) {
                return Ok((row, col, orientation));
            }
        }
        log::warn!(
            "gave up placing {} after {} attempts",
            ship.ship_kind_label(),
            MAX_PLACEMENT_ATTEMPTS
        );
        Err(BoardError::UnableToPlaceShip {
            kind: ship.kind(),
            attempts: MAX_PLACEMENT_ATTEMPTS,
        })
    }

    pub(crate) fn adopt(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.ships.len());
        if !ship.kind().is_empty_sea() {
            self.fleet.push(id);
        }
        self.ships.push(ship);
        id
    }

    pub(crate) fn occupy(&mut self, row: usize, col: usize, id: ShipId) {
        if let Some(cell) = self.grid.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = id;
        }
    }

    /// Ship registered in cell (`row`, `col`).
    ///
    /// # Panics
    /// If the coordinate is off the board.
    pub fn occupant(&self, row: usize, col: usize) -> &Ship {
        &self.ships[self.grid[row][col].0]
    }

    pub fn ship(&self, id: ShipId) -> &Ship {
        &self.ships[id.0]
    }

    /// Whether a real ship (not open water) sits in cell (`row`, `col`).
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        !self.occupant(row, col).kind().is_empty_sea()
    }

    /// Real ships in placement order.
    pub fn ships(&self) -> impl Iterator<Item = &Ship> + '_ {
        self.fleet.iter().map(move |&id| self.ship(id))
    }

    /// Resolve a shot at (`row`, `col`).
    ///
    /// `shots_fired` always moves. A shot into a ship already sunk reports
    /// [`ShotOutcome::AlreadySunk`] and changes nothing else. Re-shooting an
    /// afloat segment counts as another hit.
    ///
    /// # Panics
    /// If the coordinate is off the board.
    pub fn shoot_at(&mut self, row: usize, col: usize) -> ShotOutcome {
        self.shots_fired += 1;
        let ship = &mut self.ships[self.grid[row][col].0];

        let outcome = if ship.kind().is_empty_sea() {
            ship.register_shot(row, col);
            ShotOutcome::Miss
        } else if ship.register_shot(row, col) {
            self.hit_count += 1;
            if ship.is_sunk() {
                self.ships_sunk += 1;
                ShotOutcome::Sunk(ship.ship_kind_label())
            } else {
                ShotOutcome::Hit
            }
        } else {
            ShotOutcome::AlreadySunk(ship.ship_kind_label())
        };
        log::trace!("shot #{} at ({}, {}): {:?}", self.shots_fired, row, col, outcome);
        outcome
    }

    /// Whether cell (`row`, `col`) has been fired upon.
    pub fn is_shot_at(&self, row: usize, col: usize) -> bool {
        self.occupant(row, col).is_shot_at(row, col)
    }

    /// Player-facing glyph of a cell: `.` not shot, `-` shot water,
    /// `S` part of a damaged ship, `x` part of a sunk ship.
    pub fn display_symbol(&self, row: usize, col: usize) -> char {
        let ship = self.occupant(row, col);
        if ship.is_sunk() {
            'x'
        } else if !ship.is_shot_at(row, col) {
            '.'
        } else if ship.kind().is_empty_sea() {
            '-'
        } else {
            'S'
        }
    }

    pub fn shots_fired(&self) -> usize {
        self.shots_fired
    }

    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    pub fn ships_sunk(&self) -> usize {
        self.ships_sunk
    }

    /// Returns `true` once every ship of the fleet is sunk.
    pub fn is_game_over(&self) -> bool {
        self.ships_sunk == NUM_SHIPS
    }

    /// Ships hit at least once and still afloat. Each ship is counted at
    /// its bow cell only.
    pub fn ships_shot_but_not_sunk(&self) -> usize {
        let mut damaged = 0;
        for row in 0..GRID {
            for col in 0..GRID {
                let ship = self.occupant(row, col);
                if ship.is_damaged() && ship.bow() == Some((row, col)) {
                    damaged += 1;
                }
            }
        }
        damaged
    }

    pub fn snapshot_stats(&self) -> Stats {
        let damaged = self.ships_shot_but_not_sunk();
        Stats {
            shots_fired: self.shots_fired,
            hit_count: self.hit_count,
            ships_sunk: self.ships_sunk,
            ships_shot_but_not_sunk: damaged,
            ships_untouched: NUM_SHIPS.saturating_sub(self.ships_sunk + damaged),
        }
    }

    /// Display wrapper that also shows ships nobody has found yet.
    pub fn revealed(&self) -> Revealed<'_> {
        Revealed(self)
    }

    fn write_grid<F>(&self, f: &mut fmt::Formatter<'_>, symbol: F) -> fmt::Result
    where
        F: Fn(usize, usize) -> char,
    {
        write!(f, "  ")?;
        for col in 0..GRID {
            write!(f, " {}", col)?;
        }
        for row in 0..GRID {
            writeln!(f)?;
            write!(f, "{:2}", row)?;
            for col in 0..GRID {
                write!(f, " {}", symbol(row, col))?;
            }
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, |row, col| self.display_symbol(row, col))
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("shots_fired", &self.shots_fired)
            .field("hit_count", &self.hit_count)
            .field("ships_sunk", &self.ships_sunk)
            .field("fleet", &self.ships().collect::<Vec<_>>())
            .finish()
    }
}

/// Board view with untouched ship cells drawn as `#`.
pub struct Revealed<'a>(&'a Board);

impl fmt::Display for Revealed<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        board.write_grid(f, |row, col| {
            if board.is_occupied(row, col) && !board.is_shot_at(row, col) {
                '#'
            } else {
                board.display_symbol(row, col)
            }
        })
    }
}
