//! Ship kinds and a single ship placed on the board, with hits tracked per
//! segment from the bow outward.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::board::{Board, ShipId};
use crate::config::BOARD_SIZE;

const GRID: usize = BOARD_SIZE as usize;

/// Kind of ship: fixes its length and label.
///
/// `EmptySea` stands for a single cell of open water so every grid cell can
/// hold a ship. It can never be sunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum ShipKind {
    Battleship,
    Cruiser,
    Destroyer,
    Submarine,
    EmptySea,
}

impl ShipKind {
    /// Number of cells the ship occupies.
    pub const fn length(self) -> usize {
        match self {
            ShipKind::Battleship => 4,
            ShipKind::Cruiser => 3,
            ShipKind::Destroyer => 2,
            ShipKind::Submarine | ShipKind::EmptySea => 1,
        }
    }

    /// Lowercase label used in hit and end-of-game messages.
    pub const fn label(self) -> &'static str {
        match self {
            ShipKind::Battleship => "battleship",
            ShipKind::Cruiser => "cruiser",
            ShipKind::Destroyer => "destroyer",
            ShipKind::Submarine => "submarine",
            ShipKind::EmptySea => "empty sea",
        }
    }

    pub const fn is_empty_sea(self) -> bool {
        matches!(self, ShipKind::EmptySea)
    }
}

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Cell of segment `i` for a ship whose bow sits at (`row`, `col`).
    fn segment_cell(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        }
    }
}

/// A ship of a given kind. Created unplaced; [`Ship::place`] fixes its bow
/// and orientation and moves it onto a board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    kind: ShipKind,
    position: Option<(usize, usize, Orientation)>,
    hits: Vec<bool>,
}

impl Ship {
    /// New unplaced ship with no segment hit.
    pub fn new(kind: ShipKind) -> Self {
        Ship {
            kind,
            position: None,
            hits: vec![false; kind.length()],
        }
    }

    pub(crate) fn empty_sea() -> Self {
        Self::new(ShipKind::EmptySea)
    }

    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    pub fn length(&self) -> usize {
        self.kind.length()
    }

    /// Label of the ship's kind, e.g. `"destroyer"`.
    pub fn ship_kind_label(&self) -> &'static str {
        self.kind.label()
    }

    /// Bow row, bow column and orientation once placed.
    pub fn position(&self) -> Option<(usize, usize, Orientation)> {
        self.position
    }

    /// Bow cell once placed.
    pub fn bow(&self) -> Option<(usize, usize)> {
        self.position.map(|(r, c, _)| (r, c))
    }

    /// Per-segment hit mask, indexed from the bow.
    pub fn hits(&self) -> &[bool] {
        &self.hits
    }

    /// Cells covered by the ship, bow first. Empty while unplaced.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let len = if self.position.is_some() { self.length() } else { 0 };
        (0..len).filter_map(move |i| {
            self.position
                .map(|(row, col, orientation)| orientation.segment_cell(row, col, i))
        })
    }

    /// Whether a ship of this kind fits with its bow at (`row`, `col`) and
    /// no real ship sits in its footprint or in the one-cell ring around it,
    /// diagonals included. Does not touch the board.
    pub fn is_placement_valid(
        &self,
        row: usize,
        col: usize,
        orientation: Orientation,
        board: &Board,
    ) -> bool {
        let (end_row, end_col) = orientation.segment_cell(row, col, self.length() - 1);
        if end_row >= GRID || end_col >= GRID {
            return false;
        }

        let first_row = row.saturating_sub(1);
        let last_row = (end_row + 1).min(GRID - 1);
        let first_col = col.saturating_sub(1);
        let last_col = (end_col + 1).min(GRID - 1);
        for r in first_row..=last_row {
            for c in first_col..=last_col {
                if board.is_occupied(r, c) {
                    return false;
                }
            }
        }
        true
    }

    /// Fix the ship's bow and orientation and register it in every cell of
    /// its footprint. The caller must have checked
    /// [`Ship::is_placement_valid`]; whatever the footprint covers is
    /// overwritten.
    pub fn place(
        mut self,
        row: usize,
        col: usize,
        orientation: Orientation,
        board: &mut Board,
    ) -> ShipId {
        self.position = Some((row, col, orientation));
        let cells: Vec<(usize, usize)> = self.cells().collect();
        let id = board.adopt(self);
        for (r, c) in cells {
            board.occupy(r, c, id);
        }
        id
    }

    /// Segment index of (`row`, `col`) if it lies in the footprint.
    fn segment(&self, row: usize, col: usize) -> Option<usize> {
        let (bow_row, bow_col, orientation) = self.position?;
        let offset = match orientation {
            Orientation::Horizontal if row == bow_row && col >= bow_col => col - bow_col,
            Orientation::Vertical if col == bow_col && row >= bow_row => row - bow_row,
            _ => return None,
        };
        (offset < self.length()).then_some(offset)
    }

    /// Whether the footprint cell (`row`, `col`) was fired upon. Cells
    /// outside the footprint report `false`.
    pub fn is_shot_at(&self, row: usize, col: usize) -> bool {
        self.segment(row, col).map_or(false, |i| self.hits[i])
    }

    /// Apply a shot at (`row`, `col`).
    ///
    /// Returns `true` if the shot struck a segment of a ship still afloat.
    /// Sunk ships and cells outside the footprint are left untouched. Open
    /// water always records the shot and returns `false`.
    pub fn register_shot(&mut self, row: usize, col: usize) -> bool {
        if self.kind.is_empty_sea() {
            self.hits[0] = true;
            return false;
        }
        if self.is_sunk() {
            return false;
        }
        match self.segment(row, col) {
            Some(i) => {
                self.hits[i] = true;
                true
            }
            None => false,
        }
    }

    /// Every segment hit. Always `false` for open water.
    pub fn is_sunk(&self) -> bool {
        !self.kind.is_empty_sea() && self.hits.iter().all(|&hit| hit)
    }

    /// At least one segment hit but still afloat.
    pub fn is_damaged(&self) -> bool {
        !self.kind.is_empty_sea() && !self.is_sunk() && self.hits.iter().any(|&hit| hit)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ kind: \"{}\", position: {:?}, hits: {}/{} }}",
            self.kind.label(),
            self.position,
            self.hits.iter().filter(|&&hit| hit).count(),
            self.length(),
        )
    }
}
