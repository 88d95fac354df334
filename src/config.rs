use crate::ship::ShipKind;

pub const BOARD_SIZE: u8 = 10;
pub const NUM_SHIPS: usize = 10;

/// Fleet in placement order: largest ships first so the random placer
/// settles them while the board is still mostly open water.
pub const FLEET: [ShipKind; NUM_SHIPS] = [
    ShipKind::Battleship,
    ShipKind::Cruiser,
    ShipKind::Cruiser,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Destroyer,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
    ShipKind::Submarine,
];

/// Total number of ship segments in the standard fleet.
pub const TOTAL_SHIP_CELLS: usize = 4 + 3 + 3 + 2 + 2 + 2 + 1 + 1 + 1 + 1;

/// Random samples tried for a single ship before placement gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;

/// Fresh boards a session builds before reporting that no game could start.
pub const MAX_BOARD_REBUILDS: usize = 8;
