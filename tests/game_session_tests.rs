use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{GameError, GameSession, GameStatus, ShotOutcome, BOARD_SIZE, NUM_SHIPS};

const N: usize = BOARD_SIZE as usize;

fn session(seed: u64) -> GameSession<SmallRng> {
    GameSession::new(SmallRng::seed_from_u64(seed)).unwrap()
}

fn ship_cells(session: &GameSession<SmallRng>) -> Vec<(usize, usize)> {
    session.board().ships().flat_map(|s| s.cells()).collect()
}

#[test]
fn test_new_session_places_full_fleet() {
    let s = session(5);
    assert_eq!(s.board().ships().count(), NUM_SHIPS);
    assert_eq!(s.status(), GameStatus::InProgress);
    assert_eq!(s.games_started(), 1);
    assert!(s.shots().is_empty());
    assert_eq!(s.stats().ships_untouched, NUM_SHIPS);
}

#[test]
fn test_reshot_is_rejected_before_the_board() {
    let mut s = session(11);
    s.fire(3, 4).unwrap();
    assert_eq!(s.fire(3, 4), Err(GameError::AlreadyShot { row: 3, col: 4 }));
    assert_eq!(s.stats().shots_fired, 1);
    assert_eq!(s.shots().count_ones(), 1);
    assert!(s.shots().get(3, 4).unwrap());
}

#[test]
fn test_off_board_shot_is_rejected() {
    let mut s = session(11);
    assert_eq!(s.fire(N, 0), Err(GameError::OutOfBounds { row: N, col: 0 }));
    assert_eq!(s.fire(0, 42), Err(GameError::OutOfBounds { row: 0, col: 42 }));
    assert_eq!(s.stats().shots_fired, 0);
}

#[test]
fn test_play_until_won() {
    let mut s = session(99);
    let cells = ship_cells(&s);
    let mut sunk = 0;
    for (r, c) in cells {
        match s.fire(r, c).unwrap() {
            ShotOutcome::Sunk(_) => sunk += 1,
            ShotOutcome::Hit => {}
            other => panic!("unexpected outcome {:?} at ({}, {})", other, r, c),
        }
    }
    assert_eq!(sunk, NUM_SHIPS);
    assert_eq!(s.status(), GameStatus::Won);
    assert!(s.is_game_over());
    assert_eq!(s.fire(0, 0), Err(GameError::GameOver));

    let stats = s.stats();
    assert_eq!(stats.shots_fired, 20);
    assert_eq!(stats.hit_count, 20);
    assert_eq!(stats.ships_sunk, NUM_SHIPS);
}

#[test]
fn test_restart_starts_a_fresh_game() {
    let mut s = session(3);
    let first = ship_cells(&s);
    for &(r, c) in &first[..3] {
        s.fire(r, c).unwrap();
    }
    assert_eq!(s.stats().hit_count, 3);

    s.restart().unwrap();
    assert_eq!(s.games_started(), 2);
    assert!(s.shots().is_empty());
    assert_eq!(s.stats().shots_fired, 0);
    assert_eq!(s.stats().ships_untouched, NUM_SHIPS);
    assert_eq!(s.status(), GameStatus::InProgress);
    // previously fired coordinates are open again
    let (r, c) = first[0];
    assert!(s.fire(r, c).is_ok());
}

#[test]
fn test_same_seed_same_session() {
    let a = session(1234);
    let b = session(1234);
    assert_eq!(ship_cells(&a), ship_cells(&b));
}
