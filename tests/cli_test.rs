#![cfg(feature = "std")]

use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{cli, Board, NUM_SHIPS};

fn play(script: &str, seed: u64) -> (Vec<seabattle::Stats>, String) {
    let mut out = Vec::new();
    let stats = cli::run(Cursor::new(script.to_owned()), &mut out, SmallRng::seed_from_u64(seed))
        .unwrap();
    (stats, String::from_utf8(out).unwrap())
}

#[test]
fn test_cli_rejects_bad_input_and_reshots() {
    let (stats, out) = play("h\n5\n0,0\n0 0\nq\n", 17);

    assert!(out.starts_with("Welcome to a Battleship game!"));
    assert!(out.contains("Incorrect coordinates"));
    assert!(out.contains("You have already shot at this coordinate (0, 0)!"));
    assert!(out.contains("Game over!"));
    assert!(out.contains("The fleet was:"));
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].shots_fired, 1);
}

#[test]
fn test_cli_end_of_input_quits() {
    let (stats, out) = play("p\n", 17);
    assert!(out.contains("   0 1 2 3 4 5 6 7 8 9"));
    assert!(out.contains("Game over!"));
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].shots_fired, 0);
}

#[test]
fn test_cli_full_game_then_replay() {
    let seed = 42;
    // the session builds its first board from the same seed
    let board = Board::with_fleet(&mut SmallRng::seed_from_u64(seed)).unwrap();
    let mut script = String::new();
    for ship in board.ships() {
        for (r, c) in ship.cells() {
            script.push_str(&format!("{},{}\n", r, c));
        }
    }
    script.push_str("y\nq\n");

    let (stats, out) = play(&script, seed);
    assert!(out.contains("You just sunk a battleship!"));
    assert!(out.contains("Best possible score: 20"));
    assert!(out.contains("Wanna play again?"));
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].ships_sunk, NUM_SHIPS);
    assert_eq!(stats[0].shots_fired, 20);
    assert_eq!(stats[1].shots_fired, 0);
}

#[test]
fn test_cli_declining_replay_stops() {
    let seed = 42;
    let board = Board::with_fleet(&mut SmallRng::seed_from_u64(seed)).unwrap();
    let mut script: String = board
        .ships()
        .flat_map(|s| s.cells())
        .map(|(r, c)| format!("{} {}\n", r, c))
        .collect();
    script.push_str("n\n0,0\n");

    let (stats, out) = play(&script, seed);
    assert_eq!(stats.len(), 1);
    assert!(!out.contains("The fleet was:"));
}

#[test]
fn test_cli_prints_stats_after_each_shot() {
    let (_, out) = play("9,9\n", 17);
    let before_quit = out.split("Game over!").next().unwrap();
    assert!(before_quit.contains("Shots fired: 1"));
    assert!(before_quit.contains("Whole ships:"));
}

#[test]
fn test_cli_replay_repeats_the_rules() {
    let seed = 42;
    let board = Board::with_fleet(&mut SmallRng::seed_from_u64(seed)).unwrap();
    let mut script: String = board
        .ships()
        .flat_map(|s| s.cells())
        .map(|(r, c)| format!("{},{}\n", r, c))
        .collect();
    script.push_str("y\nq\n");

    let (_, out) = play(&script, seed);
    assert_eq!(out.matches("Welcome to a Battleship game!").count(), 2);
    assert_eq!(out.matches("Game rules:").count(), 2);
}
