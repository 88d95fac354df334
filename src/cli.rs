#![cfg(feature = "std")]

//! Text-mode driver: reads commands line by line, fires at the board and
//! prints outcomes, the board and the running stats.

use std::io::{BufRead, Write};

use rand::Rng;

use crate::{
    board::Stats,
    common::GameError,
    config::TOTAL_SHIP_CELLS,
    game::GameSession,
    input::{parse_command, Command},
};

const HELP: &str = "
Game rules:
You try to hit the ships, by calling out a row and column number.
The game responds with information: \"hit\" or \"miss\".
If a ship is hit and sinks, you will see a message \"You just sunk a {ship type}!\"
A ship is \"sunk\" when every square of the ship has been hit.
It takes:
\tfour hits to sink a battleship
\tthree to sink a cruiser
\ttwo for a destroyer
\tone for a submarine

Input format:
{row, col} to shoot, both 0..9
'p' to print the board
'q' to quit
'h' to get help";

/// Play games read from `input` until the player quits or declines a new
/// game. Returns the final stats of every game played.
pub fn run<B, W, R>(mut input: B, mut out: W, rng: R) -> anyhow::Result<Vec<Stats>>
where
    B: BufRead,
    W: Write,
    R: Rng,
{
    writeln!(out, "Welcome to a Battleship game!")?;
    writeln!(out, "{}", HELP)?;

    let mut session = GameSession::new(rng)?;
    let mut finished = Vec::new();
    let mut line = String::new();

    loop {
        write!(out, "\nEnter coordinates: ")?;
        out.flush()?;
        if !read_line(&mut input, &mut line)? {
            writeln!(out)?;
            finished.push(quit(&mut out, &session)?);
            break;
        }

        let (row, col) = match parse_command(&line) {
            Ok(Command::Shoot { row, col }) => (row, col),
            Ok(Command::Help) => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Ok(Command::Print) => {
                writeln!(out, "{}", session.board())?;
                continue;
            }
            Ok(Command::Quit) => {
                finished.push(quit(&mut out, &session)?);
                break;
            }
            Err(e) => {
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        match session.fire(row, col) {
            Ok(outcome) => {
                writeln!(out, "\n\t{}\n", outcome)?;
                writeln!(out, "{}", session.board())?;
                writeln!(out, "\n{}", session.stats())?;
            }
            Err(e @ GameError::AlreadyShot { .. }) => {
                writeln!(out, "{}", e)?;
                continue;
            }
            Err(e) => return Err(e.into()),
        }

        if session.is_game_over() {
            let stats = session.stats();
            writeln!(out, "\n{}\nBest possible score: {}", stats, TOTAL_SHIP_CELLS)?;
            writeln!(out, "Game over! Wanna play again?")?;
            writeln!(out, "Print 'y' to start a new game or any other key to exit.")?;
            finished.push(stats);
            out.flush()?;
            if read_line(&mut input, &mut line)? && line.trim() == "y" {
                session.restart()?;
                writeln!(out, "\nWelcome to a Battleship game!")?;
                writeln!(out, "{}", HELP)?;
            } else {
                break;
            }
        }
    }
    log::info!(
        "session over after {} game(s), {} finished",
        session.games_started(),
        finished.len()
    );
    Ok(finished)
}

fn quit<W: Write, R: Rng>(out: &mut W, session: &GameSession<R>) -> anyhow::Result<Stats> {
    let stats = session.stats();
    writeln!(out, "Game over!\n{}", stats)?;
    writeln!(out, "\nThe fleet was:\n{}", session.board().revealed())?;
    Ok(stats)
}

/// Read the next line into `buf`. Returns `false` at end of input.
fn read_line<B: BufRead>(input: &mut B, buf: &mut String) -> std::io::Result<bool> {
    buf.clear();
    Ok(input.read_line(buf)? != 0)
}
