#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
pub mod input;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod cli;
mod ship;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use input::{parse_command, parse_coordinates, Command};
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use ship::*;
