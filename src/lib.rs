#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;
mod ai;
mod board;
mod common;
mod config;
mod game;
mod player;
mod scoreboard;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
mod player_cli;
pub mod prelude;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use scoreboard::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use player_cli::*;
