//! Commonly used types and utilities for ease of import.

pub use crate::{AiPlayer, Board, GameEngine, Mark, Outcome, Phase, Player, Scoreboard};

#[cfg(feature = "std")]
pub use crate::{parse_command, run_session, Command};
