use crate::common::{Mark, Outcome};

/// Session tallies of finished games. Only `reset` lowers a counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished game. `InProgress` is ignored.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Tie => self.ties += 1,
            Outcome::InProgress => {}
        }
    }

    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.ties
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
