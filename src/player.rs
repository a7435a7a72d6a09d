use crate::{ai, board::Board, common::Mark};
use rand::rngs::SmallRng;

/// Interface implemented by automated players driving one side of a game.
pub trait Player {
    /// Choose a cell for `mark` on `board`. `None` when the board is full.
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize>;

    fn name(&self) -> &'static str;
}

/// Plays the same win > block > random heuristic the engine uses for O.
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for AiPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, mark: Mark) -> Option<usize> {
        ai::select_move(board, mark, mark.opponent(), rng)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Plays any empty cell with equal probability.
pub struct RandomPlayer;

impl RandomPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn select_move(&mut self, rng: &mut SmallRng, board: &Board, _mark: Mark) -> Option<usize> {
        ai::random_move(board, rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
