use alloc::vec::Vec;

use crate::{
    ai,
    board::Board,
    common::{Mark, Outcome},
    config::{COMPUTER, HUMAN},
    scoreboard::Scoreboard,
};
use rand::{rngs::SmallRng, SeedableRng};

/// Which step of the turn protocol the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    GameOver,
}

/// What happened during one accepted click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn {
    /// Cell the human played.
    pub human: usize,
    /// Cell the computer answered with, if the game was still running.
    pub computer: Option<usize>,
    /// Board evaluation after both plies.
    pub outcome: Outcome,
}

/// Serializable snapshot of everything a front-end renders.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: Board,
    pub history: Vec<usize>,
    pub current_player: Mark,
    pub game_over: bool,
    pub outcome: Outcome,
    pub scoreboard: Scoreboard,
}

/// Core game logic: board, turn state, move history and session score.
pub struct GameEngine {
    board: Board,
    history: Vec<usize>,
    current_player: Mark,
    game_over: bool,
    outcome: Outcome,
    scoreboard: Scoreboard,
    rng: SmallRng,
}

impl GameEngine {
    /// Create an engine whose random moves are seeded from the thread RNG.
    #[cfg(feature = "std")]
    pub fn new() -> Self {
        let mut seed_rng = rand::rng();
        Self::from_rng(SmallRng::from_rng(&mut seed_rng))
    }

    /// Create an engine with reproducible random moves.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    pub fn from_rng(rng: SmallRng) -> Self {
        Self {
            board: Board::new(),
            history: Vec::with_capacity(crate::config::BOARD_CELLS),
            current_player: HUMAN,
            game_over: false,
            outcome: Outcome::InProgress,
            scoreboard: Scoreboard::new(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn current_player(&self) -> Mark {
        self.current_player
    }

    /// Cell indices in the order they were occupied.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Outcome of the finished game, or `InProgress` while it runs.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Win/tie announcement once the game is over.
    pub fn result_message(&self) -> Option<&'static str> {
        if self.game_over {
            self.outcome.message()
        } else {
            None
        }
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.current_player == HUMAN {
            Phase::HumanTurn
        } else {
            Phase::ComputerTurn
        }
    }

    /// Put `player` on `index` and record it in the history. Ignored when
    /// the game is over, the index is out of range or the cell is taken.
    pub fn place_move(&mut self, index: usize, player: Mark) -> &Board {
        if self.game_over {
            log::debug!("ignoring move at {}: game is over", index);
            return &self.board;
        }
        match self.board.place(index, player) {
            Ok(()) => {
                log::debug!("{} plays {}", player, index);
                self.history.push(index);
            }
            Err(e) => log::debug!("ignoring move at {}: {}", index, e),
        }
        &self.board
    }

    /// Evaluate the current board.
    pub fn evaluate(&self) -> Outcome {
        self.board.outcome()
    }

    /// Heuristic choice for `player` against `opponent` on the current board.
    /// `None` when no empty cell remains.
    pub fn select_computer_move(&mut self, player: Mark, opponent: Mark) -> Option<usize> {
        ai::select_move(&self.board, player, opponent, &mut self.rng)
    }

    /// Run one round of the turn protocol for a human click: place X, and
    /// unless that ended the game, answer immediately with the computer's
    /// move. Returns `None` when the click was ignored.
    pub fn handle_cell_click(&mut self, index: usize) -> Option<Turn> {
        if self.phase() != Phase::HumanTurn {
            log::debug!("ignoring click on {}: not the human's turn", index);
            return None;
        }
        if !self.board.is_empty_at(index) {
            log::debug!("ignoring click on {}: cell unavailable", index);
            return None;
        }
        self.place_move(index, HUMAN);
        let outcome = self.evaluate();
        if outcome.is_over() {
            self.finish(outcome);
            return Some(Turn {
                human: index,
                computer: None,
                outcome,
            });
        }
        self.current_player = COMPUTER;
        let computer = self.play_computer_turn();
        Some(Turn {
            human: index,
            computer,
            outcome: self.outcome,
        })
    }

    fn play_computer_turn(&mut self) -> Option<usize> {
        // The board cannot be full here: the human's move was evaluated first.
        let index = self.select_computer_move(COMPUTER, HUMAN)?;
        self.place_move(index, COMPUTER);
        let outcome = self.evaluate();
        if outcome.is_over() {
            self.finish(outcome);
        } else {
            self.current_player = HUMAN;
        }
        Some(index)
    }

    fn finish(&mut self, outcome: Outcome) {
        self.game_over = true;
        self.outcome = outcome;
        self.scoreboard.record(outcome);
        log::info!(
            "game over after {} moves: {:?} (X {} / O {} / ties {})",
            self.history.len(),
            outcome,
            self.scoreboard.x_wins,
            self.scoreboard.o_wins,
            self.scoreboard.ties
        );
    }

    /// Take back the computer's reply and the human move before it, handing
    /// the turn back to X. Ignored once the game is over or with no history.
    pub fn undo(&mut self) {
        if self.game_over {
            log::debug!("ignoring undo: game is over");
            return;
        }
        let Some(last) = self.history.pop() else {
            log::debug!("ignoring undo: no moves to take back");
            return;
        };
        let _ = self.board.clear(last);
        if let Some(prev) = self.history.pop() {
            let _ = self.board.clear(prev);
        }
        self.current_player = HUMAN;
        self.outcome = Outcome::InProgress;
        log::debug!("undo: {} moves remain", self.history.len());
    }

    /// Start a new game. The scoreboard is kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.current_player = HUMAN;
        self.game_over = false;
        self.outcome = Outcome::InProgress;
        log::debug!("restart");
    }

    /// Zero the session tallies.
    pub fn reset_scoreboard(&mut self) {
        self.scoreboard.reset();
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board,
            history: self.history.clone(),
            current_player: self.current_player,
            game_over: self.game_over,
            outcome: self.outcome,
            scoreboard: self.scoreboard,
        }
    }
}

#[cfg(feature = "std")]
impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
