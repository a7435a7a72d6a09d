use crate::common::Mark;

pub const BOARD_CELLS: usize = 9;
pub const NUM_LINES: usize = 8;

/// Rows, columns, then the two diagonals. Scan order matters: the first
/// matching line decides both the winner and the heuristic's move.
pub const WINNING_LINES: [[usize; 3]; NUM_LINES] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Mark played by the human. Always moves first.
pub const HUMAN: Mark = Mark::X;
/// Mark played by the engine's heuristic opponent.
pub const COMPUTER: Mark = Mark::O;

pub const RULES: &str = "\
Rules of Tic-Tac-Toe
  1. You play X and always move first; the computer plays O.
  2. Players take turns marking one empty cell of the 3x3 grid.
  3. The first player with three marks in a row, column or diagonal wins.
  4. If all nine cells are filled and nobody has three in a row, it's a tie.
  5. Undo takes back your last move together with the computer's reply.
  6. Restart clears the board but keeps the score.";
