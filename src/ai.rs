// One-ply move selection for the computer opponent.
// Uses no_std and avoids heap allocations.

use crate::{
    board::Board,
    common::{Cell, Mark},
    config::{BOARD_CELLS, WINNING_LINES},
};
use rand::Rng;

/// Find the first line, in declaration order, where `mark` holds two cells
/// and the third is empty. Returns the index of that empty cell.
pub fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    let own = Cell::Taken(mark);
    for line in WINNING_LINES {
        let [a, b, c] = board.line(line);
        if a == own && b == own && c.is_empty() {
            return Some(line[2]);
        }
        if a == own && c == own && b.is_empty() {
            return Some(line[1]);
        }
        if b == own && c == own && a.is_empty() {
            return Some(line[0]);
        }
    }
    None
}

/// Pick uniformly among the empty cells. `None` on a full board.
pub fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let mut empty = [0usize; BOARD_CELLS];
    let mut n = 0;
    for index in board.empty_cells() {
        empty[n] = index;
        n += 1;
    }
    if n == 0 {
        return None;
    }
    Some(empty[rng.random_range(0..n)])
}

/// Heuristic move for `player`: complete one of our lines if possible,
/// otherwise block one of `opponent`'s, otherwise play a random empty cell.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    player: Mark,
    opponent: Mark,
    rng: &mut R,
) -> Option<usize> {
    completing_move(board, player)
        .or_else(|| completing_move(board, opponent))
        .or_else(|| random_move(board, rng))
}
