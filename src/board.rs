//! Game board: nine cells in row-major order and the win/tie evaluation.

use crate::common::{BoardError, Cell, Mark, Outcome};
use crate::config::{BOARD_CELLS, WINNING_LINES};
use core::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    cells: [Cell; BOARD_CELLS],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; BOARD_CELLS],
        }
    }

    /// Build a board from explicit cell contents.
    pub fn from_cells(cells: [Cell; BOARD_CELLS]) -> Self {
        Board { cells }
    }

    /// Immutable view of all cells.
    pub fn cells(&self) -> &[Cell; BOARD_CELLS] {
        &self.cells
    }

    /// Cell at `index`, or `None` when the index is out of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Put `mark` on an empty cell.
    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), BoardError> {
        let cell = self.cells.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        if !cell.is_empty() {
            return Err(BoardError::CellOccupied);
        }
        *cell = Cell::Taken(mark);
        Ok(())
    }

    /// Empty the cell at `index`, whatever it held.
    pub fn clear(&mut self, index: usize) -> Result<(), BoardError> {
        let cell = self.cells.get_mut(index).ok_or(BoardError::InvalidIndex)?;
        *cell = Cell::Empty;
        Ok(())
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Indices of empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_empty())
            .map(|(i, _)| i)
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|c| c.mark() == Some(mark)).count()
    }

    /// Contents of the three cells of a line.
    pub fn line(&self, line: [usize; 3]) -> [Cell; 3] {
        let [a, b, c] = line;
        [self.cells[a], self.cells[b], self.cells[c]]
    }

    /// Scan the winning lines in declaration order; the first complete line
    /// decides the winner. A full board without one is a tie.
    pub fn outcome(&self) -> Outcome {
        for line in WINNING_LINES {
            if let [Cell::Taken(a), Cell::Taken(b), Cell::Taken(c)] = self.line(line) {
                if a == b && b == c {
                    return Outcome::Winner(a);
                }
            }
        }
        if self.is_full() {
            Outcome::Tie
        } else {
            Outcome::InProgress
        }
    }
}

/// Renders the grid with 1-based numbers in empty cells:
///
/// ```text
///  X | 2 | O
/// ---+---+---
///  4 | X | 6
/// ---+---+---
///  7 | 8 | 9
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            let base = row * 3;
            for col in 0..3 {
                let index = base + col;
                let ch = match self.cells[index] {
                    Cell::Taken(m) => m.as_char(),
                    Cell::Empty => (b'1' + index as u8) as char,
                };
                if col > 0 {
                    write!(f, "|")?;
                }
                write!(f, " {} ", ch)?;
            }
            writeln!(f)?;
            if row < 2 {
                writeln!(f, "---+---+---")?;
            }
        }
        Ok(())
    }
}
