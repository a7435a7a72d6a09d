//! Common types for Tic-Tac-Toe: marks, cells, game outcomes and board errors.

/// One of the two players' symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl core::fmt::Display for Mark {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Taken(Mark),
}

impl Cell {
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Taken(m) => Some(m),
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        Cell::Taken(mark)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A line is complete, carrying the mark that completed it.
    Winner(Mark),
    /// Every cell is occupied and no line is complete.
    Tie,
    /// The game continues.
    InProgress,
}

impl Outcome {
    pub fn is_over(self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// Announcement shown to the player once the game has ended.
    pub fn message(self) -> Option<&'static str> {
        match self {
            Outcome::Winner(Mark::X) => Some("X won!"),
            Outcome::Winner(Mark::O) => Some("O won!"),
            Outcome::Tie => Some("It's a tie!"),
            Outcome::InProgress => None,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Cell index is outside 0..9.
    InvalidIndex,
    /// Cell already holds a mark.
    CellOccupied,
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidIndex => write!(f, "Cell index is out of range"),
            BoardError::CellOccupied => write!(f, "Cell is already occupied"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
