use tictactoe::{Board, BoardError, Cell, Mark, Outcome, BOARD_CELLS, WINNING_LINES};

fn board_from(layout: &str) -> Board {
    let mut cells = [Cell::Empty; BOARD_CELLS];
    for (i, ch) in layout.chars().filter(|c| !c.is_whitespace()).enumerate() {
        cells[i] = match ch {
            'X' => Cell::Taken(Mark::X),
            'O' => Cell::Taken(Mark::O),
            _ => Cell::Empty,
        };
    }
    Board::from_cells(cells)
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for mark in [Mark::X, Mark::O] {
        for line in WINNING_LINES {
            let mut board = Board::new();
            for index in line {
                board.place(index, mark).unwrap();
            }
            assert_eq!(board.outcome(), Outcome::Winner(mark), "line {:?}", line);
        }
    }
}

#[test]
fn test_full_board_without_line_is_tie() {
    let board = board_from("XOX XOO OXX");
    assert!(board.is_full());
    assert_eq!(board.outcome(), Outcome::Tie);
}

#[test]
fn test_full_board_with_line_is_win_not_tie() {
    let board = board_from("XXX OOX XOO");
    assert_eq!(board.outcome(), Outcome::Winner(Mark::X));
}

#[test]
fn test_partial_board_in_progress() {
    assert_eq!(Board::new().outcome(), Outcome::InProgress);
    assert_eq!(board_from("XX. .O. ...").outcome(), Outcome::InProgress);
}

#[test]
fn test_first_line_in_scan_order_decides() {
    // Impossible in play, but the scan must still be deterministic.
    let board = board_from("OOO XXX ...");
    assert_eq!(board.outcome(), Outcome::Winner(Mark::O));
}

#[test]
fn test_place_rejects_occupied_and_out_of_range() {
    let mut board = Board::new();
    board.place(4, Mark::X).unwrap();
    assert_eq!(board.place(4, Mark::O).unwrap_err(), BoardError::CellOccupied);
    assert_eq!(board.get(4), Some(Cell::Taken(Mark::X)));
    assert_eq!(board.place(9, Mark::O).unwrap_err(), BoardError::InvalidIndex);
    assert_eq!(board.get(9), None);
}

#[test]
fn test_clear_and_empty_cells() {
    let mut board = board_from("X.O .X. ..O");
    assert_eq!(board.empty_cells().collect::<Vec<_>>(), vec![1, 3, 5, 6, 7]);
    board.clear(0).unwrap();
    assert!(board.is_empty_at(0));
    assert_eq!(board.count(Mark::X), 1);
    assert_eq!(board.count(Mark::O), 2);
    assert_eq!(board.clear(12).unwrap_err(), BoardError::InvalidIndex);
}

#[test]
fn test_display_numbers_empty_cells() {
    let board = board_from("X.O .X. ...");
    let rendered = board.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(lines[0], " X | 2 | O ");
    assert_eq!(lines[1], "---+---+---");
    assert_eq!(lines[2], " 4 | X | 6 ");
    assert_eq!(lines[4], " 7 | 8 | 9 ");
    assert_eq!(lines.len(), 5);
}
