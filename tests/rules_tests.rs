// Tests for the pure board rules

use tictty::game::{column_of, row_of, Board, Mark, LINES};

#[test]
fn test_empty_board_has_no_winner() {
    let board = Board::new();
    assert_eq!(board.winner(), None);
    assert_eq!(board.filled(), 0);
    assert!(!board.is_full());
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for line in LINES {
        for mark in [Mark::X, Mark::O] {
            let mut board = Board::new();
            for cell in line {
                board = board.with_mark(cell, mark);
            }
            let win = board.winner().expect("complete line should win");
            assert_eq!(win.mark, mark);
            assert_eq!(win.line, line);
        }
    }
}

#[test]
fn test_mixed_line_does_not_win() {
    let board = Board::new()
        .with_mark(0, Mark::X)
        .with_mark(1, Mark::O)
        .with_mark(2, Mark::X);
    assert_eq!(board.winner(), None);
}

#[test]
fn test_first_line_in_fixed_order_wins() {
    // Both the top row (X) and the middle row (O) are complete; the top row
    // comes first in the scan order.
    let mut board = Board::new();
    for cell in [0, 1, 2] {
        board = board.with_mark(cell, Mark::X);
    }
    for cell in [3, 4, 5] {
        board = board.with_mark(cell, Mark::O);
    }
    let win = board.winner().expect("two complete lines");
    assert_eq!(win.mark, Mark::X);
    assert_eq!(win.line, [0, 1, 2]);
}

#[test]
fn test_full_board_without_line_has_no_winner() {
    // X O X
    // X O O
    // O X X
    let x_cells = [0, 2, 3, 7, 8];
    let o_cells = [1, 4, 5, 6];
    let mut board = Board::new();
    for cell in x_cells {
        board = board.with_mark(cell, Mark::X);
    }
    for cell in o_cells {
        board = board.with_mark(cell, Mark::O);
    }
    assert!(board.is_full());
    assert_eq!(board.winner(), None);
}

#[test]
fn test_with_mark_leaves_original_untouched() {
    let board = Board::new();
    let marked = board.with_mark(4, Mark::X);
    assert_eq!(board.get(4), None);
    assert_eq!(marked.get(4), Some(Mark::X));
    assert_eq!(marked.filled(), 1);
}

#[test]
fn test_cell_coordinates_are_one_based_row_major() {
    assert_eq!((column_of(0), row_of(0)), (1, 1));
    assert_eq!((column_of(2), row_of(2)), (3, 1));
    assert_eq!((column_of(3), row_of(3)), (1, 2));
    assert_eq!((column_of(5), row_of(5)), (3, 2));
    assert_eq!((column_of(8), row_of(8)), (3, 3));
}

#[test]
fn test_mark_other_toggles() {
    assert_eq!(Mark::X.other(), Mark::O);
    assert_eq!(Mark::O.other(), Mark::X);
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "O");
}
