//! Board builders shared by unit tests.

use crate::game::{Board, Piece, COLS, ROWS};

/// Piece at `(row, col)` in a full board with no line of four: columns 0-2 and
/// 4-6 alternate human/AI bottom-up, column 3 starts with AI.
pub fn drawn_piece(row: usize, col: usize) -> Piece {
    let human = (row % 2 == 0) != (col == 3);
    if human {
        Piece::Human
    } else {
        Piece::Ai
    }
}

/// The drawn board with the listed cells (and everything above them) left empty.
pub fn drawn_board_except(open: &[(usize, usize)]) -> Board {
    let mut board = Board::new();
    for col in 0..COLS {
        let top = open
            .iter()
            .filter(|&&(_, c)| c == col)
            .map(|&(r, _)| r)
            .min()
            .unwrap_or(ROWS);
        for row in 0..top {
            board.place(row, col, drawn_piece(row, col)).unwrap();
        }
    }
    board
}

/// A board reached by alternating drops starting with `first`.
pub fn board_from_moves(first: Piece, cols: &[usize]) -> Board {
    let mut board = Board::new();
    let mut piece = first;
    for &col in cols {
        board.drop_piece(col, piece).unwrap();
        piece = piece.other();
    }
    board
}
