use crate::game::{Board, Cell, Piece, CENTER_COL, ROWS, WINDOW};

const FOUR: i64 = 10_000;
const OPEN_THREE: i64 = 100;
const OPEN_TWO: i64 = 10;
const OPPONENT_OPEN_THREE: i64 = -80;
const CENTER_BONUS: i64 = 3;

/// Score one window of four cells from `piece`'s point of view.
///
/// Only the first matching pattern counts; anything else scores zero.
pub fn score_window(window: &[Cell; WINDOW], piece: Piece) -> i64 {
    let own_cell = piece.to_cell();
    let opp_cell = piece.other().to_cell();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    if own == 4 {
        FOUR
    } else if own == 3 && empty == 1 {
        OPEN_THREE
    } else if own == 2 && empty == 2 {
        OPEN_TWO
    } else if opp == 3 && empty == 1 {
        OPPONENT_OPEN_THREE
    } else {
        0
    }
}

/// Heuristic value of the whole board for `piece`: a center column bonus plus
/// every horizontal, vertical and diagonal window.
pub fn score_position(board: &Board, piece: Piece) -> i64 {
    let own_cell = piece.to_cell();

    let center = (0..ROWS)
        .filter(|&row| board.get(row, CENTER_COL) == own_cell)
        .count() as i64;

    let windows: i64 = board
        .windows()
        .map(|window| score_window(&window, piece))
        .sum();

    center * CENTER_BONUS + windows
}
