use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::Piece;
use crate::error::BoardError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Number of pieces in a row needed to win.
pub const WINDOW: usize = 4;
pub const CENTER_COL: usize = COLS / 2;

/// Contents of a single board cell. Serialized as 0 (empty), 1 (human), 2 (AI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Cell {
    Empty,
    Human,
    Ai,
}

impl Cell {
    /// The piece occupying this cell, if any.
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Piece::Human),
            Cell::Ai => Some(Piece::Ai),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> u8 {
        match cell {
            Cell::Empty => 0,
            Cell::Human => 1,
            Cell::Ai => 2,
        }
    }
}

impl TryFrom<u8> for Cell {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Cell::Empty),
            1 => Ok(Cell::Human),
            2 => Ok(Cell::Ai),
            other => Err(format!("invalid cell value {other}")),
        }
    }
}

/// The four line orientations a window can run along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Increasing row and column (/).
    DiagonalUp,
    /// Increasing column, decreasing row (\).
    DiagonalDown,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalUp,
        Direction::DiagonalDown,
    ];

    /// Row and column ranges of every valid window start.
    fn starts(self) -> (Range<usize>, Range<usize>) {
        let last_row = ROWS - WINDOW + 1;
        let last_col = COLS - WINDOW + 1;
        match self {
            Direction::Horizontal => (0..ROWS, 0..last_col),
            Direction::Vertical => (0..last_row, 0..COLS),
            Direction::DiagonalUp => (0..last_row, 0..last_col),
            Direction::DiagonalDown => (WINDOW - 1..ROWS, 0..last_col),
        }
    }

    fn offset(self, row: usize, col: usize, i: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + i),
            Direction::Vertical => (row + i, col),
            Direction::DiagonalUp => (row + i, col + i),
            Direction::DiagonalDown => (row - i, col + i),
        }
    }
}

/// A 6x7 Connect Four grid. Row 0 is the bottom row.
///
/// Columns always fill bottom-up: no empty cell sits below an occupied one.
/// The board is `Copy`, so search branches each own an independent snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    ///
    /// # Panics
    /// If `row` or `col` is out of range.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The full grid, bottom row first.
    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// An independent snapshot of this board.
    pub fn copy(&self) -> Board {
        *self
    }

    /// True iff the top cell of `col` is empty.
    pub fn is_valid_column(&self, col: usize) -> Result<bool, BoardError> {
        check_column(col)?;
        Ok(self.cells[ROWS - 1][col] == Cell::Empty)
    }

    /// Lowest empty row in `col`, or `None` if the column is full.
    pub fn next_open_row(&self, col: usize) -> Result<Option<usize>, BoardError> {
        check_column(col)?;
        Ok((0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty))
    }

    /// Write `piece` into a single empty, supported cell.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) -> Result<(), BoardError> {
        if row >= ROWS || col >= COLS {
            return Err(BoardError::OutOfRange { row, col });
        }
        if self.cells[row][col] != Cell::Empty {
            return Err(BoardError::Occupied { row, col });
        }
        if row > 0 && self.cells[row - 1][col] == Cell::Empty {
            return Err(BoardError::Unsupported { row, col });
        }
        self.cells[row][col] = piece.to_cell();
        Ok(())
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, piece: Piece) -> Result<usize, BoardError> {
        let row = self
            .next_open_row(col)?
            .ok_or(BoardError::ColumnFull(col))?;
        self.place(row, col, piece)?;
        Ok(row)
    }

    /// A copy of this board with `piece` dropped into `col`, or `None` if the
    /// column cannot take it.
    pub fn with_piece(&self, col: usize, piece: Piece) -> Option<Board> {
        let mut next = *self;
        next.drop_piece(col, piece).ok()?;
        Some(next)
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS)
            .filter(|&col| self.cells[ROWS - 1][col] == Cell::Empty)
            .collect()
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells[ROWS - 1].iter().all(|&cell| cell != Cell::Empty)
    }

    /// True iff `piece` has four in a row anywhere on the board.
    pub fn winning_move(&self, piece: Piece) -> bool {
        let target = piece.to_cell();
        self.windows()
            .any(|window| window.iter().all(|&cell| cell == target))
    }

    /// True iff either side has won or no column can take a piece.
    pub fn is_terminal(&self) -> bool {
        self.winning_move(Piece::Human) || self.winning_move(Piece::Ai) || self.is_full()
    }

    /// Every length-4 window on the board, across all four orientations.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        Direction::ALL
            .into_iter()
            .flat_map(move |dir| self.windows_along(dir))
    }

    /// Every length-4 window running in one orientation.
    pub fn windows_along(&self, dir: Direction) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        let (rows, cols) = dir.starts();
        rows.flat_map(move |row| cols.clone().map(move |col| (row, col)))
            .map(move |(row, col)| {
                std::array::from_fn::<Cell, WINDOW, _>(|i| {
                    let (r, c) = dir.offset(row, col, i);
                    self.cells[r][c]
                })
            })
    }
}

fn check_column(col: usize) -> Result<(), BoardError> {
    if col < COLS {
        Ok(())
    } else {
        Err(BoardError::InvalidColumn(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain console rendering, top row first, with 1-based column labels.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter().rev() {
            write!(f, "|")?;
            for cell in row {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::Human => Piece::Human.symbol(),
                    Cell::Ai => Piece::Ai.symbol(),
                };
                write!(f, " {symbol}")?;
            }
            writeln!(f, " |")?;
        }
        write!(f, " ")?;
        for col in 0..COLS {
            write!(f, " {}", col + 1)?;
        }
        writeln!(f)
    }
}
