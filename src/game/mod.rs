//! Core Connect Four game logic: board representation, pieces, the game
//! session with move history, and JSON export of finished games.

mod board;
mod export;
mod piece;
mod session;

pub use board::{Board, Cell, Direction, CENTER_COL, COLS, ROWS, WINDOW};
pub use export::GameRecord;
pub use piece::Piece;
pub use session::{Game, GameOutcome, Move};
