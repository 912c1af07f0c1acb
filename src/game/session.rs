use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Board, Piece};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

/// One played move, kept for history and export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    #[serde(rename = "player")]
    pub piece: Piece,
    pub col: usize,
}

/// A game in progress: the authoritative board, whose turn it is, and the
/// moves played so far.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    board: Board,
    current: Piece,
    moves: Vec<Move>,
    outcome: Option<GameOutcome>,
}

impl Game {
    /// Start an empty game with `first` to move.
    pub fn new(first: Piece) -> Self {
        Game {
            board: Board::new(),
            current: first,
            moves: Vec::new(),
            outcome: None,
        }
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move next
    pub fn current_piece(&self) -> Piece {
        self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn winner(&self) -> Option<Piece> {
        match self.outcome {
            Some(GameOutcome::Winner(piece)) => Some(piece),
            _ => None,
        }
    }

    /// Drop the current side's piece into `col` and pass the turn.
    ///
    /// Returns the landing row. On error the game is unchanged.
    pub fn play(&mut self, col: usize) -> Result<usize, GameError> {
        if self.is_over() {
            return Err(GameError::GameOver);
        }

        let piece = self.current;
        let row = self.board.drop_piece(col, piece)?;
        self.moves.push(Move { piece, col });
        debug!(piece = piece.name(), col, row, "move played");

        if self.board.winning_move(piece) {
            self.outcome = Some(GameOutcome::Winner(piece));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current = piece.other();
        Ok(row)
    }
}
