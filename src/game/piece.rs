use serde::{Deserialize, Serialize};

use super::board::Cell;

/// A side in the game. Serialized as 1 (human) or 2 (AI).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Piece {
    Human,
    Ai,
}

impl Piece {
    /// Get the other side
    pub fn other(self) -> Piece {
        match self {
            Piece::Human => Piece::Ai,
            Piece::Ai => Piece::Human,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Human => Cell::Human,
            Piece::Ai => Cell::Ai,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Human => "Human",
            Piece::Ai => "AI",
        }
    }

    /// Console symbol used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Piece::Human => 'X',
            Piece::Ai => 'O',
        }
    }
}

impl From<Piece> for u8 {
    fn from(piece: Piece) -> u8 {
        piece.to_cell().into()
    }
}

impl TryFrom<u8> for Piece {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Cell::try_from(value)?
            .piece()
            .ok_or_else(|| format!("invalid piece value {value}"))
    }
}
