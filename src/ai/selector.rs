use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::config::AiConfig;
use crate::error::SelectError;
use crate::game::{Board, Piece};

use super::minimax::best_move;
use super::random::random_column;

pub const MEDIUM_DEPTH: u32 = 3;
pub const HARD_DEPTH: u32 = 5;

/// How hard the computer plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    /// Uniformly random valid columns, no search.
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Parse a difficulty name, case-insensitively. Unknown names fall back to
    /// `Medium`.
    pub fn parse_lenient(name: &str) -> Difficulty {
        match name.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            other => {
                debug!(difficulty = other, "unknown difficulty, using medium");
                Difficulty::Medium
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl FromStr for Difficulty {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Difficulty::parse_lenient(s))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pick a column for `piece` with the default depths (medium 3, hard 5).
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    piece: Piece,
    difficulty: Difficulty,
    rng: &mut R,
) -> Result<usize, SelectError> {
    let depth = match difficulty {
        Difficulty::Easy => None,
        Difficulty::Medium => Some(MEDIUM_DEPTH),
        Difficulty::Hard => Some(HARD_DEPTH),
    };
    select(board, piece, depth, rng)
}

/// Random column when `depth` is `None`, otherwise the searched column with a
/// random fallback if the search produced none.
fn select<R: Rng + ?Sized>(
    board: &Board,
    piece: Piece,
    depth: Option<u32>,
    rng: &mut R,
) -> Result<usize, SelectError> {
    if board.valid_columns().is_empty() {
        return Err(SelectError::NoValidMoves);
    }

    let Some(depth) = depth else {
        let column = random_column(board, rng).ok_or(SelectError::NoValidMoves)?;
        debug!(column, "random move");
        return Ok(column);
    };

    let result = best_move(board, depth, piece);
    if let Some(column) = result.column {
        debug!(column, score = %result.score, depth, "search complete");
        return Ok(column);
    }

    let column = random_column(board, rng).ok_or(SelectError::NoValidMoves)?;
    debug!(column, depth, "search returned no column, playing random");
    Ok(column)
}

/// Move selection with its own random generator and configurable depths.
pub struct MoveSelector {
    rng: StdRng,
    medium_depth: u32,
    hard_depth: u32,
}

impl MoveSelector {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// A selector whose random choices are reproducible.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_config(config: &AiConfig) -> Self {
        let selector = match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        };
        selector.with_depths(config.medium_depth, config.hard_depth)
    }

    fn with_rng(rng: StdRng) -> Self {
        MoveSelector {
            rng,
            medium_depth: MEDIUM_DEPTH,
            hard_depth: HARD_DEPTH,
        }
    }

    pub fn with_depths(mut self, medium_depth: u32, hard_depth: u32) -> Self {
        self.medium_depth = medium_depth;
        self.hard_depth = hard_depth;
        self
    }

    /// Search depth used for `difficulty`, `None` for easy.
    pub fn depth_for(&self, difficulty: Difficulty) -> Option<u32> {
        match difficulty {
            Difficulty::Easy => None,
            Difficulty::Medium => Some(self.medium_depth),
            Difficulty::Hard => Some(self.hard_depth),
        }
    }

    pub fn pick_best_move(
        &mut self,
        board: &Board,
        piece: Piece,
        difficulty: Difficulty,
    ) -> Result<usize, SelectError> {
        let depth = self.depth_for(difficulty);
        select(board, piece, depth, &mut self.rng)
    }
}

impl Default for MoveSelector {
    fn default() -> Self {
        Self::new()
    }
}
