use std::fmt;
use std::ops::Neg;

use crate::game::{Board, Piece};

use super::heuristic::score_position;

/// A search score. `INFINITY` and `NEG_INFINITY` mark proven wins and losses
/// and sit strictly outside every heuristic value. Negation never overflows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score(i64);

impl Score {
    pub const INFINITY: Score = Score(i64::MAX);
    pub const NEG_INFINITY: Score = Score(-i64::MAX);
    pub const ZERO: Score = Score(0);

    /// A finite score, clamped inside the infinities.
    pub fn new(value: i64) -> Self {
        Score(value.clamp(-i64::MAX + 1, i64::MAX - 1))
    }

    pub fn value(self) -> i64 {
        self.0
    }

    pub fn is_infinite(self) -> bool {
        self == Score::INFINITY || self == Score::NEG_INFINITY
    }
}

impl From<i64> for Score {
    fn from(value: i64) -> Self {
        Score::new(value)
    }
}

impl Neg for Score {
    type Output = Score;

    fn neg(self) -> Score {
        Score(-self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Score::INFINITY => write!(f, "+inf"),
            Score::NEG_INFINITY => write!(f, "-inf"),
            Score(value) => write!(f, "{value}"),
        }
    }
}

/// Outcome of a search: the backed-up score and the column that achieves it.
///
/// `column` is `None` at leaves and when no legal move exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub score: Score,
    pub column: Option<usize>,
}

impl SearchResult {
    fn leaf(score: Score) -> Self {
        SearchResult {
            score,
            column: None,
        }
    }
}

/// Value of a node where the search stops: proven results first, then the
/// heuristic for `piece`.
fn leaf_score(board: &Board, piece: Piece) -> Score {
    if board.winning_move(piece) {
        Score::INFINITY
    } else if board.winning_move(piece.other()) {
        Score::NEG_INFINITY
    } else if board.is_full() {
        Score::ZERO
    } else {
        Score::new(score_position(board, piece))
    }
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// `piece` is the maximizing side; its opponent moves at minimizing nodes.
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current best, so ties go to the leftmost column. Recursive
/// nodes always return a column, even when every child is pruned or lost.
pub fn search(
    board: &Board,
    depth: u32,
    mut alpha: Score,
    mut beta: Score,
    maximizing: bool,
    piece: Piece,
) -> SearchResult {
    if depth == 0 || board.is_terminal() {
        return SearchResult::leaf(leaf_score(board, piece));
    }

    let columns = board.valid_columns();
    let Some(&first) = columns.first() else {
        return SearchResult::leaf(Score::ZERO);
    };

    let mover = if maximizing { piece } else { piece.other() };
    let mut best = SearchResult {
        score: if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        },
        column: Some(first),
    };

    for col in columns {
        let Some(child) = board.with_piece(col, mover) else {
            continue;
        };
        let value = search(&child, depth - 1, alpha, beta, !maximizing, piece).score;

        if maximizing {
            if value > best.score {
                best = SearchResult {
                    score: value,
                    column: Some(col),
                };
            }
            alpha = alpha.max(value);
        } else {
            if value < best.score {
                best = SearchResult {
                    score: value,
                    column: Some(col),
                };
            }
            beta = beta.min(value);
        }

        if alpha >= beta {
            break;
        }
    }

    best
}

/// Search from the root for `piece` with a full window.
pub fn best_move(board: &Board, depth: u32, piece: Piece) -> SearchResult {
    search(
        board,
        depth,
        Score::NEG_INFINITY,
        Score::INFINITY,
        true,
        piece,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{board_from_moves, drawn_board_except};

    /// Exhaustive minimax with the same leaf values and tie-break, no pruning.
    fn plain_minimax(board: &Board, depth: u32, maximizing: bool, piece: Piece) -> SearchResult {
        if depth == 0 || board.is_terminal() {
            return SearchResult::leaf(leaf_score(board, piece));
        }
        let mover = if maximizing { piece } else { piece.other() };
        let mut best = SearchResult {
            score: if maximizing {
                Score::NEG_INFINITY
            } else {
                Score::INFINITY
            },
            column: board.valid_columns().first().copied(),
        };
        for col in board.valid_columns() {
            let child = board.with_piece(col, mover).unwrap();
            let value = plain_minimax(&child, depth - 1, !maximizing, piece).score;
            let better = if maximizing {
                value > best.score
            } else {
                value < best.score
            };
            if better {
                best = SearchResult {
                    score: value,
                    column: Some(col),
                };
            }
        }
        best
    }

    // --- Score tests ---

    #[test]
    fn score_infinities_negate_and_order() {
        assert_eq!(-Score::INFINITY, Score::NEG_INFINITY);
        assert_eq!(-Score::NEG_INFINITY, Score::INFINITY);
        assert!(Score::NEG_INFINITY < Score::new(i64::MIN));
        assert!(Score::new(i64::MAX) < Score::INFINITY);
        assert!(Score::new(-10_000) < Score::new(110));
        assert!(!Score::new(i64::MAX).is_infinite());
        assert_eq!(Score::INFINITY.to_string(), "+inf");
        assert_eq!(Score::NEG_INFINITY.to_string(), "-inf");
        assert_eq!(Score::from(-80).to_string(), "-80");
    }

    // --- Leaf tests ---

    #[test]
    fn won_board_is_infinite() {
        let board = board_from_moves(Piece::Ai, &[0, 6, 0, 6, 0, 6, 0]);
        let result = best_move(&board, 3, Piece::Ai);
        assert_eq!(result, SearchResult::leaf(Score::INFINITY));

        let result = best_move(&board, 3, Piece::Human);
        assert_eq!(result, SearchResult::leaf(Score::NEG_INFINITY));
    }

    #[test]
    fn full_board_is_draw() {
        let board = drawn_board_except(&[]);
        assert_eq!(best_move(&board, 5, Piece::Ai), SearchResult::leaf(Score::ZERO));
    }

    #[test]
    fn depth_zero_is_heuristic() {
        let board = board_from_moves(Piece::Ai, &[3, 0, 2]);
        let result = best_move(&board, 0, Piece::Ai);
        assert_eq!(result.column, None);
        assert_eq!(result.score, Score::new(score_position(&board, Piece::Ai)));
    }

    // --- Move choice tests ---

    #[test]
    fn takes_winning_move() {
        // AI holds the bottom row at 0, 1, 2; column 3 wins
        let board = board_from_moves(Piece::Ai, &[0, 0, 1, 1, 2, 2]);
        for depth in 1..=5 {
            let result = best_move(&board, depth, Piece::Ai);
            assert_eq!(result.column, Some(3), "depth {depth}");
            assert_eq!(result.score, Score::INFINITY, "depth {depth}");
        }
    }

    #[test]
    fn blocks_opponent_win() {
        // Human holds the bottom row at 0, 1, 2; AI must block column 3
        let board = board_from_moves(Piece::Human, &[0, 6, 1, 6, 2]);
        for depth in [2, 3, 4] {
            let result = best_move(&board, depth, Piece::Ai);
            assert_eq!(result.column, Some(3), "depth {depth}");
        }
    }

    #[test]
    fn lost_position_still_returns_a_column() {
        // Human threatens both ends of an open three; every reply loses
        let board = board_from_moves(Piece::Human, &[2, 2, 3, 3, 4]);
        let result = best_move(&board, 2, Piece::Ai);
        assert_eq!(result.score, Score::NEG_INFINITY);
        assert_eq!(result.column, Some(0));
    }

    #[test]
    fn minimizing_root_picks_least_score() {
        let board = board_from_moves(Piece::Ai, &[0, 0, 1, 1, 2, 2]);
        // Human to move from the AI's point of view: blocking at 3 is the only
        // move that avoids an immediate AI win.
        let result = search(
            &board,
            2,
            Score::NEG_INFINITY,
            Score::INFINITY,
            false,
            Piece::Ai,
        );
        assert_eq!(result.column, Some(3));
        assert!(result.score < Score::INFINITY);
    }

    #[test]
    fn alpha_beta_matches_plain_minimax() {
        let positions: [&[usize]; 4] = [
            &[3, 3, 2, 4, 4, 2],
            &[3, 2, 3, 3, 4, 5, 1, 4],
            &[0, 6, 1, 5, 3, 3, 3, 2, 4],
            &[3, 3, 3, 3, 2, 4, 2, 4, 5, 1],
        ];
        for moves in positions {
            let board = board_from_moves(Piece::Human, moves);
            assert!(!board.is_terminal());
            for depth in [3, 4] {
                let pruned = best_move(&board, depth, Piece::Ai);
                let plain = plain_minimax(&board, depth, true, Piece::Ai);
                assert_eq!(pruned, plain, "moves {moves:?} depth {depth}");
            }
        }
    }

    #[test]
    fn search_does_not_mutate_board() {
        let board = board_from_moves(Piece::Human, &[3, 2, 4]);
        let before = board;
        let _ = best_move(&board, 4, Piece::Ai);
        assert_eq!(board, before);
    }
}
