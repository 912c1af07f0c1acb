//! Computer opponent: heuristic evaluation, minimax search with alpha-beta
//! pruning, and difficulty-based move selection.

pub mod heuristic;
pub mod minimax;
mod random;
mod selector;

pub use heuristic::{score_position, score_window};
pub use minimax::{best_move, search, Score, SearchResult};
pub use random::random_column;
pub use selector::{pick_best_move, Difficulty, MoveSelector, HARD_DEPTH, MEDIUM_DEPTH};
