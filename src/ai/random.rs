use rand::Rng;

use crate::game::Board;

/// A uniformly random valid column, or `None` on a full board.
pub fn random_column<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<usize> {
    let columns = board.valid_columns();
    if columns.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..columns.len());
    Some(columns[idx])
}
