use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use super::{Cell, Game, Move, Piece};
use crate::error::ExportError;

/// Serializable record of a finished (or abandoned) game.
///
/// Pieces use the integer encoding 1 = human, 2 = AI, and empty cells are 0.
/// `final_board` is row-major with the bottom row first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_board: Vec<Vec<Cell>>,
    pub winner: Option<Piece>,
    /// Seconds since the UNIX epoch.
    pub timestamp: u64,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);

        GameRecord {
            moves: game.moves().to_vec(),
            final_board: game.board().rows().iter().map(|row| row.to_vec()).collect(),
            winner: game.winner(),
            timestamp,
        }
    }

    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the record as pretty-printed JSON to `path`.
    pub fn write_to(&self, path: &Path) -> Result<(), ExportError> {
        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| ExportError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finished_game() -> Game {
        let mut game = Game::new(Piece::Human);
        for col in [0, 6, 0, 6, 0, 6, 0] {
            game.play(col).unwrap();
        }
        game
    }

    #[test]
    fn test_record_json_layout() {
        let record = GameRecord::from_game(&finished_game());
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert_eq!(value["winner"], 1);
        assert_eq!(value["moves"][0]["player"], 1);
        assert_eq!(value["moves"][0]["col"], 0);
        assert_eq!(value["moves"][1]["player"], 2);
        assert_eq!(value["moves"][1]["col"], 6);
        assert_eq!(value["moves"].as_array().unwrap().len(), 7);

        let bottom = &value["final_board"][0];
        assert_eq!(bottom[0], 1);
        assert_eq!(bottom[3], 0);
        assert_eq!(bottom[6], 2);
        assert_eq!(value["final_board"].as_array().unwrap().len(), 6);
        assert!(value["timestamp"].as_u64().unwrap() > 0);
    }

    #[test]
    fn test_unfinished_game_has_null_winner() {
        let mut game = Game::new(Piece::Ai);
        game.play(3).unwrap();
        let record = GameRecord::from_game(&game);
        let value: serde_json::Value = serde_json::from_str(&record.to_json().unwrap()).unwrap();

        assert!(value["winner"].is_null());
        assert_eq!(value["moves"][0]["player"], 2);
    }

    #[test]
    fn test_write_and_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.json");
        let record = GameRecord::from_game(&finished_game());
        record.write_to(&path).unwrap();

        let loaded: GameRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded, record);
    }

    #[test]
    fn test_write_to_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no_such_dir").join("game.json");
        let record = GameRecord::from_game(&finished_game());
        assert!(matches!(record.write_to(&path), Err(ExportError::Io { .. })));
    }
}
