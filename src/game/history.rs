use std::path::Path;

use log::trace;

use super::{Board, GameState, Move};
use crate::error::{HistoryError, MoveError};

/// Append-only record of a game's moves, plus the board size they were
/// played on.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveHistory {
    rows: usize,
    cols: usize,
    #[serde(default)]
    moves: Vec<Move>,
}

impl MoveHistory {
    pub fn new(rows: usize, cols: usize) -> Self {
        MoveHistory {
            rows,
            cols,
            moves: Vec::new(),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Append a move. Legality is the caller's concern; [`MoveHistory::replay`]
    /// checks it.
    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    /// Replay every move in order from an empty board, validating turn order
    /// and move legality along the way.
    pub fn replay(&self) -> Result<GameState, HistoryError> {
        let mut state = GameState::new(self.rows, self.cols)
            .map_err(HistoryError::Dimensions)?;
        for (index, mv) in self.moves.iter().enumerate() {
            if state.is_terminal() {
                return Err(HistoryError::IllegalMove {
                    index,
                    source: MoveError::GameOver,
                });
            }
            let expected = state.current_piece();
            if mv.piece != expected {
                return Err(HistoryError::WrongTurn {
                    index,
                    expected,
                    found: mv.piece,
                });
            }
            state
                .apply_move_mut(mv.coord())
                .map_err(|source| HistoryError::IllegalMove { index, source })?;
            trace!("replayed move {index}: {} at {}", mv.piece, mv.coord());
        }
        Ok(state)
    }

    /// Board reached after replaying every move
    pub fn board(&self) -> Result<Board, HistoryError> {
        Ok(self.replay()?.board().clone())
    }

    pub fn from_json(json: &str) -> Result<Self, HistoryError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, HistoryError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a history from a JSON file
    pub fn load(path: &Path) -> Result<Self, HistoryError> {
        let content = std::fs::read_to_string(path).map_err(|e| HistoryError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::game::{Cell, Coord, GameOutcome, Piece};
    use std::io::Write;

    fn history(moves: &[(Piece, usize, usize)]) -> MoveHistory {
        let mut h = MoveHistory::new(7, 7);
        for &(piece, row, col) in moves {
            h.push(Move::new(piece, Coord::new(row, col)));
        }
        h
    }

    #[test]
    fn test_replay_rebuilds_board() {
        let h = history(&[
            (Piece::PlayerOne, 3, 0),
            (Piece::PlayerTwo, 3, 6),
            (Piece::PlayerOne, 3, 1),
        ]);
        let state = h.replay().unwrap();
        assert_eq!(state.board().get(3, 0), Cell::PlayerOne);
        assert_eq!(state.board().get(3, 6), Cell::PlayerTwo);
        assert_eq!(state.board().get(3, 1), Cell::PlayerOne);
        assert_eq!(state.current_piece(), Piece::PlayerTwo);
        assert_eq!(state.history(), &h);
    }

    #[test]
    fn test_replay_rejects_wrong_turn() {
        let h = history(&[(Piece::PlayerOne, 0, 0), (Piece::PlayerOne, 0, 6)]);
        assert!(matches!(
            h.replay(),
            Err(HistoryError::WrongTurn {
                index: 1,
                expected: Piece::PlayerTwo,
                found: Piece::PlayerOne
            })
        ));
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        let h = history(&[(Piece::PlayerOne, 0, 0), (Piece::PlayerTwo, 0, 0)]);
        assert!(matches!(
            h.replay(),
            Err(HistoryError::IllegalMove {
                index: 1,
                source: MoveError::Occupied { row: 0, col: 0 }
            })
        ));

        let h = history(&[(Piece::PlayerOne, 0, 3)]);
        assert!(matches!(
            h.replay(),
            Err(HistoryError::IllegalMove {
                index: 0,
                source: MoveError::NotOpenEnd { .. }
            })
        ));
    }

    #[test]
    fn test_replay_rejects_moves_after_win() {
        let mut moves = Vec::new();
        for col in 0..4 {
            moves.push((Piece::PlayerOne, 0, col));
            moves.push((Piece::PlayerTwo, 6, col));
        }
        let h = history(&moves);
        assert!(matches!(
            h.replay(),
            Err(HistoryError::IllegalMove {
                index: 7,
                source: MoveError::GameOver
            })
        ));

        let h = history(&moves[..7]);
        assert_eq!(
            h.replay().unwrap().outcome(),
            Some(GameOutcome::Winner(Piece::PlayerOne))
        );
    }

    #[test]
    fn test_replay_rejects_bad_dimensions() {
        let h = MoveHistory::new(0, 7);
        assert!(matches!(h.replay(), Err(HistoryError::Dimensions(_))));
    }

    #[test]
    fn test_replay_rejects_oversized_board_from_json() {
        let json = r#"{"rows": 4611686018427387904, "cols": 4, "moves": []}"#;
        let h = MoveHistory::from_json(json).unwrap();
        let err = h.replay().unwrap_err();
        assert!(matches!(
            err,
            HistoryError::Dimensions(ConfigError::InvalidDimensions { cols: 4, .. })
        ));

        let h = MoveHistory::new(100_000, 100_000);
        assert!(matches!(h.replay(), Err(HistoryError::Dimensions(_))));
    }

    #[test]
    fn test_json_format() {
        let json = r#"{"rows": 7, "cols": 7, "moves": [{"piece": 1, "row": 2, "col": 0}]}"#;
        let h = MoveHistory::from_json(json).unwrap();
        assert_eq!(h.moves(), &[Move::new(Piece::PlayerOne, Coord::new(2, 0))]);

        let back = MoveHistory::from_json(&h.to_json().unwrap()).unwrap();
        assert_eq!(back, h);

        let empty = MoveHistory::from_json(r#"{"rows": 4, "cols": 5}"#).unwrap();
        assert!(empty.is_empty());
        assert_eq!((empty.rows(), empty.cols()), (4, 5));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("moves.json");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"{{"rows": 5, "cols": 5, "moves": [{{"piece": 1, "row": 4, "col": 4}}]}}"#
        )
        .unwrap();

        let h = MoveHistory::load(&path).unwrap();
        assert_eq!(h.board().unwrap().get(4, 4), Cell::PlayerOne);
    }

    #[test]
    fn test_load_missing_file() {
        let err = MoveHistory::load(Path::new("no_such_history.json"))
            .unwrap_err();
        assert!(matches!(err, HistoryError::Read { .. }));
    }
}
