use super::history::MoveHistory;
use super::rules;
use super::{has_won, Board, Cell, Coord, Move, Piece};
use crate::error::{ConfigError, MoveError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Draw,
}

/// A game in progress: board, the moves that built it, and whose turn it is.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    history: MoveHistory,
    current_piece: Piece,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        Ok(GameState {
            board: Board::new(rows, cols)?,
            history: MoveHistory::new(rows, cols),
            current_piece: Piece::PlayerOne, // Player one starts
            outcome: None,
        })
    }

    /// Get the piece that moves next
    pub fn current_piece(&self) -> Piece {
        self.current_piece
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves played so far, in order
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    pub fn last_move(&self) -> Option<Move> {
        self.history.moves().last().copied()
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Playable cells, or none once the game is over
    pub fn available_moves(&self) -> Vec<Coord> {
        if self.is_terminal() {
            return Vec::new();
        }
        rules::available_moves(&self.board)
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, coord: Coord) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(coord)?;
        Ok(next)
    }

    /// Apply a move in place. On error the state is left unchanged.
    pub fn apply_move_mut(&mut self, coord: Coord) -> Result<(), MoveError> {
        self.check_move(coord)?;

        let piece = self.current_piece;
        self.board.place(coord, piece);
        self.history.push(Move::new(piece, coord));

        if has_won(&self.board, piece) {
            self.outcome = Some(GameOutcome::Winner(piece));
        } else if rules::available_moves(&self.board).is_empty() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_piece = piece.opponent();
        Ok(())
    }

    /// Validate `coord` against the move rules without playing it
    pub fn check_move(&self, coord: Coord) -> Result<(), MoveError> {
        let Coord { row, col } = coord;
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if !self.board.contains(row, col) {
            return Err(MoveError::OutOfBounds { row, col });
        }
        if self.board.cell(coord) != Cell::Empty {
            return Err(MoveError::Occupied { row, col });
        }
        if !rules::is_open_end(&self.board, coord) {
            return Err(MoveError::NotOpenEnd { row, col });
        }
        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState {
            board: Board::default(),
            history: MoveHistory::new(super::DEFAULT_ROWS, super::DEFAULT_COLS),
            current_piece: Piece::PlayerOne,
            outcome: None,
        }
    }
}
