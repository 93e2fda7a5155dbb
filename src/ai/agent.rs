use crate::error::SearchError;
use crate::game::{Board, Coord, Piece};

/// Universal interface for automated players.
pub trait Agent: Send {
    /// Choose a cell for `piece` to play on `board`.
    fn select_move(&mut self, board: &Board, piece: Piece) -> Result<Coord, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
