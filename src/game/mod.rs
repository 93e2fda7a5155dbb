//! Core side-stacker game logic: board representation, move rules, win
//! detection, and a game state machine built on an append-only move history.

mod board;
mod history;
mod piece;
pub mod rules;
mod state;
mod win;
pub mod windows;

pub use board::{Board, Cell, Coord, Move, DEFAULT_COLS, DEFAULT_ROWS, MAX_CELLS};
pub use history::MoveHistory;
pub use piece::Piece;
pub use rules::available_moves;
pub use state::{GameOutcome, GameState};
pub use win::{has_won, winner};
