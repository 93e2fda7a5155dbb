//! # Side Stacker
//!
//! A connect-four variant where pieces enter a row from either end and stack
//! inward. Includes a minimax opponent with alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`]: Board, move rules, win detection, move history and game state
//! - [`ai`]: Agent trait, positional heuristic, minimax search, simpler policies
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;

pub use ai::select_move;
pub use game::{available_moves, has_won, Board, Cell, Coord, Move, Piece};
