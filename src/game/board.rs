use std::fmt;

use serde::{Deserialize, Serialize};

use super::piece::Piece;
use crate::error::ConfigError;

pub const DEFAULT_ROWS: usize = 7;
pub const DEFAULT_COLS: usize = 7;

/// Largest board accepted, counted in cells.
pub const MAX_CELLS: usize = 1 << 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    PlayerOne,
    PlayerTwo,
}

impl Cell {
    /// The piece occupying this cell, if any
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::PlayerOne => Some(Piece::PlayerOne),
            Cell::PlayerTwo => Some(Piece::PlayerTwo),
        }
    }
}

/// A board position. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A coordinate together with the piece placed there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub row: usize,
    pub col: usize,
}

impl Move {
    pub fn new(piece: Piece, coord: Coord) -> Self {
        Move {
            piece,
            row: coord.row,
            col: coord.col,
        }
    }

    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.col)
    }
}

/// Fixed-size `rows x cols` grid, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board of at most [`MAX_CELLS`] cells
    pub fn new(rows: usize, cols: usize) -> Result<Self, ConfigError> {
        let len = rows
            .checked_mul(cols)
            .filter(|&len| len > 0 && len <= MAX_CELLS)
            .ok_or(ConfigError::InvalidDimensions { rows, cols })?;
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; len],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether `(row, col)` lies on the board
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(self.contains(row, col), "read outside board ({row}, {col})");
        self.cells[row * self.cols + col]
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.get(coord.row, coord.col)
    }

    /// All cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        debug_assert!(row < self.rows, "row {row} outside board");
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Put `piece` on an empty cell.
    ///
    /// Callers must check the target against the move rules first; placing
    /// on an occupied cell is a logic error.
    pub fn place(&mut self, coord: Coord, piece: Piece) {
        debug_assert!(
            self.contains(coord.row, coord.col),
            "place outside board {coord}"
        );
        let idx = coord.row * self.cols + coord.col;
        debug_assert_eq!(
            self.cells[idx],
            Cell::Empty,
            "place on occupied cell {coord}"
        );
        self.cells[idx] = piece.to_cell();
    }

    /// Copy of this board with `piece` placed at `coord`
    pub fn with_move(&self, coord: Coord, piece: Piece) -> Board {
        let mut next = self.clone();
        next.place(coord, piece);
        next
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Number of cells holding `piece`
    pub fn count(&self, piece: Piece) -> usize {
        let cell = piece.to_cell();
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..self.cols {
            write!(f, "{col:>2}")?;
        }
        writeln!(f)?;
        for row in 0..self.rows {
            write!(f, "{row:>2} ")?;
            for &cell in self.row(row) {
                let symbol = cell.piece().map_or('.', Piece::symbol);
                write!(f, " {symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
