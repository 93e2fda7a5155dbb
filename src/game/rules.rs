//! Side-stacking move rules: each row fills inward from both ends, so the
//! only playable cells in a row are its leftmost and rightmost empty cells.

use super::board::{Board, Cell, Coord};

/// Leftmost and rightmost empty column of `row`, or `None` if the row is full.
pub fn row_open_ends(board: &Board, row: usize) -> Option<(usize, usize)> {
    let cells = board.row(row);
    let left = cells.iter().position(|&c| c == Cell::Empty)?;
    let right = cells.iter().rposition(|&c| c == Cell::Empty)?;
    Some((left, right))
}

/// Open ends of every row, top to bottom.
pub fn open_ends(board: &Board) -> Vec<Option<(usize, usize)>> {
    (0..board.rows())
        .map(|row| row_open_ends(board, row))
        .collect()
}

/// Every currently playable cell, by ascending row, left end before right end.
///
/// A row with a single empty cell contributes it once.
pub fn available_moves(board: &Board) -> Vec<Coord> {
    let mut moves = Vec::with_capacity(board.rows() * 2);
    for row in 0..board.rows() {
        if let Some((left, right)) = row_open_ends(board, row) {
            moves.push(Coord::new(row, left));
            if right != left {
                moves.push(Coord::new(row, right));
            }
        }
    }
    moves
}

/// Whether `coord` is one of its row's open ends.
pub fn is_open_end(board: &Board, coord: Coord) -> bool {
    if !board.contains(coord.row, coord.col) {
        return false;
    }
    match row_open_ends(board, coord.row) {
        Some((left, right)) => coord.col == left || coord.col == right,
        None => false,
    }
}
