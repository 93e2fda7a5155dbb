use super::board::Board;
use super::piece::Piece;
use super::windows::windows;

/// Check whether `piece` has four in a row on any axis.
pub fn has_won(board: &Board, piece: Piece) -> bool {
    let cell = piece.to_cell();
    windows(board.rows(), board.cols())
        .any(|line| line.iter().all(|&c| board.cell(c) == cell))
}

/// The piece that has four in a row, if either does.
pub fn winner(board: &Board) -> Option<Piece> {
    Piece::ALL.into_iter().find(|&p| has_won(board, p))
}
