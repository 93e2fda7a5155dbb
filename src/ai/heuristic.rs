use crate::game::windows::windows;
use crate::game::{Board, Piece};

/// Search values. Terminal wins and losses use the extremes.
pub type Score = i64;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score;
}

/// Default heuristic: a center-column bonus plus a score for every 4-cell
/// window on the board.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalHeuristic;

impl PositionalHeuristic {
    pub const CENTER_WEIGHT: Score = 3;

    pub fn score_window(own: usize, opp: usize, empty: usize) -> Score {
        if own == 4 {
            100
        } else if own == 3 && empty == 1 {
            5
        } else if own == 2 && empty == 2 {
            2
        } else if opp == 3 && empty == 1 {
            -4
        } else {
            0
        }
    }
}

impl Heuristic for PositionalHeuristic {
    fn evaluate(&self, board: &Board, piece: Piece) -> Score {
        let own_cell = piece.to_cell();

        // Center column bonus
        let center = board.cols() / 2;
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own_cell)
            .count() as Score;
        let mut score = center_count * Self::CENTER_WEIGHT;

        for line in windows(board.rows(), board.cols()) {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for coord in line {
                match board.cell(coord).piece() {
                    Some(p) if p == piece => own += 1,
                    Some(_) => opp += 1,
                    None => empty += 1,
                }
            }
            score += Self::score_window(own, opp, empty);
        }

        score
    }
}
