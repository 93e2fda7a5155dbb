use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::{available_moves, has_won, Board, Coord, Piece};

/// One-ply policy: take an immediate win, otherwise block the opponent's
/// immediate win, otherwise play a random legal move.
pub struct ShortcutAgent {
    rng: StdRng,
}

impl ShortcutAgent {
    pub fn new() -> Self {
        ShortcutAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        ShortcutAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ShortcutAgent {
    fn default() -> Self {
        Self::new()
    }
}

/// First move (in rule order) that completes four in a row for `piece`.
pub fn winning_move(board: &Board, moves: &[Coord], piece: Piece) -> Option<Coord> {
    moves
        .iter()
        .copied()
        .find(|&coord| has_won(&board.with_move(coord, piece), piece))
}

impl Agent for ShortcutAgent {
    fn select_move(&mut self, board: &Board, piece: Piece) -> Result<Coord, SearchError> {
        let moves = available_moves(board);
        if moves.is_empty() {
            return Err(SearchError::EmptyMoveSet);
        }
        if let Some(coord) = winning_move(board, &moves, piece) {
            return Ok(coord);
        }
        if let Some(coord) = winning_move(board, &moves, piece.opponent()) {
            return Ok(coord);
        }
        moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::EmptyMoveSet)
    }

    fn name(&self) -> &str {
        "Shortcut"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize, Piece)]) -> Board {
        let mut board = Board::default();
        for &(r, c, p) in cells {
            board.place(Coord::new(r, c), p);
        }
        board
    }

    #[test]
    fn takes_winning_move() {
        let board = board_with(&[
            (5, 0, Piece::PlayerTwo),
            (5, 1, Piece::PlayerTwo),
            (5, 2, Piece::PlayerTwo),
            (0, 0, Piece::PlayerOne),
            (0, 6, Piece::PlayerOne),
            (6, 0, Piece::PlayerOne),
        ]);
        let mut agent = ShortcutAgent::with_seed(0);
        assert_eq!(
            agent.select_move(&board, Piece::PlayerTwo),
            Ok(Coord::new(5, 3))
        );
    }

    #[test]
    fn blocks_opponent_win() {
        let board = board_with(&[
            (3, 0, Piece::PlayerOne),
            (3, 1, Piece::PlayerOne),
            (3, 2, Piece::PlayerOne),
            (0, 0, Piece::PlayerTwo),
            (6, 6, Piece::PlayerTwo),
        ]);
        let mut agent = ShortcutAgent::with_seed(0);
        assert_eq!(
            agent.select_move(&board, Piece::PlayerTwo),
            Ok(Coord::new(3, 3))
        );
    }

    #[test]
    fn prefers_win_over_block() {
        // Player one threatens row 3 first in rule order; player two's own
        // win in row 5 still wins out
        let board = board_with(&[
            (3, 0, Piece::PlayerOne),
            (3, 1, Piece::PlayerOne),
            (3, 2, Piece::PlayerOne),
            (0, 6, Piece::PlayerOne),
            (5, 0, Piece::PlayerTwo),
            (5, 1, Piece::PlayerTwo),
            (5, 2, Piece::PlayerTwo),
        ]);
        let mut agent = ShortcutAgent::with_seed(0);
        assert_eq!(
            agent.select_move(&board, Piece::PlayerTwo),
            Ok(Coord::new(5, 3))
        );
    }

    #[test]
    fn falls_back_to_a_legal_move() {
        let board = board_with(&[(2, 0, Piece::PlayerOne)]);
        let legal = available_moves(&board);
        let mut agent = ShortcutAgent::with_seed(3);
        for _ in 0..20 {
            let coord = agent.select_move(&board, Piece::PlayerTwo).unwrap();
            assert!(legal.contains(&coord));
        }
    }

    #[test]
    fn full_board_is_an_error() {
        let mut board = Board::new(1, 2).unwrap();
        board.place(Coord::new(0, 0), Piece::PlayerOne);
        board.place(Coord::new(0, 1), Piece::PlayerTwo);
        let mut agent = ShortcutAgent::with_seed(0);
        assert_eq!(
            agent.select_move(&board, Piece::PlayerOne),
            Err(SearchError::EmptyMoveSet)
        );
    }

    #[test]
    fn winning_move_none_when_no_threat() {
        let board = Board::default();
        let moves = available_moves(&board);
        assert_eq!(winning_move(&board, &moves, Piece::PlayerOne), None);
    }
}
