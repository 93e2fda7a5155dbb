use log::debug;

use super::agent::Agent;
use super::heuristic::{Heuristic, PositionalHeuristic, Score};
use crate::error::SearchError;
use crate::game::{available_moves, has_won, winner, Board, Coord, Piece};

/// Value of a position the searching side has won.
pub const WIN: Score = Score::MAX;
/// Value of a position the searching side has lost.
pub const LOSS: Score = -Score::MAX;

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: usize = 4;

/// Counters from the most recent search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: u64,
    pub cutoffs: u64,
}

/// Depth-limited minimax agent with alpha-beta pruning.
pub struct MinimaxAgent {
    depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
    stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, Box::new(PositionalHeuristic))
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent {
            depth,
            pruning: true,
            heuristic,
            stats: SearchStats::default(),
        }
    }

    /// Search every branch. Returns the same moves, only slower.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Best move for `bot_piece` and its minimax value.
    pub fn search(
        &mut self,
        board: &Board,
        bot_piece: Piece,
    ) -> Result<(Coord, Score), SearchError> {
        if self.depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if available_moves(board).is_empty() {
            return Err(SearchError::EmptyMoveSet);
        }
        if let Some(piece) = winner(board) {
            return Err(SearchError::AlreadyWon(piece));
        }

        self.stats = SearchStats::default();
        let (best, value) = self.minimax(board, self.depth, LOSS, WIN, true, bot_piece);
        let coord = best.ok_or(SearchError::EmptyMoveSet)?;

        debug!(
            "minimax depth {} for {}: {} (value {}, {} nodes, {} cutoffs)",
            self.depth,
            bot_piece,
            coord,
            value,
            self.stats.nodes,
            self.stats.cutoffs
        );
        Ok((coord, value))
    }

    /// Returns the chosen move (none at leaves) and the value of `board`
    /// for `bot_piece`.
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
        bot_piece: Piece,
    ) -> (Option<Coord>, Score) {
        self.stats.nodes += 1;

        let opponent = bot_piece.opponent();
        if has_won(board, bot_piece) {
            return (None, WIN);
        }
        if has_won(board, opponent) {
            return (None, LOSS);
        }
        let moves = available_moves(board);
        if moves.is_empty() {
            return (None, 0);
        }
        if depth == 0 {
            return (None, self.heuristic.evaluate(board, bot_piece));
        }

        // Kept when no move improves on the starting bound
        let mut best = moves[0];

        if maximizing {
            let mut value = LOSS;
            for &coord in &moves {
                let child = board.with_move(coord, bot_piece);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, false, bot_piece);
                if score > value {
                    value = score;
                    best = coord;
                }
                alpha = alpha.max(value);
                if self.pruning && alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (Some(best), value)
        } else {
            let mut value = WIN;
            for &coord in &moves {
                let child = board.with_move(coord, opponent);
                let (_, score) = self.minimax(&child, depth - 1, alpha, beta, true, bot_piece);
                if score < value {
                    value = score;
                    best = coord;
                }
                beta = beta.min(value);
                if self.pruning && alpha >= beta {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            (Some(best), value)
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, piece: Piece) -> Result<Coord, SearchError> {
        self.search(board, piece).map(|(coord, _)| coord)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Best move for `bot_piece` from a `depth`-ply alpha-beta search.
pub fn select_move(board: &Board, depth: usize, bot_piece: Piece) -> Result<Coord, SearchError> {
    MinimaxAgent::new(depth).select_move(board, bot_piece)
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::game::GameState;
    use proptest::prelude::*;

    fn played_board() -> impl Strategy<Value = Board> {
        let picks = prop::collection::vec(any::<prop::sample::Index>(), 0..20);
        (4usize..8, 4usize..8, picks).prop_map(|(rows, cols, picks)| {
            let mut state = GameState::new(rows, cols).unwrap();
            for pick in picks {
                let moves = state.available_moves();
                if moves.is_empty() {
                    break;
                }
                state.apply_move_mut(*pick.get(&moves)).unwrap();
            }
            state.board().clone()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_pruning_does_not_change_the_result(
            board in played_board(),
            depth in 1usize..4,
            bot in prop::sample::select(Piece::ALL.to_vec()),
        ) {
            let pruned = MinimaxAgent::new(depth).search(&board, bot);
            let full = MinimaxAgent::new(depth).without_pruning().search(&board, bot);
            prop_assert_eq!(pruned, full);
        }
    }
}
