use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use super::agent::Agent;
use crate::error::SearchError;
use crate::game::{available_moves, Board, Coord, Piece};

/// An agent that selects uniformly at random from the available moves.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _piece: Piece) -> Result<Coord, SearchError> {
        available_moves(board)
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::EmptyMoveSet)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
