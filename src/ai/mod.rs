//! Automated players: the [`Agent`] trait, the positional heuristic, the
//! alpha-beta minimax search, and the cheaper shortcut and random policies.

mod agent;
pub mod heuristic;
pub mod minimax;
mod random;
mod shortcut;

pub use agent::Agent;
pub use heuristic::{Heuristic, PositionalHeuristic, Score};
pub use minimax::{select_move, MinimaxAgent, SearchStats};
pub use random::RandomAgent;
pub use shortcut::{winning_move, ShortcutAgent};

use crate::config::{BotConfig, Policy};

/// Build the agent described by `config`. Randomized policies use the
/// configured seed when one is set.
pub fn build_agent(config: &BotConfig) -> Box<dyn Agent> {
    match config.policy {
        Policy::Minimax => Box::new(MinimaxAgent::new(config.depth)),
        Policy::Shortcut => Box::new(match config.seed {
            Some(seed) => ShortcutAgent::with_seed(seed),
            None => ShortcutAgent::new(),
        }),
        Policy::Random => Box::new(match config.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        }),
    }
}
