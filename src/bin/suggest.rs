use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use side_stacker::ai::build_agent;
use side_stacker::config::{AppConfig, BoardConfig, Policy};
use side_stacker::game::{rules, GameState, MoveHistory};
use side_stacker::{has_won, Move, Piece};

/// Replay a game's move history and print the bot's reply as JSON.
#[derive(Parser)]
#[command(
    name = "suggest",
    about = "Choose the bot's next move for a recorded game"
)]
struct Cli {
    /// JSON move history; read from stdin when omitted
    history: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "sidestacker.toml")]
    config: PathBuf,

    /// Override board rows the history must match
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns the history must match
    #[arg(long)]
    cols: Option<usize>,

    /// Override bot policy
    #[arg(long, value_enum)]
    policy: Option<Policy>,

    /// Override minimax search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Seed for randomized policies
    #[arg(long)]
    seed: Option<u64>,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: log::Level,
}

/// Board update after a move, in the shape clients render from.
#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct Update {
    #[serde(rename = "move")]
    mv: Move,
    turn: Piece,
    available_moves: Vec<Vec<usize>>,
    winning_move: bool,
}

impl Update {
    fn after(state: &GameState, mv: Move) -> Self {
        let available_moves = rules::open_ends(state.board())
            .into_iter()
            .map(|ends| match ends {
                Some((min, max)) => vec![min, max],
                None => Vec::new(),
            })
            .collect();
        Update {
            mv,
            turn: mv.piece.opponent(),
            available_moves,
            winning_move: has_won(state.board(), mv.piece),
        }
    }
}

/// Reject a history recorded on a board other than the configured one.
fn check_dimensions(history: &MoveHistory, board: &BoardConfig) -> Result<()> {
    if (history.rows(), history.cols()) != (board.rows, board.cols) {
        bail!(
            "move history is for a {}x{} board but the configured board is {}x{}",
            history.rows(),
            history.cols(),
            board.rows,
            board.cols
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.log_level)
        .context("initializing logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(policy) = cli.policy {
        config.bot.policy = policy;
    }
    if let Some(depth) = cli.depth {
        config.bot.depth = depth;
    }
    if cli.seed.is_some() {
        config.bot.seed = cli.seed;
    }
    config.validate().context("validating configuration")?;

    let history = match &cli.history {
        Some(path) => MoveHistory::load(path)?,
        None => {
            let mut json = String::new();
            std::io::stdin()
                .read_to_string(&mut json)
                .context("reading move history from stdin")?;
            MoveHistory::from_json(&json)?
        }
    };
    check_dimensions(&history, &config.board)?;
    let mut state = history.replay().context("replaying move history")?;
    if let Some(outcome) = state.outcome() {
        bail!("game is already over ({outcome:?})");
    }

    let piece = state.current_piece();
    let mut agent = build_agent(&config.bot);
    let coord = agent
        .select_move(state.board(), piece)
        .with_context(|| format!("{} could not choose a move", agent.name()))?;
    state.apply_move_mut(coord)?;
    info!(
        "{} chose {} for {} after {} moves",
        agent.name(),
        coord,
        piece,
        history.len()
    );

    let update = Update::after(&state, Move::new(piece, coord));
    println!("{}", serde_json::to_string(&update)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use side_stacker::Coord;

    fn play(rows: usize, cols: usize, coords: &[(usize, usize)]) -> (GameState, Move) {
        let mut state = GameState::new(rows, cols).unwrap();
        let mut last = None;
        for &(row, col) in coords {
            let piece = state.current_piece();
            state.apply_move_mut(Coord::new(row, col)).unwrap();
            last = Some(Move::new(piece, Coord::new(row, col)));
        }
        (state, last.unwrap())
    }

    #[test]
    fn test_full_row_has_no_open_ends() {
        let (state, mv) = play(2, 4, &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        let json = serde_json::to_string(&Update::after(&state, mv)).unwrap();
        assert_eq!(
            json,
            r#"{"move":{"piece":2,"row":0,"col":3},"turn":1,"availableMoves":[[],[0,3]],"winningMove":false}"#
        );
    }

    #[test]
    fn test_winning_move_is_flagged() {
        let (state, mv) = play(
            2,
            4,
            &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2), (0, 3)],
        );
        let json = serde_json::to_string(&Update::after(&state, mv)).unwrap();
        assert_eq!(
            json,
            r#"{"move":{"piece":1,"row":0,"col":3},"turn":2,"availableMoves":[[],[3,3]],"winningMove":true}"#
        );
    }

    #[test]
    fn test_history_must_match_configured_board() {
        let board = BoardConfig::default();
        assert!(check_dimensions(&MoveHistory::new(7, 7), &board).is_ok());

        let err = check_dimensions(&MoveHistory::new(5, 6), &board)
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "move history is for a 5x6 board but the configured board is 7x7"
        );
    }
}
