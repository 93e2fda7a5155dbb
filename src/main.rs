use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use side_stacker::ai::{build_agent, Agent};
use side_stacker::config::{AppConfig, Policy};
use side_stacker::game::{GameOutcome, GameState};
use side_stacker::{Coord, Piece};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Side {
    One,
    Two,
}

impl From<Side> for Piece {
    fn from(side: Side) -> Piece {
        match side {
            Side::One => Piece::PlayerOne,
            Side::Two => Piece::PlayerTwo,
        }
    }
}

/// Play side-stacker in the terminal against the bot or a friend.
#[derive(Parser)]
#[command(
    name = "sidestacker",
    version,
    about = "Play side-stacker in the terminal"
)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "sidestacker.toml")]
    config: PathBuf,

    /// Override board rows
    #[arg(long)]
    rows: Option<usize>,

    /// Override board columns
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

    /// Which side the human plays (player one moves first)
    #[arg(long, value_enum, default_value = "one")]
    play_as: Side,

    /// Two humans share the terminal; no bot
    #[arg(long)]
    friend: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: log::Level,

    /// Print the default configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.log_level)
        .context("initializing logger")?;

    if cli.print_config {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
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

    let mut bot = if cli.friend {
        None
    } else {
        Some(build_agent(&config.bot))
    };
    let human = Piece::from(cli.play_as);
    let mut state = config.board.new_game()?;
    info!(
        "new {}x{} game, opponent: {}",
        config.board.rows,
        config.board.cols,
        bot.as_ref().map_or("friend", |b| b.name())
    );

    play(&mut state, &mut bot, human)
}

fn play(state: &mut GameState, bot: &mut Option<Box<dyn Agent>>, human: Piece) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !state.is_terminal() {
        println!("\n{}", state.board());
        let piece = state.current_piece();

        let coord = match bot.as_mut() {
            Some(agent) if piece != human => {
                let coord = agent
                    .select_move(state.board(), piece)
                    .context("bot failed to choose a move")?;
                println!("{} ({}) plays {}", piece, piece.symbol(), coord);
                state
                    .apply_move_mut(coord)
                    .with_context(|| format!("bot played illegal move {coord}"))?;
                continue;
            }
            _ => {
                print!(
                    "{} ({}), your move [row col, q to quit]: ",
                    piece,
                    piece.symbol()
                );
                io::stdout().flush()?;
                let Some(line) = lines.next() else {
                    return Ok(());
                };
                let line = line.context("reading move")?;
                if line.trim().eq_ignore_ascii_case("q") {
                    return Ok(());
                }
                match parse_coord(&line) {
                    Some(coord) => coord,
                    None => {
                        println!("Enter a row and a column, e.g. `3 0`");
                        continue;
                    }
                }
            }
        };

        if let Err(err) = state.apply_move_mut(coord) {
            println!(
                "Illegal move: {err}. Playable: {}",
                format_moves(&state.available_moves())
            );
        }
    }

    println!("\n{}", state.board());
    match state.outcome() {
        Some(GameOutcome::Winner(piece)) => println!("{piece} wins!"),
        Some(GameOutcome::Draw) => println!("It's a draw!"),
        None => {}
    }
    Ok(())
}

fn parse_coord(line: &str) -> Option<Coord> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Coord::new(row, col))
}

fn format_moves(moves: &[Coord]) -> String {
    moves
        .iter()
        .map(|c| format!("{} {}", c.row, c.col))
        .collect::<Vec<_>>()
        .join(", ")
}
