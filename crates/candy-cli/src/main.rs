//! Headless match-three driver.
//!
//! Loads a board from its text form (or generates one), resolves any runs it
//! starts with, then repeatedly plays the first available swap and resolves
//! the resulting cascade, printing each step and a running score.
//!
//! # Usage
//!
//! ```sh
//! cargo run -p candy-cli -- --width 8 --height 8 --seed 42 --swaps 10
//! ```
//!
//! Play a fixed level:
//!
//! ```sh
//! cargo run -p candy-cli -- --level level.txt
//! ```
//!
//! Set `RUST_LOG=debug` to see the engine's own logging.

use std::{
    fs, io,
    path::{Path, PathBuf},
    process,
};

use candy_core::{FieldParseError, GameField, Position, TileCell};
use candy_game::{GameFlow, InstantAnimator, SwapOutcome, block_on};
use candy_mechanics::{GameMechanics, RandomTileSource, TileSource as _};
use clap::Parser;

mod score;
mod terminal;

use self::{score::ScoreBoard, terminal::TerminalAnimator};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Board to play, in bracketed text form. A random board is generated
    /// when omitted.
    #[arg(long, value_name = "FILE")]
    level: Option<PathBuf>,

    /// Width of a generated board.
    #[arg(long, value_name = "COLUMNS", default_value_t = 8,
          value_parser = clap::value_parser!(u16).range(1..=256))]
    width: u16,

    /// Height of a generated board.
    #[arg(long, value_name = "ROWS", default_value_t = 8,
          value_parser = clap::value_parser!(u16).range(1..=256))]
    height: u16,

    /// Seed for board generation and refills. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Maximum number of swaps to play.
    #[arg(long, value_name = "COUNT", default_value_t = 20)]
    swaps: usize,

    /// Only print the final summary.
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read level {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
    #[display("invalid level: {_0}")]
    Parse(#[from] FieldParseError),
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("using seed {seed}");
    let mut source = RandomTileSource::from_seed(seed);
    let verbose = !args.quiet;

    let field = if let Some(path) = &args.level {
        load_level(path)?
    } else {
        let mut field = GameField::new(usize::from(args.width), usize::from(args.height));
        let mut mechanics = GameMechanics::new(&mut field);
        let inserts = mechanics.new_tile_moves(&mut source);
        mechanics.insert(&inserts);
        field
    };
    let field = settle(field, &mut source);

    if verbose {
        println!("seed {seed}");
        println!("{field}\n");
    }

    let mut flow = GameFlow::new(
        field,
        TerminalAnimator::new(verbose),
        ScoreBoard::new(verbose),
        source,
    );
    let mut played = 0;
    while played < args.swaps {
        let Some((a, b)) = first_swap(flow.field()) else {
            log::info!("no swap left after {played} turns");
            if verbose {
                println!("no swap left");
            }
            break;
        };
        played += 1;
        if verbose {
            println!("turn {played}:");
        }
        match block_on(flow.on_drag_tile_event(a, b)) {
            SwapOutcome::Resolved { rush } => log::debug!("turn {played} ended at rush {rush}"),
            outcome => log::warn!("turn {played}: swap {a} <-> {b} {outcome}"),
        }
        if verbose {
            println!("{}\n", flow.field());
        }
    }

    let score = flow.deletion_listener();
    println!(
        "{played} swaps, {} cells cleared, best rush {}, score {}",
        score.cleared(),
        score.best_rush(),
        score.score()
    );
    Ok(())
}

fn load_level(path: &Path) -> Result<GameField, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_owned(),
        source,
    })?;
    Ok(text.parse::<GameField>()?)
}

/// Resolves the runs a fresh board starts with, without scoring them.
fn settle(field: GameField, source: &mut RandomTileSource) -> GameField {
    let mut flow = GameFlow::new(
        field,
        InstantAnimator,
        |_rush: u32, _removed: &[TileCell]| {},
        |column: i32| source.next_tile(column),
    );
    block_on(flow.check_new_field());
    flow.into_field()
}

fn first_swap(field: &GameField) -> Option<(Position, Position)> {
    let mut field = field.clone();
    GameMechanics::new(&mut field).possible_swaps().into_iter().next()
}
