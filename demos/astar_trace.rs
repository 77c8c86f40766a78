//! Run one A* search on a text board and print the explored frame.
//!
//! Run: cargo run --bin astar-trace -- board.txt
//!      RUST_LOG=debug cargo run --bin astar-trace -- --size 20

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use gridstar_core::{BoardConfig, Coord};
use gridstar_demos::{Board, parse_board};
use gridstar_paths::{CancelToken, EventRecorder, SearchEvent, SearchOutcome};

#[derive(Parser, Debug)]
#[command(name = "astar-trace", version, about = "Trace an A* search over a square board")]
struct Args {
    /// Board file: `.` open, `#` barrier, `S` start, `G` goal.
    /// Without one, a blank board is searched corner to corner.
    board: Option<PathBuf>,

    /// TOML file with `size` and `cell_size`.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Side length of the blank board (overrides the config file).
    #[arg(long)]
    size: Option<i32>,

    /// Print every search event before the frame.
    #[arg(long)]
    events: bool,
}

fn load_config(args: &Args) -> Result<BoardConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => toml::from_str(&fs::read_to_string(path)?)?,
        None => BoardConfig::default(),
    };
    if let Some(size) = args.size {
        config = config.with_size(size);
    }
    Ok(config)
}

fn load_board(args: &Args, config: BoardConfig) -> Result<Board, Box<dyn Error>> {
    if let Some(path) = &args.board {
        return Ok(parse_board(&fs::read_to_string(path)?, config.cell_size)?);
    }
    let mut board = Board::new(config);
    let last = config.size - 1;
    board.primary(Coord::new(0, 0))?;
    board.primary(Coord::new(last, last))?;
    Ok(board)
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args)?;
    let mut board = load_board(&args, config)?;

    let mut recorder = EventRecorder::new();
    let outcome = board.run_with(&mut recorder, &CancelToken::new())?;

    if args.events {
        for event in recorder.events() {
            match event {
                SearchEvent::EnteredFrontier(c) => println!("open   {c}"),
                SearchEvent::Finalized(c) => println!("closed {c}"),
                SearchEvent::OnPath(c) => println!("path   {c}"),
            }
        }
        println!();
    }

    print!("{}", board.render());
    match &outcome {
        SearchOutcome::PathFound(path) => {
            println!("path: {} cells, {} steps", path.len(), path.cost());
        }
        other => println!("{other}"),
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
