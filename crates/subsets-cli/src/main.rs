//! Standalone generator and solver for the Subsets puzzle.
//!
//! Without a description the tool generates a puzzle and prints its game
//! ID; with a `<params>:<description>` game ID it validates the
//! description, runs the solver, and prints the resulting board as text.

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use subsets_core::{Board, GameParams, Status};
use subsets_generator::PuzzleGenerator;
use subsets_solver::Solver;

#[derive(Parser, Debug)]
#[command(name = "subsets", about = "Subsets puzzle generator and solver")]
struct Cli {
    /// Print solver rule traces while solving.
    #[arg(short, long)]
    verbose: bool,
    /// Seed for puzzle generation; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Parameter string, optionally followed by ":<description>".
    game_id: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    let (params_str, desc) = match cli.game_id.as_deref() {
        Some(id) => match id.split_once(':') {
            Some((params, desc)) => (params, Some(desc)),
            None => (id, None),
        },
        None => ("", None),
    };

    let params = if params_str.is_empty() {
        GameParams::default()
    } else {
        GameParams::decode(params_str)
    };
    if let Err(err) = params.validate() {
        eprintln!("Parameters are invalid");
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    match desc {
        None => generate(params, cli.seed),
        Some(desc) => solve(params, desc),
    }
}

fn generate(params: GameParams, seed: Option<u64>) -> ExitCode {
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs())
    });

    let solver = Solver::with_all_rules();
    let generator = PuzzleGenerator::new(&solver);
    let puzzle = generator.generate_with_seed(params, seed);

    println!("Generating puzzle with parameters {params}");
    println!("Game ID: {}", puzzle.desc);
    ExitCode::SUCCESS
}

fn solve(params: GameParams, desc: &str) -> ExitCode {
    let board = match Board::from_desc(params, desc) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("Description is invalid");
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = Solver::with_all_rules();
    let mut solved = board;
    let status = solver.solve(&mut solved);

    if status == Status::Invalid {
        println!("Puzzle is INVALID.");
    }
    print!("{solved}");
    if status == Status::Unfinished {
        println!("Solution not found.");
    }
    ExitCode::SUCCESS
}
