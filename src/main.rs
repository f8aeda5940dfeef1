use anyhow::{Context, Result};
use clap::Parser;
use log::{warn, LevelFilter};
use rand::{rngs::StdRng, SeedableRng};
use rayon::prelude::*;

use std::fs;
use std::io::{stdout, IsTerminal, Write};

use npuzzle::*;

mod cli;
use cli::Args;

mod render;
use render::write_board;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(threads) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let boards = load_boards(&args)?;
    let config = SolverConfig {
        max_expansions: args.max_expansions,
    };

    // each board gets its own solver, so they can run side by side
    let results: Vec<Result<Outcome, SolveError>> = boards
        .par_iter()
        .map(|(_, board)| {
            Solver::new(board.clone())
                .with_config(config.clone())
                .solve()
        })
        .collect();

    let color = !args.no_color && stdout().is_terminal();
    let mut out = stdout().lock();
    for ((label, board), result) in boards.iter().zip(results) {
        report(&mut out, label, board, result, args.quiet, color)?;
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn load_boards(args: &Args) -> Result<Vec<(String, PuzzleState)>> {
    if !args.files.is_empty() {
        return args
            .files
            .iter()
            .map(|path| {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                let board = text
                    .parse::<PuzzleState>()
                    .with_context(|| format!("invalid board in {}", path.display()))?;
                Ok((path.display().to_string(), board))
            })
            .collect();
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let (label, board) = match args.scramble {
        Some(steps) => (
            format!("scrambled {0}x{0}, {1} moves", args.size, steps),
            PuzzleState::scrambled(args.size, steps, &mut rng)?,
        ),
        None => (
            format!("random {0}x{0}", args.size),
            PuzzleState::shuffled(args.size, &mut rng)?,
        ),
    };
    Ok(vec![(label, board)])
}

fn report<W: Write>(
    out: &mut W,
    label: &str,
    board: &PuzzleState,
    result: Result<Outcome, SolveError>,
    quiet: bool,
    color: bool,
) -> Result<()> {
    writeln!(out, "== {}", label)?;
    if !quiet {
        write_board(out, board, color)?;
    }

    match result {
        Ok(Outcome::Solved(solution)) => {
            writeln!(out, "Minimum number of moves = {}", solution.min_moves())?;
            if !quiet {
                for step in solution.boards() {
                    writeln!(out)?;
                    write_board(out, step, color)?;
                }
                let moves: Vec<String> = solution
                    .moves_list()
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                writeln!(out, "\nMoves: {}", moves.join(" "))?;
            }
        }
        Ok(Outcome::Unsolvable { .. }) => writeln!(out, "No solution possible")?,
        Err(err) => {
            warn!("{}: {}", label, err);
            writeln!(out, "Search stopped: {}", err)?;
        }
    }
    writeln!(out)?;
    Ok(())
}
