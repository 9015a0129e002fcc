use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use log::warn;
use rand::{rngs::StdRng, thread_rng, SeedableRng};

use flanders_wheel::config::Cli;
use flanders_wheel::prompt::Prompt;
use flanders_wheel::{Board, ConsoleTrace, PuzzleError, Solver};

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), PuzzleError> {
    let stdin = io::stdin();
    let mut prompt = Prompt::new(stdin.lock(), io::stdout());

    let start = match (cli.difficulty, cli.board) {
        (Some(preset), _) => preset.board()?,
        (None, Some(board)) => board,
        (None, None) if cli.random => match cli.seed {
            Some(seed) => Board::shuffled(&mut StdRng::seed_from_u64(seed)),
            None => Board::shuffled(&mut thread_rng()),
        },
        (None, None) => prompt.start_board()?,
    };
    let method = match cli.algorithm {
        Some(method) => method,
        None => prompt.method()?,
    };

    if !start.is_solvable() {
        warn!("{:?} cannot reach the goal, the search will exhaust every reachable board", start);
    }

    let stdout = io::stdout();
    let styled = !cli.no_color && stdout.is_terminal();
    let mut trace = ConsoleTrace::new(stdout.lock())
        .styled(styled)
        .quiet(cli.quiet);
    Solver::new(method).solve(start, &mut trace);
    trace.finish()?;

    Ok(())
}
