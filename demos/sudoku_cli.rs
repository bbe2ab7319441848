//! Demo driver showing the intended launch pattern: the engine runs on a
//! worker thread while the caller enforces a wall-clock deadline and, if the
//! worker is still going, requests cooperative cancellation.
//!
//! Puzzle files are demo glue, not a product surface: the first line is
//! `N P Q`, followed by N rows of N numbers (`0` for an open cell).

use std::error::Error;
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use filum::solver::{
    consistency::ConsistencyPolicy,
    engine::{SearchEngine, SolverConfig},
    grid::GridSpec,
    heuristics::{ValuePolicy, VariablePolicy},
    network::ConstraintNetwork,
    report,
};

#[derive(Parser)]
#[command(about = "Solve an all-different puzzle with a wall-clock deadline")]
struct Args {
    /// Puzzle file; a built-in 9x9 puzzle is used when omitted.
    puzzle: Option<PathBuf>,

    /// Deadline in seconds.
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    #[arg(long, value_enum, default_value_t = VariableArg::MrvDegree)]
    variable: VariableArg,

    #[arg(long, value_enum, default_value_t = ValueArg::Lcv)]
    value: ValueArg,

    #[arg(long, value_enum, default_value_t = ConsistencyArg::Fc)]
    consistency: ConsistencyArg,

    /// Emit the outcome as JSON instead of the textual report.
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum VariableArg {
    InOrder,
    Mrv,
    Degree,
    MrvDegree,
}

#[derive(Clone, Copy, ValueEnum)]
enum ValueArg {
    InOrder,
    Lcv,
}

#[derive(Clone, Copy, ValueEnum)]
enum ConsistencyArg {
    None,
    Fc,
    NakedPair,
    Ac,
}

fn parse_puzzle(text: &str) -> Result<GridSpec, Box<dyn Error>> {
    let mut numbers = text.split_whitespace().map(str::parse::<i32>);
    let side = numbers.next().ok_or("empty puzzle file")?? as usize;
    let block_rows = numbers.next().ok_or("missing block rows")?? as usize;
    let block_cols = numbers.next().ok_or("missing block cols")?? as usize;
    let cells = numbers.collect::<Result<Vec<_>, _>>()?;
    Ok(GridSpec::new(side, block_rows, block_cols, cells)?)
}

const BUILTIN: &str = "9 3 3
5 3 0 0 7 0 0 0 0
6 0 0 1 9 5 0 0 0
0 9 8 0 0 0 0 6 0
8 0 0 0 6 0 0 0 3
4 0 0 8 0 3 0 0 1
7 0 0 0 2 0 0 0 6
0 6 0 0 0 0 2 8 0
0 0 0 4 1 9 0 0 5
0 0 0 0 8 0 0 7 9";

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let text = match &args.puzzle {
        Some(path) => std::fs::read_to_string(path)?,
        None => BUILTIN.to_string(),
    };
    let grid = parse_puzzle(&text)?;
    let timeout = Duration::from_secs(args.timeout);

    let config = SolverConfig {
        variable_policy: match args.variable {
            VariableArg::InOrder => VariablePolicy::InOrder,
            VariableArg::Mrv => VariablePolicy::MinimumRemainingValues,
            VariableArg::Degree => VariablePolicy::HighestDegree,
            VariableArg::MrvDegree => VariablePolicy::MrvWithDegree,
        },
        value_policy: match args.value {
            ValueArg::InOrder => ValuePolicy::InOrder,
            ValueArg::Lcv => ValuePolicy::LeastConstraining,
        },
        consistency_policy: match args.consistency {
            ConsistencyArg::None => ConsistencyPolicy::AssignmentsOnly,
            ConsistencyArg::Fc => ConsistencyPolicy::ForwardChecking,
            ConsistencyArg::NakedPair => ConsistencyPolicy::NakedPair,
            ConsistencyArg::Ac => ConsistencyPolicy::ArcConsistency,
        },
        timeout,
    };

    let mut engine = SearchEngine::new(ConstraintNetwork::from_grid(&grid), config);
    let token = engine.cancellation_token();

    // The engine enforces its own deadline; the external cancel is a second
    // line of defence in case a single consistency pass overruns it.
    let (sender, receiver) = mpsc::channel();
    let worker = thread::spawn(move || {
        let _ = sender.send(engine.solve());
    });
    let outcome = match receiver.recv_timeout(timeout + Duration::from_secs(1)) {
        Ok(outcome) => outcome,
        Err(_) => {
            token.cancel();
            receiver.recv()?
        }
    };
    worker.join().expect("worker thread panicked");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        println!("{}", report::render_grid(&outcome.grid, &grid));
        println!("{}", report::render_outcome_table(&outcome));
        print!("{}", report::render_stats_block(&outcome));
    }
    Ok(())
}
