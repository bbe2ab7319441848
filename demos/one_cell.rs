//! Minimal embedding: build a grid, solve it, print the report.

use filum::solver::{
    engine::{SearchEngine, SolverConfig},
    grid::GridSpec,
    network::ConstraintNetwork,
    report,
};

fn main() -> Result<(), filum::error::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let grid = GridSpec::new(
        4,
        2,
        2,
        vec![
            1, 2, 3, 4, //
            3, 4, 1, 2, //
            2, 1, 4, 3, //
            4, 3, 2, 0,
        ],
    )?;
    let network = ConstraintNetwork::from_grid(&grid);
    let mut engine = SearchEngine::new(network, SolverConfig::default());
    let outcome = engine.solve();

    println!("{}", report::render_grid(&outcome.grid, &grid));
    println!("{}", report::render_outcome_table(&outcome));
    Ok(())
}
