//! Textual rendering of a solve run for human and script consumption.

use prettytable::{Cell, Row, Table};

use crate::solver::{engine::SearchOutcome, grid::GridSpec};

/// Renders the outcome as a small summary table.
pub fn render_outcome_table(outcome: &SearchOutcome) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Status"),
        Cell::new("Assignments"),
        Cell::new("Backtracks"),
        Cell::new("Search Start (ms)"),
        Cell::new("Search Done (ms)"),
        Cell::new("Solution Time (ms)"),
    ]));
    table.add_row(Row::new(vec![
        Cell::new(outcome.status.label()),
        Cell::new(&outcome.stats.assignments.to_string()),
        Cell::new(&outcome.stats.backtracks.to_string()),
        Cell::new(&outcome.stats.search_start_ms.to_string()),
        Cell::new(&outcome.stats.search_done_ms.to_string()),
        Cell::new(&outcome.stats.solution_time_ms.to_string()),
    ]));
    table.to_string()
}

/// Renders the `KEY=value` block downstream scripts parse. One key per line,
/// timestamps in milliseconds relative to the run origin.
pub fn render_stats_block(outcome: &SearchOutcome) -> String {
    let solution = outcome
        .grid
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!(
        "TOTAL_START=0\n\
         SEARCH_START={}\n\
         SEARCH_DONE={}\n\
         SOLUTION_TIME={}\n\
         STATUS={}\n\
         SOLUTION=({})\n\
         COUNT_NODES={}\n\
         COUNT_DEADENDS={}\n",
        outcome.stats.search_start_ms,
        outcome.stats.search_done_ms,
        outcome.stats.solution_time_ms,
        outcome.status.label(),
        solution,
        outcome.stats.assignments,
        outcome.stats.backtracks,
    )
}

/// Pretty-prints a row-major board with block separators; `.` marks an
/// unassigned cell.
pub fn render_grid(grid: &[i32], spec: &GridSpec) -> String {
    let side = spec.side();
    let mut out = String::new();
    for row in 0..side {
        if row != 0 && row % spec.block_rows() == 0 {
            let dashes = "-".repeat(2 * side + 2 * (side / spec.block_cols() - 1) - 1);
            out.push_str(&dashes);
            out.push('\n');
        }
        for col in 0..side {
            if col != 0 && col % spec.block_cols() == 0 {
                out.push_str("| ");
            }
            let value = grid[row * side + col];
            if value == 0 {
                out.push_str(". ");
            } else {
                out.push_str(&format!("{} ", value));
            }
        }
        out.pop();
        out.push('\n');
    }
    out
}
