pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The puzzle description handed to the network builder was malformed.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A variable-selection heuristic reported "no variable" even though
    /// unassigned variables remain. This is a broken heuristic contract, not
    /// an exhausted search.
    #[error("variable selection returned no candidate while {unassigned} variables remain unassigned")]
    HeuristicContract { unassigned: usize },
}
