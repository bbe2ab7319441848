//! Variable- and value-ordering heuristics for the backtracking search.
//!
//! All heuristics here are deterministic: given the same network state they
//! return the same choice every time.

pub mod value;
pub mod variable;

pub use value::{InOrder, LeastConstraining, ValueOrdering, ValuePolicy};
pub use variable::{
    FirstUnassigned, HighestDegree, MinimumRemainingValues, MrvWithDegree, VariablePolicy,
    VariableSelection,
};
