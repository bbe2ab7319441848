use std::fmt;

use crate::solver::{domain::Domain, grid::GridSpec, trail::Trail};

pub type VariableId = usize;
pub type ConstraintId = usize;

/// One puzzle cell: an identity, a board position and the domain of values
/// still legal for it. A variable counts as assigned exactly when its domain
/// is a singleton.
///
/// Domains are only ever replaced through the network's trail-recording
/// mutators, so every change is undoable.
#[derive(Clone, Debug)]
pub struct Variable {
    id: VariableId,
    row: usize,
    col: usize,
    domain: Domain,
}

impl Variable {
    pub fn id(&self) -> VariableId {
        self.id
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn domain(&self) -> &Domain {
        &self.domain
    }

    pub fn is_assigned(&self) -> bool {
        self.domain.is_singleton()
    }

    /// The assigned value, if the domain has narrowed to one candidate.
    pub fn assignment(&self) -> Option<i32> {
        self.domain.value()
    }

    fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// An all-different clique: the listed variables must take pairwise-distinct
/// values. Built once from the grid's row/column/block structure and never
/// mutated afterwards.
#[derive(Clone, Debug)]
pub struct Constraint {
    label: String,
    vars: Vec<VariableId>,
}

impl Constraint {
    pub fn new(label: impl Into<String>, vars: Vec<VariableId>) -> Self {
        Self {
            label: label.into(),
            vars,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn variables(&self) -> &[VariableId] {
        &self.vars
    }

    pub fn contains(&self, variable: VariableId) -> bool {
        self.vars.contains(&variable)
    }
}

/// Owns every variable and constraint of one puzzle and answers the
/// adjacency queries the strategies lean on. Constraint membership and the
/// (symmetric, deduplicated) neighbour relation are cached at construction.
#[derive(Debug)]
pub struct ConstraintNetwork {
    side: usize,
    variables: Vec<Variable>,
    constraints: Vec<Constraint>,
    memberships: Vec<Vec<ConstraintId>>,
    neighbours: Vec<Vec<VariableId>>,
}

impl ConstraintNetwork {
    /// Builds the network for a validated grid: one variable per cell (givens
    /// get singleton domains, open cells the full `1..=side` range) and one
    /// all-different constraint per row, column and block.
    pub fn from_grid(grid: &GridSpec) -> Self {
        let side = grid.side();
        let mut variables = Vec::with_capacity(side * side);
        for row in 0..side {
            for col in 0..side {
                let given = grid.cell(row, col);
                let domain = if given == 0 {
                    Domain::full(side as i32)
                } else {
                    Domain::singleton(given)
                };
                variables.push(Variable {
                    id: row * side + col,
                    row,
                    col,
                    domain,
                });
            }
        }

        let mut constraints = Vec::with_capacity(3 * side);
        for row in 0..side {
            let vars = (0..side).map(|col| row * side + col).collect();
            constraints.push(Constraint::new(format!("row {}", row), vars));
        }
        for col in 0..side {
            let vars = (0..side).map(|row| row * side + col).collect();
            constraints.push(Constraint::new(format!("col {}", col), vars));
        }
        let block_rows = grid.block_rows();
        let block_cols = grid.block_cols();
        for band in 0..side / block_rows {
            for stack in 0..side / block_cols {
                let mut vars = Vec::with_capacity(side);
                for row in band * block_rows..(band + 1) * block_rows {
                    for col in stack * block_cols..(stack + 1) * block_cols {
                        vars.push(row * side + col);
                    }
                }
                constraints.push(Constraint::new(
                    format!("block {}", band * (side / block_cols) + stack),
                    vars,
                ));
            }
        }

        let mut memberships = vec![Vec::new(); variables.len()];
        for (constraint_id, constraint) in constraints.iter().enumerate() {
            for &var in constraint.variables() {
                memberships[var].push(constraint_id);
            }
        }

        let mut neighbours = Vec::with_capacity(variables.len());
        for id in 0..variables.len() {
            let mut adjacent: Vec<VariableId> = memberships[id]
                .iter()
                .flat_map(|&c| constraints[c].variables().iter().copied())
                .filter(|&other| other != id)
                .collect();
            adjacent.sort_unstable();
            adjacent.dedup();
            neighbours.push(adjacent);
        }

        Self {
            side,
            variables,
            constraints,
            memberships,
            neighbours,
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id]
    }

    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    pub fn constraint(&self, id: ConstraintId) -> &Constraint {
        &self.constraints[id]
    }

    /// Every variable sharing a constraint with `id`, deduplicated and
    /// excluding `id` itself.
    pub fn neighbours_of(&self, id: VariableId) -> &[VariableId] {
        &self.neighbours[id]
    }

    /// The constraints listing `id`.
    pub fn constraints_containing(&self, id: VariableId) -> &[ConstraintId] {
        &self.memberships[id]
    }

    pub fn unassigned_count(&self) -> usize {
        self.variables.iter().filter(|v| !v.is_assigned()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.variables.iter().all(Variable::is_assigned)
    }

    /// The board as a row-major value sequence, `0` for unassigned cells.
    pub fn snapshot(&self) -> Vec<i32> {
        self.variables
            .iter()
            .map(|v| v.assignment().unwrap_or(0))
            .collect()
    }

    /// Replaces a variable's domain, recording the prior domain on the trail
    /// first. Both "assign one value" and wholesale pruning go through here.
    pub fn set_domain(&mut self, trail: &mut Trail, id: VariableId, domain: Domain) {
        trail.record(id, self.variables[id].domain.clone());
        self.variables[id].set_domain(domain);
    }

    /// Narrows a variable to a single tentative value.
    pub fn assign(&mut self, trail: &mut Trail, id: VariableId, value: i32) {
        self.set_domain(trail, id, Domain::singleton(value));
    }

    /// Removes one candidate from a variable's domain. Absent values are a
    /// no-op and leave no trail record; returns whether anything changed.
    pub fn prune(&mut self, trail: &mut Trail, id: VariableId, value: i32) -> bool {
        if !self.variables[id].domain.contains(value) {
            return false;
        }
        trail.record(id, self.variables[id].domain.clone());
        self.variables[id].domain.remove(value);
        true
    }

    /// Rolls back every domain change recorded since the trail's most recent
    /// breadcrumb, restoring directly assigned and propagation-pruned
    /// variables alike to their pre-breadcrumb domains.
    pub fn rollback(&mut self, trail: &mut Trail) {
        for record in trail.undo() {
            self.variables[record.variable].set_domain(record.domain);
        }
    }
}
