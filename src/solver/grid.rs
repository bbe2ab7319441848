use crate::error::{Error, Result};

/// Describes the puzzle a network is built from: a `side × side` board
/// partitioned into `block_rows × block_cols` blocks, with `side` row-major
/// initial cell values per row. A cell value of `0` means "unassigned"; the
/// values `1..=side` are givens.
///
/// The collaborator that parses puzzle files produces one of these; the core
/// never touches the file format itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridSpec {
    side: usize,
    block_rows: usize,
    block_cols: usize,
    cells: Vec<i32>,
}

impl GridSpec {
    pub fn new(side: usize, block_rows: usize, block_cols: usize, cells: Vec<i32>) -> Result<Self> {
        if side == 0 || block_rows * block_cols != side {
            return Err(Error::InvalidGrid(format!(
                "block dimensions {}x{} do not partition a side of {}",
                block_rows, block_cols, side
            )));
        }
        if cells.len() != side * side {
            return Err(Error::InvalidGrid(format!(
                "expected {} cells, got {}",
                side * side,
                cells.len()
            )));
        }
        if let Some(bad) = cells.iter().find(|&&c| c < 0 || c > side as i32) {
            return Err(Error::InvalidGrid(format!(
                "cell value {} outside 0..={}",
                bad, side
            )));
        }
        Ok(Self {
            side,
            block_rows,
            block_cols,
            cells,
        })
    }

    /// An entirely unassigned grid, mostly useful in tests.
    pub fn empty(side: usize, block_rows: usize, block_cols: usize) -> Result<Self> {
        Self::new(side, block_rows, block_cols, vec![0; side * side])
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn block_rows(&self) -> usize {
        self.block_rows
    }

    pub fn block_cols(&self) -> usize {
        self.block_cols
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> i32 {
        self.cells[row * self.side + col]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accepts_a_well_formed_grid() {
        let grid = GridSpec::new(4, 2, 2, vec![0; 16]).unwrap();
        assert_eq!(grid.side(), 4);
        assert_eq!(grid.cell(3, 3), 0);
    }

    #[test]
    fn rejects_mismatched_block_dimensions() {
        let err = GridSpec::new(9, 3, 2, vec![0; 81]).unwrap_err();
        assert!(err.to_string().contains("block dimensions"));
    }

    #[test]
    fn rejects_wrong_cell_count() {
        let err = GridSpec::new(4, 2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 cells"));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut cells = vec![0; 16];
        cells[5] = 5;
        let err = GridSpec::new(4, 2, 2, cells).unwrap_err();
        assert!(err.to_string().contains("outside 0..=4"));
    }
}
