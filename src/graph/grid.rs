//! Geometry shared by graphs laid out on a rectangular grid.
use crate::{Error, Result};

/// A cell on a grid, addressed by row and column.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord, Hash)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(&self, other: &Cell) -> u64 {
        (self.row.abs_diff(other.row) + self.col.abs_diff(other.col)) as u64
    }

    pub fn chebyshev(&self, other: &Cell) -> u64 {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col)) as u64
    }

    /// Moves by `(dr, dc)` if the result stays within `rows` x `cols`.
    pub fn offset(&self, (dr, dc): (isize, isize), rows: usize, cols: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        if row < rows && col < cols {
            Some(Cell { row, col })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "r{}c{}", self.row, self.col)
    }
}

/// Which surrounding cells count as neighbors.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum Neighborhood {
    /// Up, left, right and down.
    #[default]
    Orthogonal,
    /// Orthogonal neighbors plus the four diagonal ones.
    Octile,
}

const ORTHOGONAL: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];
const OCTILE: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

impl Neighborhood {
    pub fn offsets(&self) -> &'static [(isize, isize)] {
        match self {
            Neighborhood::Orthogonal => &ORTHOGONAL,
            Neighborhood::Octile => &OCTILE,
        }
    }

    /// The fewest steps between two cells, which never overestimates.
    pub fn distance(&self, a: &Cell, b: &Cell) -> u64 {
        match self {
            Neighborhood::Orthogonal => a.manhattan(b),
            Neighborhood::Octile => a.chebyshev(b),
        }
    }
}

/// Flattens rows of cells into one vector, checking that they form a
/// non-empty rectangle. Returns `(rows, cols, cells)`.
pub(crate) fn flatten<T>(rows: Vec<Vec<T>>) -> Result<(usize, usize, Vec<T>)> {
    let n_rows = rows.len();
    let n_cols = rows.first().map(|r| r.len()).unwrap_or(0);
    if n_rows == 0 || n_cols == 0 {
        return Err(Error::InvalidArgument("grid must not be empty".to_owned()));
    }
    let mut cells = Vec::with_capacity(n_rows * n_cols);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != n_cols {
            return Err(Error::InvalidArgument(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                n_cols
            )));
        }
        cells.extend(row);
    }
    Ok((n_rows, n_cols, cells))
}
