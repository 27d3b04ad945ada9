use crate::graph::*;
use crate::{Error, Result};
use std::cmp::Ordering;

/// A dense rectangular matrix seen as an undirected graph.
///
/// Every cell is a node whose value is the cell content.
/// Cells are connected to their neighbors as told by a [Neighborhood],
/// and each step costs 1.
/// Potential weights are the fewest steps between two cells,
/// so heuristic-guided searches apply.
///
/// Nodes are enumerated row by row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGraph<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
    neighborhood: Neighborhood,
    read_only: bool,
}

impl<T> MatrixGraph<T> {
    /// Builds a writable graph with orthogonal neighbors.
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self> {
        let (rows, cols, cells) = grid::flatten(rows)?;
        Ok(Self {
            rows,
            cols,
            cells,
            neighborhood: Neighborhood::default(),
            read_only: false,
        })
    }

    /// Builds a graph whose values cannot be changed.
    pub fn read_only(rows: Vec<Vec<T>>) -> Result<Self> {
        let mut res = Self::new(rows)?;
        res.read_only = true;
        Ok(res)
    }

    pub fn with_neighborhood(mut self, neighborhood: Neighborhood) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Copies the cells back into rows.
    pub fn to_rows(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        self.cells.chunks(self.cols).map(|r| r.to_vec()).collect()
    }

    fn index(&self, cell: &Cell) -> Option<usize> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(cell.row * self.cols + cell.col)
        } else {
            None
        }
    }
}

impl<T> Graph for MatrixGraph<T> {
    type Node = Cell;
    type Cost = u64;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let cols = self.cols;
        let it = (0..self.rows * cols).map(move |i| Cell::new(i / cols, i % cols));
        Box::new(it)
    }

    fn contains_node(&self, node: &Cell) -> bool {
        self.index(node).is_some()
    }

    fn connections(&self, from: &Cell) -> Box<dyn Iterator<Item = Connection<Cell, u64>> + '_> {
        if !self.contains_node(from) {
            return Box::new(std::iter::empty());
        }
        let from = *from;
        let it = self
            .neighborhood
            .offsets()
            .iter()
            .filter_map(move |d| from.offset(*d, self.rows, self.cols))
            .map(move |to| Connection::new(from, to, 1));
        Box::new(it)
    }

    fn node_count(&self) -> usize {
        self.cells.len()
    }

    fn zero_cost(&self) -> u64 {
        0
    }

    fn combine_costs(&self, a: &u64, b: &u64) -> u64 {
        a + b
    }

    fn compare_costs(&self, a: &u64, b: &u64) -> Ordering {
        a.cmp(b)
    }

    fn supports_potential_weight(&self) -> bool {
        true
    }

    fn potential_weight(&self, from: &Cell, to: &Cell) -> Option<u64> {
        Some(self.neighborhood.distance(from, to))
    }
}

impl<T> ValuedGraph for MatrixGraph<T> {
    type Value = T;

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn value(&self, node: &Cell) -> Result<&T> {
        self.index(node)
            .map(|i| &self.cells[i])
            .ok_or_else(|| Error::invalid_node(node))
    }

    fn set_value(&mut self, node: &Cell, value: T) -> Result<()> {
        if self.read_only {
            return Err(Error::unsupported("writing into a read-only matrix"));
        }
        let i = self.index(node).ok_or_else(|| Error::invalid_node(node))?;
        self.cells[i] = value;
        Ok(())
    }
}
