use crate::graph::*;
use crate::{Error, Result};
use std::cmp::Ordering;

/// A boolean maze where `true` cells are open and `false` cells are walls.
///
/// Only open cells are nodes.
/// They connect orthogonally to adjacent open cells, each step costing 1,
/// with Manhattan distances as potential weights.
/// Values are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeGraph {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl MazeGraph {
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self> {
        let (rows, cols, cells) = grid::flatten(rows)?;
        Ok(Self { rows, cols, cells })
    }

    /// Reads a maze drawn with `.` for open cells and `#` for walls,
    /// one line per row.
    pub fn parse(text: &str) -> Result<Self> {
        let rows = text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.chars()
                    .map(|c| match c {
                        '.' => Ok(true),
                        '#' => Ok(false),
                        _ => Err(Error::InvalidArgument(format!(
                            "unexpected maze character {:?}",
                            c
                        ))),
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    fn is_open(&self, cell: &Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols && self.cells[cell.row * self.cols + cell.col]
    }
}

impl Graph for MazeGraph {
    type Node = Cell;
    type Cost = u64;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let cols = self.cols;
        let it = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, open)| **open)
            .map(move |(i, _)| Cell::new(i / cols, i % cols));
        Box::new(it)
    }

    fn contains_node(&self, node: &Cell) -> bool {
        self.is_open(node)
    }

    fn connections(&self, from: &Cell) -> Box<dyn Iterator<Item = Connection<Cell, u64>> + '_> {
        if !self.is_open(from) {
            return Box::new(std::iter::empty());
        }
        let from = *from;
        let it = Neighborhood::Orthogonal
            .offsets()
            .iter()
            .filter_map(move |d| from.offset(*d, self.rows, self.cols))
            .filter(move |to| self.is_open(to))
            .map(move |to| Connection::new(from, to, 1));
        Box::new(it)
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
        Some(from.manhattan(to))
    }
}

impl ValuedGraph for MazeGraph {
    type Value = bool;

    fn is_read_only(&self) -> bool {
        true
    }

    fn value(&self, node: &Cell) -> Result<&bool> {
        if self.is_open(node) {
            Ok(&self.cells[node.row * self.cols + node.col])
        } else {
            Err(Error::invalid_node(node))
        }
    }

    fn set_value(&mut self, _node: &Cell, _value: bool) -> Result<()> {
        Err(Error::unsupported("mazes are read-only"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_not_nodes() {
        let g = MazeGraph::parse(
            "
            .#.
            ...
            ",
        )
        .unwrap();
        assert_eq!(g.node_count(), 5);
        assert!(!g.contains_node(&Cell::new(0, 1)));
        let trial: Vec<_> = g.connections(&Cell::new(0, 0)).map(|c| c.to).collect();
        assert_eq!(trial, vec![Cell::new(1, 0)]);
        assert_eq!(g.connections(&Cell::new(0, 1)).count(), 0);
    }

    #[test]
    fn bad_characters() {
        assert!(matches!(
            MazeGraph::parse(".x."),
            Err(Error::InvalidArgument(_))
        ));
    }
}
