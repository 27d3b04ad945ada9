use crate::graph::*;
use std::cmp::Ordering;

const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Squares of a chess board connected by knight moves.
///
/// Each move costs 1.
/// A knight changes the Manhattan distance by at most 3 per move,
/// so a third of it, rounded up, is an admissible potential weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnightGraph {
    rows: usize,
    cols: usize,
}

impl KnightGraph {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// A standard 8x8 board.
    pub fn chess_board() -> Self {
        Self::new(8, 8)
    }
}

impl Graph for KnightGraph {
    type Node = Cell;
    type Cost = u64;

    fn is_directed(&self) -> bool {
        false
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = Cell> + '_> {
        let cols = self.cols;
        Box::new((0..self.rows * cols).map(move |i| Cell::new(i / cols, i % cols)))
    }

    fn contains_node(&self, node: &Cell) -> bool {
        node.row < self.rows && node.col < self.cols
    }

    fn connections(&self, from: &Cell) -> Box<dyn Iterator<Item = Connection<Cell, u64>> + '_> {
        if !self.contains_node(from) {
            return Box::new(std::iter::empty());
        }
        let from = *from;
        let it = KNIGHT_MOVES
            .iter()
            .filter_map(move |d| from.offset(*d, self.rows, self.cols))
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
        Some((from.manhattan(to) + 2) / 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corner_has_two_moves() {
        let g = KnightGraph::chess_board();
        let trial: Vec<_> = g.connections(&Cell::new(0, 0)).map(|c| c.to).collect();
        assert_eq!(trial, vec![Cell::new(1, 2), Cell::new(2, 1)]);
        assert_eq!(g.connections(&Cell::new(4, 4)).count(), 8);
    }
}
