use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::{HashMap, HashSet};

/// Greedy colorings of undirected graphs.
pub trait GreedyColoring
where
    Self: Graph + Sized,
{
    /// Colors nodes so that neighbors never share a color.
    ///
    /// In enumeration order, each node takes the lowest color not taken by
    /// any of its already-colored neighbors, which `apply` is told about.
    /// Returns how many colors are used.
    /// Not necessarily minimal, but the same enumeration order always
    /// gives the same coloring.
    ///
    /// Self-loops are ignored.
    ///
    /// ```rust
    /// use algokit::{algorithm::*, graph::*};
    ///
    /// let g = LiteralGraph::parse("A>B, B>C, C>A, C>D", false).unwrap();
    /// let mut colors = vec![];
    /// let n = g.greedy_coloring(|v, c| colors.push((v.clone(), c))).unwrap();
    /// assert_eq!(n, 3);
    /// assert_eq!(
    ///     colors,
    ///     vec![
    ///         ("A".to_owned(), 0),
    ///         ("B".to_owned(), 1),
    ///         ("C".to_owned(), 2),
    ///         ("D".to_owned(), 0),
    ///     ]
    /// );
    /// ```
    fn greedy_coloring<A>(&self, mut apply: A) -> Result<usize>
    where
        A: FnMut(&Self::Node, usize),
    {
        if self.is_directed() {
            return Err(Error::unsupported("coloring a directed graph"));
        }
        let mut colors = HashMap::with_hasher(RandomState::new());
        let mut used = 0;
        for v in self.nodes() {
            let taken: HashSet<usize, RandomState> = self
                .connections(&v)
                .filter_map(|c| colors.get(&c.to).copied())
                .collect();
            let mut color = 0;
            while taken.contains(&color) {
                color += 1;
            }
            apply(&v, color);
            colors.insert(v, color);
            used = used.max(color + 1);
        }
        tracing::debug!(colors = used, "greedy coloring");
        Ok(used)
    }
}

impl<G: Graph> GreedyColoring for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[quickcheck]
    fn neighbors_differ(rg: RandomGraph) {
        if rg.directed {
            return;
        }
        let g = rg.graph();
        let mut colors = HashMap::new();
        let n = g
            .greedy_coloring(|v, c| {
                colors.insert(v.clone(), c);
            })
            .unwrap();
        assert_eq!(colors.len(), g.node_count());
        assert!(colors.values().all(|c| *c < n));
        for v in g.nodes() {
            for c in g.connections(&v).filter(|c| c.from != c.to) {
                assert_ne!(colors[&c.from], colors[&c.to], "{:?}", c);
            }
        }
    }

    #[test]
    fn checkerboard() {
        let g = MatrixGraph::new(vec![vec![(); 4]; 3]).unwrap();
        let mut board = vec![vec![9; 4]; 3];
        let n = g.greedy_coloring(|v, c| board[v.row][v.col] = c).unwrap();
        assert_eq!(n, 2);
        assert_eq!(
            board,
            vec![vec![0, 1, 0, 1], vec![1, 0, 1, 0], vec![0, 1, 0, 1]]
        );
    }

    #[test]
    fn empty() {
        let g = LiteralGraph::new(false);
        assert_eq!(g.greedy_coloring(|_, _| unreachable!()), Ok(0));
    }

    #[test]
    fn directed() {
        let g = LiteralGraph::parse("A>B", true).unwrap();
        assert!(matches!(
            g.greedy_coloring(|_, _| {}),
            Err(Error::UnsupportedOperation(_))
        ));
    }
}
