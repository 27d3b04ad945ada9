use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::{HashSet, VecDeque};

/// Breadth-first traversals over a [Graph].
pub trait BreadthFirstSearch
where
    Self: Graph + Sized,
{
    /// Nodes reachable from `start` in breadth-first order,
    /// each with its number of hops from `start`.
    fn breadth_first(&self, start: &Self::Node) -> Result<Vec<(Self::Node, usize)>> {
        if !self.contains_node(start) {
            return Err(Error::invalid_node(start));
        }
        let mut visited = HashSet::with_hasher(RandomState::new());
        let mut queue = VecDeque::new();
        let mut res = vec![];
        visited.insert(start.clone());
        queue.push_back((start.clone(), 0));
        while let Some((node, depth)) = queue.pop_front() {
            for c in self.connections(&node) {
                if visited.insert(c.to.clone()) {
                    queue.push_back((c.to, depth + 1));
                }
            }
            res.push((node, depth));
        }
        Ok(res)
    }
}

impl<G: Graph> BreadthFirstSearch for G {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels() {
        let g = LiteralGraph::parse("A>B, A>C, B>D, C>D, D>A", true).unwrap();
        let trial = g.breadth_first(&"A".to_owned()).unwrap();
        let trial: Vec<_> = trial.iter().map(|(n, d)| (n.as_str(), *d)).collect();
        assert_eq!(trial, vec![("A", 0), ("B", 1), ("C", 1), ("D", 2)]);
    }

    #[test]
    fn knight_hops() {
        let g = KnightGraph::chess_board();
        let trial = g.breadth_first(&Cell::new(0, 0)).unwrap();
        assert_eq!(trial.len(), 64);
        let (_, far) = trial.iter().find(|(c, _)| *c == Cell::new(7, 7)).unwrap();
        assert_eq!(*far, 6);
    }
}
