use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::{HashMap, VecDeque};

/// Bipartiteness of undirected graphs.
pub trait Bipartite
where
    Self: Graph + Sized,
{
    /// Whether nodes can be split into two sides with every connection
    /// going across.
    ///
    /// Nodes are 2-colored breadth-first from each uncolored node,
    /// alternating colors along connections.
    /// A self-loop or an odd cycle makes this impossible.
    ///
    /// ```rust
    /// use algokit::{algorithm::*, graph::*};
    ///
    /// let g = LiteralGraph::parse("A>B, B>C, C>A", false).unwrap();
    /// assert_eq!(g.is_bipartite(), Ok(false));
    /// ```
    fn is_bipartite(&self) -> Result<bool> {
        if self.is_directed() {
            return Err(Error::unsupported("bipartite check on a directed graph"));
        }
        let mut sides = HashMap::with_hasher(RandomState::new());
        let mut queue = VecDeque::new();
        for root in self.nodes() {
            if sides.contains_key(&root) {
                continue;
            }
            sides.insert(root.clone(), false);
            queue.push_back(root);
            while let Some(node) = queue.pop_front() {
                let side = sides[&node];
                for c in self.connections(&node) {
                    match sides.get(&c.to) {
                        Some(other) if *other == side => {
                            tracing::debug!(from = ?c.from, to = ?c.to, "odd cycle");
                            return Ok(false);
                        }
                        Some(_) => {}
                        None => {
                            sides.insert(c.to.clone(), !side);
                            queue.push_back(c.to);
                        }
                    }
                }
            }
        }
        Ok(true)
    }
}

impl<G: Graph> Bipartite for G {}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn square() {
        let g = LiteralGraph::parse("A>B, B>C, C>D, D>A", false).unwrap();
        assert_eq!(g.is_bipartite(), Ok(true));
    }

    #[test]
    fn odd_cycle_in_second_component() {
        let g = LiteralGraph::parse("A>B, C>D, D>E, E>C", false).unwrap();
        assert_eq!(g.is_bipartite(), Ok(false));
    }

    #[test]
    fn self_loop() {
        let g = LiteralGraph::parse("A>B, B>B", false).unwrap();
        assert_eq!(g.is_bipartite(), Ok(false));
    }

    #[test]
    fn grids() {
        let m = MatrixGraph::new(vec![vec![0; 5]; 4]).unwrap();
        assert_eq!(m.is_bipartite(), Ok(true));
        let m = m.with_neighborhood(Neighborhood::Octile);
        assert_eq!(m.is_bipartite(), Ok(false));
        assert_eq!(KnightGraph::chess_board().is_bipartite(), Ok(true));
    }

    #[test]
    fn directed() {
        let g = LiteralGraph::parse("A>B", true).unwrap();
        assert!(matches!(
            g.is_bipartite(),
            Err(Error::UnsupportedOperation(_))
        ));
    }

    #[quickcheck]
    fn as_petgraph_says(rg: RandomGraph) {
        if rg.directed || rg.relations.iter().any(|(src, snk, _)| src == snk) {
            return;
        }
        let mut pg = petgraph::graph::UnGraph::<(), ()>::new_undirected();
        let vs: Vec<_> = (0..rg.node_size).map(|_| pg.add_node(())).collect();
        for (src, snk, _) in rg.relations.iter() {
            pg.add_edge(vs[*src], vs[*snk], ());
        }
        let expect = vs
            .iter()
            .all(|v| petgraph::algo::is_bipartite_undirected(&pg, *v));
        assert_eq!(rg.graph().is_bipartite(), Ok(expect));
    }
}
