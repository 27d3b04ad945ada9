use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::HashSet;

/// Flood fills over graphs with writable values.
///
/// Starting from a node, every node satisfying `predicate` is filled,
/// i.e., its value is replaced by `apply`,
/// and filling spreads to its neighbors.
/// Each node is checked at most once, against the value it had before the fill,
/// so both variants end with the same values.
/// They return how many nodes were filled.
///
/// ```rust
/// use algokit::{algorithm::*, graph::*};
///
/// let mut g = MatrixGraph::new(vec![
///     vec![1, 1, 0],
///     vec![0, 1, 0],
///     vec![1, 0, 1],
/// ])
/// .unwrap();
/// let filled = g.flood_fill(&Cell::new(0, 0), |_, v| *v == 1, |_, _| 7).unwrap();
/// assert_eq!(filled, 3);
/// assert_eq!(
///     g.to_rows(),
///     vec![vec![7, 7, 0], vec![0, 7, 0], vec![1, 0, 1]]
/// );
/// ```
pub trait FloodFill
where
    Self: ValuedGraph + Sized,
{
    /// Fills with an explicit stack.
    fn flood_fill<P, A>(&mut self, start: &Self::Node, mut predicate: P, mut apply: A) -> Result<usize>
    where
        P: FnMut(&Self::Node, &Self::Value) -> bool,
        A: FnMut(&Self::Node, &Self::Value) -> Self::Value,
    {
        check(self, start)?;
        let mut seen = HashSet::with_hasher(RandomState::new());
        seen.insert(start.clone());
        let mut stack = vec![start.clone()];
        let mut filled = 0;
        while let Some(node) = stack.pop() {
            if !fill(self, &node, &mut predicate, &mut apply)? {
                continue;
            }
            filled += 1;
            let neighbors: Vec<_> = self.connections(&node).map(|c| c.to).collect();
            for n in neighbors {
                if seen.insert(n.clone()) {
                    stack.push(n);
                }
            }
        }
        tracing::trace!(start = ?start, filled, "flood fill");
        Ok(filled)
    }

    /// Fills by recursion, as deep as the filled region.
    fn flood_fill_recursive<P, A>(
        &mut self,
        start: &Self::Node,
        mut predicate: P,
        mut apply: A,
    ) -> Result<usize>
    where
        P: FnMut(&Self::Node, &Self::Value) -> bool,
        A: FnMut(&Self::Node, &Self::Value) -> Self::Value,
    {
        check(self, start)?;
        let mut seen = HashSet::with_hasher(RandomState::new());
        seen.insert(start.clone());
        let filled = fill_from(self, start, &mut seen, &mut predicate, &mut apply)?;
        tracing::trace!(start = ?start, filled, "recursive flood fill");
        Ok(filled)
    }
}

impl<G: ValuedGraph> FloodFill for G {}

fn check<G: ValuedGraph>(graph: &G, start: &G::Node) -> Result<()> {
    if !graph.contains_node(start) {
        return Err(Error::invalid_node(start));
    }
    if graph.is_read_only() {
        return Err(Error::unsupported("flood fill on a read-only graph"));
    }
    Ok(())
}

/// Fills `node` if it satisfies `predicate`.
fn fill<G, P, A>(graph: &mut G, node: &G::Node, predicate: &mut P, apply: &mut A) -> Result<bool>
where
    G: ValuedGraph,
    P: FnMut(&G::Node, &G::Value) -> bool,
    A: FnMut(&G::Node, &G::Value) -> G::Value,
{
    let value = graph.value(node)?;
    if !predicate(node, value) {
        return Ok(false);
    }
    let value = apply(node, value);
    graph.set_value(node, value)?;
    Ok(true)
}

fn fill_from<G, P, A>(
    graph: &mut G,
    node: &G::Node,
    seen: &mut HashSet<G::Node, RandomState>,
    predicate: &mut P,
    apply: &mut A,
) -> Result<usize>
where
    G: ValuedGraph,
    P: FnMut(&G::Node, &G::Value) -> bool,
    A: FnMut(&G::Node, &G::Value) -> G::Value,
{
    if !fill(graph, node, predicate, apply)? {
        return Ok(0);
    }
    let mut filled = 1;
    let neighbors: Vec<_> = graph.connections(node).map(|c| c.to).collect();
    for n in neighbors {
        if seen.insert(n.clone()) {
            filled += fill_from(graph, &n, seen, predicate, apply)?;
        }
    }
    Ok(filled)
}
