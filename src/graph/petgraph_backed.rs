use crate::graph::*;
use crate::{Error, Result};
use petgraph::{
    graph::{DefaultIx, NodeIndex},
    visit::EdgeRef,
    EdgeType,
};
use std::{cmp::Ordering, ops::Add};

/// A read-only view over a [petgraph::Graph].
///
/// Nodes are `NodeIndex`'s, edge weights are costs and node weights are values.
/// Costs are added up with `+` and start from `E::default()`.
pub struct PetgraphGraph<'a, N, E, Ty>
where
    Ty: EdgeType,
{
    lower_graph: &'a petgraph::Graph<N, E, Ty, DefaultIx>,
}

impl<'a, N, E, Ty> PetgraphGraph<'a, N, E, Ty>
where
    Ty: EdgeType,
{
    pub fn new(lower_graph: &'a petgraph::Graph<N, E, Ty, DefaultIx>) -> Self {
        Self { lower_graph }
    }
}

impl<'a, N, E, Ty> Graph for PetgraphGraph<'a, N, E, Ty>
where
    E: Clone + Ord + Add<Output = E> + Default + std::fmt::Debug,
    Ty: EdgeType,
{
    type Node = NodeIndex;
    type Cost = E;

    fn is_directed(&self) -> bool {
        self.lower_graph.is_directed()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = NodeIndex> + '_> {
        Box::new(self.lower_graph.node_indices())
    }

    fn contains_node(&self, node: &NodeIndex) -> bool {
        node.index() < self.lower_graph.node_count()
    }

    fn node_count(&self) -> usize {
        self.lower_graph.node_count()
    }

    fn connections(&self, from: &NodeIndex) -> Box<dyn Iterator<Item = Connection<NodeIndex, E>> + '_> {
        if !self.contains_node(from) {
            return Box::new(std::iter::empty());
        }
        let from = *from;
        let it = self.lower_graph.edges(from).map(move |e| {
            let to = if e.source() == from {
                e.target()
            } else {
                e.source()
            };
            Connection::new(from, to, e.weight().clone())
        });
        Box::new(it)
    }

    fn zero_cost(&self) -> E {
        E::default()
    }

    fn combine_costs(&self, a: &E, b: &E) -> E {
        a.clone() + b.clone()
    }

    fn compare_costs(&self, a: &E, b: &E) -> Ordering {
        a.cmp(b)
    }
}

impl<'a, N, E, Ty> ValuedGraph for PetgraphGraph<'a, N, E, Ty>
where
    E: Clone + Ord + Add<Output = E> + Default + std::fmt::Debug,
    Ty: EdgeType,
{
    type Value = N;

    fn is_read_only(&self) -> bool {
        true
    }

    fn value(&self, node: &NodeIndex) -> Result<&N> {
        self.lower_graph
            .node_weight(*node)
            .ok_or_else(|| Error::invalid_node(node))
    }

    fn set_value(&mut self, _node: &NodeIndex, _value: N) -> Result<()> {
        Err(Error::unsupported("petgraph views are read-only"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petgraph::graph::{DiGraph, UnGraph};

    #[test]
    fn directed_edges() {
        let mut pg = DiGraph::<&str, u32>::new();
        let a = pg.add_node("a");
        let b = pg.add_node("b");
        pg.add_edge(a, b, 3);
        let g = PetgraphGraph::new(&pg);
        assert!(g.is_directed());
        let trial: Vec<_> = g.connections(&a).collect();
        assert_eq!(trial, vec![Connection::new(a, b, 3)]);
        assert_eq!(g.connections(&b).count(), 0);
        assert_eq!(g.value(&b), Ok(&"b"));
        assert!(!g.contains_node(&NodeIndex::new(2)));
    }

    #[test]
    fn undirected_edges_both_ways() {
        let mut pg = UnGraph::<(), u32>::new_undirected();
        let a = pg.add_node(());
        let b = pg.add_node(());
        pg.add_edge(a, b, 3);
        let g = PetgraphGraph::new(&pg);
        assert!(!g.is_directed());
        let trial: Vec<_> = g.connections(&b).collect();
        assert_eq!(trial, vec![Connection::new(b, a, 3)]);
    }
}
