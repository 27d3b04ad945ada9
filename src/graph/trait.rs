use crate::graph::*;
use crate::Result;
use std::{cmp::Ordering, fmt::Debug, hash::Hash};

/// What every graph must offer to be traversed and searched.
///
/// Nodes are opaque values compared by identity.
/// Costs are opaque too: the graph itself tells how to start from zero,
/// how to accumulate two costs, and how to order them.
pub trait Graph {
    type Node: Clone + Eq + Hash + Debug;
    type Cost: Clone + Debug;

    /// Whether connections are one-way.
    ///
    /// For undirected graphs, [Graph::connections] of a node yields every
    /// incident connection, oriented away from that node.
    fn is_directed(&self) -> bool;

    /// Iterates over all nodes, always in the same order.
    fn nodes(&self) -> Box<dyn Iterator<Item = Self::Node> + '_>;
    fn contains_node(&self, node: &Self::Node) -> bool;
    /// Iterates over connections leaving `from`.
    /// Nodes that are not in the graph have no connection.
    fn connections(
        &self,
        from: &Self::Node,
    ) -> Box<dyn Iterator<Item = Connection<Self::Node, Self::Cost>> + '_>;

    fn zero_cost(&self) -> Self::Cost;
    fn combine_costs(&self, a: &Self::Cost, b: &Self::Cost) -> Self::Cost;
    fn compare_costs(&self, a: &Self::Cost, b: &Self::Cost) -> Ordering;

    /// Whether [Graph::potential_weight] gives estimates.
    fn supports_potential_weight(&self) -> bool {
        false
    }

    /// A lower bound of the cheapest cost from `from` to `to`.
    ///
    /// It must never overestimate, otherwise heuristic-guided searches
    /// may return non-optimal paths.
    fn potential_weight(&self, _from: &Self::Node, _to: &Self::Node) -> Option<Self::Cost> {
        None
    }

    fn node_count(&self) -> usize {
        self.nodes().count()
    }

    fn debug<'a>(&'a self) -> GraphDebug<'a, Self>
    where
        Self: Sized,
    {
        GraphDebug::new(self)
    }
}

/// Graphs whose nodes carry values.
pub trait ValuedGraph: Graph {
    type Value;

    fn is_read_only(&self) -> bool;
    fn value(&self, node: &Self::Node) -> Result<&Self::Value>;
    /// Replaces the value of a node.
    ///
    /// Fails with [crate::Error::UnsupportedOperation] on read-only graphs.
    fn set_value(&mut self, node: &Self::Node, value: Self::Value) -> Result<()>;
}
