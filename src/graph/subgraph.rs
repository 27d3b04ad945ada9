use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::{cmp::Ordering, collections::HashSet};

/// A subgraph by hiding some of nodes and connections in the underlying graph.
///
/// Hiding nodes and connections in a [SubgraphView] keeps the underlying graph
/// unchanged.
/// Hiding a node hides every connection touching it as well.
/// In undirected graphs, hiding a connection hides both of its directions.
///
/// Costs, potential weights and values come from the underlying graph.
/// Values are read-only through the view.
pub struct SubgraphView<'a, G>
where
    G: Graph,
{
    lower_graph: &'a G,
    hidden_nodes: HashSet<G::Node, RandomState>,
    hidden_connections: HashSet<(G::Node, G::Node), RandomState>,
}

impl<'a, G> SubgraphView<'a, G>
where
    G: Graph,
{
    pub fn new(lower_graph: &'a G) -> Self {
        Self {
            lower_graph,
            hidden_nodes: HashSet::with_hasher(RandomState::new()),
            hidden_connections: HashSet::with_hasher(RandomState::new()),
        }
    }

    pub fn hide_node(&mut self, node: G::Node) -> &mut Self {
        self.hidden_nodes.insert(node);
        self
    }

    pub fn disclose_node(&mut self, node: &G::Node) -> &mut Self {
        self.hidden_nodes.remove(node);
        self
    }

    /// Hides every connection from `from` to `to`.
    pub fn hide_connection(&mut self, from: G::Node, to: G::Node) -> &mut Self {
        if !self.lower_graph.is_directed() {
            self.hidden_connections.insert((to.clone(), from.clone()));
        }
        self.hidden_connections.insert((from, to));
        self
    }

    pub fn disclose_connection(&mut self, from: &G::Node, to: &G::Node) -> &mut Self {
        let key = (from.clone(), to.clone());
        self.hidden_connections.remove(&key);
        if !self.lower_graph.is_directed() {
            self.hidden_connections.remove(&(key.1, key.0));
        }
        self
    }

    fn is_hidden(&self, c: &Connection<G::Node, G::Cost>) -> bool {
        self.hidden_nodes.contains(&c.to)
            || self
                .hidden_connections
                .contains(&(c.from.clone(), c.to.clone()))
    }
}

impl<'a, G> Graph for SubgraphView<'a, G>
where
    G: Graph,
{
    type Node = G::Node;
    type Cost = G::Cost;

    fn is_directed(&self) -> bool {
        self.lower_graph.is_directed()
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = G::Node> + '_> {
        let it = self
            .lower_graph
            .nodes()
            .filter(|v| !self.hidden_nodes.contains(v));
        Box::new(it)
    }

    fn contains_node(&self, node: &G::Node) -> bool {
        !self.hidden_nodes.contains(node) && self.lower_graph.contains_node(node)
    }

    fn connections(
        &self,
        from: &G::Node,
    ) -> Box<dyn Iterator<Item = Connection<G::Node, G::Cost>> + '_> {
        if self.hidden_nodes.contains(from) {
            return Box::new(std::iter::empty());
        }
        let it = self
            .lower_graph
            .connections(from)
            .filter(|c| !self.is_hidden(c));
        Box::new(it)
    }

    fn zero_cost(&self) -> G::Cost {
        self.lower_graph.zero_cost()
    }

    fn combine_costs(&self, a: &G::Cost, b: &G::Cost) -> G::Cost {
        self.lower_graph.combine_costs(a, b)
    }

    fn compare_costs(&self, a: &G::Cost, b: &G::Cost) -> Ordering {
        self.lower_graph.compare_costs(a, b)
    }

    fn supports_potential_weight(&self) -> bool {
        self.lower_graph.supports_potential_weight()
    }

    /// Potential weights of the underlying graph stay admissible,
    /// since hiding can only make paths more expensive.
    fn potential_weight(&self, from: &G::Node, to: &G::Node) -> Option<G::Cost> {
        self.lower_graph.potential_weight(from, to)
    }
}

impl<'a, G> ValuedGraph for SubgraphView<'a, G>
where
    G: ValuedGraph,
{
    type Value = G::Value;

    fn is_read_only(&self) -> bool {
        true
    }

    fn value(&self, node: &G::Node) -> Result<&G::Value> {
        if self.hidden_nodes.contains(node) {
            return Err(Error::invalid_node(node));
        }
        self.lower_graph.value(node)
    }

    fn set_value(&mut self, _node: &G::Node, _value: G::Value) -> Result<()> {
        Err(Error::unsupported("subgraph views are read-only"))
    }
}
