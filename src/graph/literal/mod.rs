//! Graphs written down as literal text.
//!
//! ```plain
//! A>B, B>3>C, D
//! ```
//!
//! *   `A>B` relates `A` to `B` with the default cost 1.
//! *   `B>3>C` relates `B` to `C` with cost 3.
//! *   A lone name such as `D` declares an isolated node.
//!
//! In directed graphs relations are one-way; in undirected ones both ways.
mod parser;

use crate::graph::*;
use ahash::RandomState;
use bimap::BiHashMap;
use std::{
    cmp::Ordering,
    collections::{BTreeMap, BTreeSet},
};

/// A graph of named nodes and integer costs, usually parsed from literal text.
///
/// |                 | Complexity                                                              |
/// | --------------- | ----------------------------------------------------------------------- |
/// | `add_node`      | $O(\log \|V\|)$                                                         |
/// | `connect`       | $O(\log \|V\| + \log \|E\|)$                                            |
/// | `contains_node` | $O(1)$                                                                  |
/// | `nodes`         | amortized $O(1)$ on each call to `.next`                                |
/// | `connections`   | returns in $O(\log \|E\|)$. amortized $O(1)$ on each call to `.next`.   |
///
/// Nodes are enumerated in the order they were declared,
/// and connections of a node in the order their relations were declared.
#[derive(Clone)]
pub struct LiteralGraph {
    directed: bool,
    id_factory: IdFactory,
    names: BiHashMap<VertexId, String, RandomState, RandomState>,
    vertices: BTreeSet<VertexId>,
    relations: BTreeMap<EdgeId, (VertexId, VertexId, i64)>,
    adjacency: BTreeSet<(VertexId, EdgeId, VertexId)>,
}

impl LiteralGraph {
    /// Creates an empty graph.
    pub fn new(directed: bool) -> Self {
        Self {
            directed,
            id_factory: IdFactory::new(),
            names: BiHashMap::with_hashers(RandomState::new(), RandomState::new()),
            vertices: BTreeSet::new(),
            relations: BTreeMap::new(),
            adjacency: BTreeSet::new(),
        }
    }

    /// Parses literal text, e.g., `"A>B, B>3>C, D"`.
    pub fn parse(text: &str, directed: bool) -> crate::Result<Self> {
        let mut res = Self::new(directed);
        for item in parser::parse(text)? {
            match item {
                parser::Item::Node(name) => {
                    res.add_node(name);
                }
                parser::Item::Relation { from, to, cost } => {
                    res.connect(from, to, cost)?;
                }
            }
        }
        Ok(res)
    }

    /// Adds a node if it is unpresent.
    pub fn add_node(&mut self, name: &str) -> VertexId {
        let name = name.to_owned();
        if let Some(vid) = self.names.get_by_right(&name) {
            *vid
        } else {
            let vid = self.id_factory.vertex();
            self.names.insert(vid, name);
            self.vertices.insert(vid);
            vid
        }
    }

    /// Relates two nodes, adding them if necessary.
    ///
    /// Costs must be non-negative, so that accumulating them never decreases.
    pub fn connect(&mut self, from: &str, to: &str, cost: i64) -> crate::Result<EdgeId> {
        if cost < 0 {
            return Err(crate::Error::InvalidArgument(format!(
                "negative cost {} from {:?} to {:?}",
                cost, from, to
            )));
        }
        let src = self.add_node(from);
        let snk = self.add_node(to);
        let eid = self.id_factory.edge();
        self.relations.insert(eid, (src, snk, cost));
        self.adjacency.insert((src, eid, snk));
        if !self.directed {
            self.adjacency.insert((snk, eid, src));
        }
        Ok(eid)
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    fn name(&self, vid: &VertexId) -> &String {
        self.names
            .get_by_left(vid)
            .expect("every vertex in storage is named")
    }
}

impl Graph for LiteralGraph {
    type Node = String;
    type Cost = i64;

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn nodes(&self) -> Box<dyn Iterator<Item = String> + '_> {
        Box::new(self.vertices.iter().map(|v| self.name(v).clone()))
    }

    fn contains_node(&self, node: &String) -> bool {
        self.names.contains_right(node)
    }

    fn node_count(&self) -> usize {
        self.vertices.len()
    }

    fn connections(&self, from: &String) -> Box<dyn Iterator<Item = Connection<String, i64>> + '_> {
        let v = match self.names.get_by_right(from) {
            Some(v) => *v,
            None => return Box::new(std::iter::empty()),
        };
        let start = (v, EdgeId::MIN, VertexId::MIN);
        let end = (v.next(), EdgeId::MIN, VertexId::MIN);
        let it = self.adjacency.range(start..end).map(move |(src, e, snk)| {
            let (_, _, cost) = self.relations[e];
            Connection::new(self.name(src).clone(), self.name(snk).clone(), cost)
        });
        Box::new(it)
    }

    fn zero_cost(&self) -> i64 {
        0
    }

    fn combine_costs(&self, a: &i64, b: &i64) -> i64 {
        a + b
    }

    fn compare_costs(&self, a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }
}

impl std::fmt::Display for LiteralGraph {
    /// Writes the graph back as literal text.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut related = BTreeSet::new();
        let mut items = vec![];
        for (src, snk, cost) in self.relations.values() {
            related.insert(*src);
            related.insert(*snk);
            if *cost == 1 {
                items.push(format!("{}>{}", self.name(src), self.name(snk)));
            } else {
                items.push(format!("{}>{}>{}", self.name(src), cost, self.name(snk)));
            }
        }
        for v in self.vertices.difference(&related) {
            items.push(self.name(v).clone());
        }
        write!(f, "{}", items.join(", "))
    }
}

impl std::fmt::Debug for LiteralGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let kind = if self.directed { "directed" } else { "undirected" };
        write!(f, "LiteralGraph({}: {})", kind, self)
    }
}

#[cfg(test)]
pub use self::tests::*;
