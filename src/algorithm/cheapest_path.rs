use crate::collections::Heap;
use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::{cmp::Ordering, collections::HashMap};

/// Whether a cheapest-path search is guided by potential weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeuristicMode {
    /// Guided if the graph supports potential weights.
    #[default]
    Auto,
    /// Plain uniform-cost search.
    Disabled,
    /// Guided, failing on graphs without potential weights.
    Required,
}

/// Knobs of cheapest-path searches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub heuristic: HeuristicMode,
    /// Gives up, returning an empty path, after expanding this many nodes.
    pub max_expansions: Option<usize>,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn heuristic(mut self, mode: HeuristicMode) -> Self {
        self.heuristic = mode;
        self
    }

    pub fn max_expansions(mut self, n: usize) -> Self {
        self.max_expansions = Some(n);
        self
    }
}

/// A path found by a cheapest-path search.
///
/// An empty path means the goal is unreachable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<N, C> {
    /// Nodes from the start to the goal, both included.
    pub nodes: Vec<N>,
    /// Accumulated cost along `nodes`.
    pub cost: C,
    /// How many nodes were expanded to find it.
    pub expanded: usize,
}

impl<N, C> Path<N, C> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<N, C> IntoIterator for Path<N, C> {
    type Item = N;
    type IntoIter = std::vec::IntoIter<N>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

struct FrontierEntry<N, C> {
    node: N,
    cost: C,
    priority: C,
}

/// Cheapest paths between two nodes of a [Graph].
///
/// Costs are accumulated and compared only through the graph,
/// so any totally-ordered cost type which never decreases when accumulated works,
/// not just numbers.
/// If the graph supports potential weights, they guide the search (A*);
/// as long as they never overestimate, the found paths are as cheap as
/// those found without them.
pub trait CheapestPath
where
    Self: Graph + Sized,
{
    fn cheapest_path(
        &self,
        from: &Self::Node,
        to: &Self::Node,
    ) -> Result<Path<Self::Node, Self::Cost>> {
        self.cheapest_path_with(from, to, &SearchOptions::default())
    }

    fn cheapest_path_with(
        &self,
        from: &Self::Node,
        to: &Self::Node,
        options: &SearchOptions,
    ) -> Result<Path<Self::Node, Self::Cost>> {
        search(self, from, to, options)
    }
}

impl<G: Graph> CheapestPath for G {}

fn search<G: Graph>(
    graph: &G,
    from: &G::Node,
    to: &G::Node,
    options: &SearchOptions,
) -> Result<Path<G::Node, G::Cost>> {
    for v in [from, to] {
        if !graph.contains_node(v) {
            return Err(Error::invalid_node(v));
        }
    }
    let guided = match options.heuristic {
        HeuristicMode::Auto => graph.supports_potential_weight(),
        HeuristicMode::Disabled => false,
        HeuristicMode::Required => {
            if !graph.supports_potential_weight() {
                return Err(Error::unsupported(
                    "heuristic search on a graph without potential weights",
                ));
            }
            true
        }
    };
    if from == to {
        return Ok(Path {
            nodes: vec![from.clone()],
            cost: graph.zero_cost(),
            expanded: 0,
        });
    }

    let priority_of = |node: &G::Node, cost: &G::Cost| -> G::Cost {
        match guided.then(|| graph.potential_weight(node, to)).flatten() {
            Some(h) => graph.combine_costs(cost, &h),
            None => cost.clone(),
        }
    };
    let mut frontier = Heap::new(
        |a: &FrontierEntry<G::Node, G::Cost>, b: &FrontierEntry<G::Node, G::Cost>| {
            graph.compare_costs(&b.priority, &a.priority)
        },
    );
    let mut best = HashMap::with_hasher(RandomState::new());
    let mut predecessors = HashMap::with_hasher(RandomState::new());
    let zero = graph.zero_cost();
    best.insert(from.clone(), zero.clone());
    frontier.push(FrontierEntry {
        priority: priority_of(from, &zero),
        node: from.clone(),
        cost: zero,
    });

    let mut expanded = 0;
    while let Ok(current) = frontier.pop() {
        let stale = best
            .get(&current.node)
            .map_or(false, |known| graph.compare_costs(&current.cost, known) == Ordering::Greater);
        if stale {
            continue;
        }
        if current.node == *to {
            let nodes = walk_back(&predecessors, from, to);
            tracing::debug!(expanded, guided, hops = nodes.len() - 1, "cheapest path found");
            return Ok(Path {
                nodes,
                cost: current.cost,
                expanded,
            });
        }
        if options.max_expansions.map_or(false, |max| expanded >= max) {
            tracing::debug!(expanded, "cheapest-path search gave up");
            break;
        }
        expanded += 1;
        for c in graph.connections(&current.node) {
            let cost = graph.combine_costs(&current.cost, &c.cost);
            let better = best
                .get(&c.to)
                .map_or(true, |known| graph.compare_costs(&cost, known) == Ordering::Less);
            if better {
                best.insert(c.to.clone(), cost.clone());
                predecessors.insert(c.to.clone(), current.node.clone());
                frontier.push(FrontierEntry {
                    priority: priority_of(&c.to, &cost),
                    node: c.to,
                    cost,
                });
            }
        }
    }

    tracing::debug!(expanded, guided, "no path");
    Ok(Path {
        nodes: vec![],
        cost: graph.zero_cost(),
        expanded,
    })
}

fn walk_back<N>(predecessors: &HashMap<N, N, RandomState>, from: &N, to: &N) -> Vec<N>
where
    N: Clone + Eq + std::hash::Hash,
{
    let mut res = vec![to.clone()];
    let mut cur = to;
    while cur != from {
        match predecessors.get(cur) {
            Some(p) => {
                res.push(p.clone());
                cur = p;
            }
            None => break,
        }
    }
    res.reverse();
    res
}
