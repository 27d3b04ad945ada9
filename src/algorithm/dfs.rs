use crate::graph::*;
use crate::{Error, Result};
use ahash::RandomState;
use std::collections::HashMap;

/// What a traversal callback wants to happen next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Go on as usual.
    Continue,
    /// Skip the remaining connections of the node being explored.
    ///
    /// For a back-edge, that is the node the edge leaves;
    /// for a completed node, that is its parent.
    Prune,
    /// Stop the whole traversal right away.
    Abort,
}

/// How a call to [DepthFirstTraversal::run] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DfsOutcome {
    Finished,
    Aborted,
}

/// Everything a depth-first traversal knows about a completed node.
///
/// `entry` and `exit` come from one clock ticking on every entry and exit,
/// so `entry < exit`, and intervals of an ancestor strictly contain those of
/// its descendants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfsRecord<N, C> {
    pub node: N,
    /// The node this one was discovered from, or `None` for a root.
    pub parent: Option<N>,
    /// The connection this node was discovered by, or `None` for a root.
    pub connection: Option<Connection<N, C>>,
    pub entry: usize,
    pub exit: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    OnStack,
    Completed,
}

struct Frame<'a, N, C> {
    node: N,
    connection: Option<Connection<N, C>>,
    entry: usize,
    children: Box<dyn Iterator<Item = Connection<N, C>> + 'a>,
    parent_link_skipped: bool,
}

impl<'a, N: 'a, C: 'a> Frame<'a, N, C> {
    fn prune(&mut self) {
        self.children = Box::new(std::iter::empty());
    }
}

/// Depth-first traversals over a [Graph].
pub trait DepthFirstSearch
where
    Self: Graph + Sized,
{
    /// Prepares a depth-first traversal.
    ///
    /// ```rust
    /// use algokit::{algorithm::*, graph::*};
    ///
    /// let g = LiteralGraph::parse("A>B, B>C, C>A", true).unwrap();
    /// let mut cycles = 0;
    /// let mut order = vec![];
    /// g.depth_first()
    ///     .on_back_edge(|_| {
    ///         cycles += 1;
    ///         Control::Continue
    ///     })
    ///     .on_complete(|rec| {
    ///         order.push(rec.node.clone());
    ///         Control::Continue
    ///     })
    ///     .run(&"A".to_owned())
    ///     .unwrap();
    /// assert_eq!(cycles, 1);
    /// assert_eq!(order, vec!["C", "B", "A"]);
    /// ```
    fn depth_first(&self) -> DepthFirstTraversal<'_, Self> {
        DepthFirstTraversal::new(self)
    }
}

impl<G: Graph> DepthFirstSearch for G {}

/// A depth-first traversal with its callbacks and visiting states.
///
/// Nodes go from unvisited to on-stack when entered,
/// and from on-stack to completed once all their connections are explored.
/// [DepthFirstTraversal::run] can be called several times from different
/// start nodes; nodes completed by earlier runs are not visited again,
/// and the clock keeps ticking across runs.
///
/// The traversal keeps its own stack, so deep graphs do not exhaust the
/// call stack.
pub struct DepthFirstTraversal<'a, G>
where
    G: Graph,
{
    graph: &'a G,
    eligible: Box<dyn FnMut(&G::Node) -> bool + 'a>,
    on_back_edge: Box<dyn FnMut(&Connection<G::Node, G::Cost>) -> Control + 'a>,
    on_complete: Box<dyn FnMut(&DfsRecord<G::Node, G::Cost>) -> Control + 'a>,
    states: HashMap<G::Node, State, RandomState>,
    clock: usize,
    aborted: bool,
}

impl<'a, G> DepthFirstTraversal<'a, G>
where
    G: Graph,
{
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            eligible: Box::new(|_| true),
            on_back_edge: Box::new(|_| Control::Continue),
            on_complete: Box::new(|_| Control::Continue),
            states: HashMap::with_hasher(RandomState::new()),
            clock: 0,
            aborted: false,
        }
    }

    /// Only nodes passing `f` are entered.
    /// Others are neither timestamped nor reported.
    pub fn eligible<F>(mut self, f: F) -> Self
    where
        F: FnMut(&G::Node) -> bool + 'a,
    {
        self.eligible = Box::new(f);
        self
    }

    /// Called on each connection towards a node still on the stack.
    ///
    /// In directed graphs, each of them closes a cycle.
    /// In undirected graphs, the connection leading back to the parent
    /// is not a back-edge; any other one is.
    pub fn on_back_edge<F>(mut self, f: F) -> Self
    where
        F: FnMut(&Connection<G::Node, G::Cost>) -> Control + 'a,
    {
        self.on_back_edge = Box::new(f);
        self
    }

    /// Called on each node once all its eligible children are completed.
    pub fn on_complete<F>(mut self, f: F) -> Self
    where
        F: FnMut(&DfsRecord<G::Node, G::Cost>) -> Control + 'a,
    {
        self.on_complete = Box::new(f);
        self
    }

    /// Whether a node has been entered by any run so far.
    pub fn is_visited(&self, node: &G::Node) -> bool {
        self.states.contains_key(node)
    }

    /// Traverses everything reachable from `start`.
    ///
    /// Once a run is aborted, the traversal stays aborted and later runs
    /// return [DfsOutcome::Aborted] immediately.
    pub fn run(&mut self, start: &G::Node) -> Result<DfsOutcome> {
        if !self.graph.contains_node(start) {
            return Err(Error::invalid_node(start));
        }
        if self.aborted {
            return Ok(DfsOutcome::Aborted);
        }
        if self.states.contains_key(start) || !(self.eligible)(start) {
            return Ok(DfsOutcome::Finished);
        }
        tracing::trace!(start = ?start, "depth-first traversal");
        let undirected = !self.graph.is_directed();
        let mut stack = vec![self.enter(start.clone(), None)];
        while let Some(top) = stack.last_mut() {
            match top.children.next() {
                Some(conn) => {
                    if undirected
                        && !top.parent_link_skipped
                        && top.connection.as_ref().map_or(false, |c| c.from == conn.to)
                    {
                        top.parent_link_skipped = true;
                        continue;
                    }
                    let state = self.states.get(&conn.to).copied();
                    match state {
                        Some(State::OnStack) => {
                            tracing::trace!(from = ?conn.from, to = ?conn.to, "back edge");
                            match (self.on_back_edge)(&conn) {
                                Control::Continue => {}
                                Control::Prune => top.prune(),
                                Control::Abort => return Ok(self.abort()),
                            }
                        }
                        Some(State::Completed) => {}
                        None => {
                            if (self.eligible)(&conn.to) {
                                let frame = self.enter(conn.to.clone(), Some(conn));
                                stack.push(frame);
                            }
                        }
                    }
                }
                None => {
                    if let Some(frame) = stack.pop() {
                        let record = self.exit(frame);
                        match (self.on_complete)(&record) {
                            Control::Continue => {}
                            Control::Prune => {
                                if let Some(parent) = stack.last_mut() {
                                    parent.prune();
                                }
                            }
                            Control::Abort => return Ok(self.abort()),
                        }
                    }
                }
            }
        }
        Ok(DfsOutcome::Finished)
    }

    fn tick(&mut self) -> usize {
        let cur = self.clock;
        self.clock += 1;
        cur
    }

    fn enter(
        &mut self,
        node: G::Node,
        connection: Option<Connection<G::Node, G::Cost>>,
    ) -> Frame<'a, G::Node, G::Cost> {
        let graph: &'a G = self.graph;
        let entry = self.tick();
        self.states.insert(node.clone(), State::OnStack);
        Frame {
            children: graph.connections(&node),
            node,
            connection,
            entry,
            parent_link_skipped: false,
        }
    }

    fn exit(&mut self, frame: Frame<'a, G::Node, G::Cost>) -> DfsRecord<G::Node, G::Cost> {
        let exit = self.tick();
        self.states.insert(frame.node.clone(), State::Completed);
        DfsRecord {
            parent: frame.connection.as_ref().map(|c| c.from.clone()),
            node: frame.node,
            connection: frame.connection,
            entry: frame.entry,
            exit,
        }
    }

    fn abort(&mut self) -> DfsOutcome {
        tracing::debug!(clock = self.clock, "depth-first traversal aborted");
        self.aborted = true;
        DfsOutcome::Aborted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use std::collections::HashMap;

    type Record = DfsRecord<String, i64>;

    fn s(x: &str) -> String {
        x.to_owned()
    }

    fn records_from(g: &LiteralGraph, start: &str) -> (Vec<Record>, usize) {
        let mut records = vec![];
        let mut back_edges = 0;
        let outcome = g
            .depth_first()
            .on_back_edge(|_| {
                back_edges += 1;
                Control::Continue
            })
            .on_complete(|r| {
                records.push(r.clone());
                Control::Continue
            })
            .run(&s(start))
            .unwrap();
        assert_eq!(outcome, DfsOutcome::Finished);
        (records, back_edges)
    }

    #[test]
    fn entry_and_exit_stamps() {
        let g = LiteralGraph::parse("A>B, A>C, B>D", true).unwrap();
        let (records, back_edges) = records_from(&g, "A");
        assert_eq!(back_edges, 0);
        let trial: Vec<_> = records
            .iter()
            .map(|r| (r.node.as_str(), r.parent.as_deref(), r.entry, r.exit))
            .collect();
        assert_eq!(
            trial,
            vec![
                ("D", Some("B"), 2, 3),
                ("B", Some("A"), 1, 4),
                ("C", Some("A"), 5, 6),
                ("A", None, 0, 7),
            ]
        );
        assert_eq!(records[3].connection, None);
        assert_eq!(
            records[0].connection,
            Some(Connection::new(s("B"), s("D"), 1))
        );
    }

    #[test]
    fn invalid_start() {
        let g = LiteralGraph::parse("A>B", true).unwrap();
        assert!(matches!(
            g.depth_first().run(&s("Z")),
            Err(Error::InvalidNode(_))
        ));
    }

    #[test]
    fn undirected_tree_has_no_back_edge() {
        let g = LiteralGraph::parse("A>B, B>C, B>D", false).unwrap();
        let (records, back_edges) = records_from(&g, "C");
        assert_eq!(back_edges, 0);
        assert_eq!(records.len(), 4);
    }

    #[test]
    fn undirected_triangle_has_one_back_edge() {
        let g = LiteralGraph::parse("A>B, B>C, C>A", false).unwrap();
        let (_, back_edges) = records_from(&g, "A");
        assert_eq!(back_edges, 1);
    }

    #[test]
    fn parallel_undirected_edges_form_a_cycle() {
        let g = LiteralGraph::parse("A>B, A>B", false).unwrap();
        let (_, back_edges) = records_from(&g, "A");
        assert_eq!(back_edges, 1);
    }

    #[test]
    fn self_loop_is_a_back_edge() {
        let g = LiteralGraph::parse("A>A", true).unwrap();
        let (_, back_edges) = records_from(&g, "A");
        assert_eq!(back_edges, 1);
    }

    #[test]
    fn ineligible_nodes_are_skipped() {
        let g = LiteralGraph::parse("A>B, B>C, A>D", true).unwrap();
        let mut order = vec![];
        g.depth_first()
            .eligible(|n| n != "B")
            .on_complete(|r| {
                order.push(r.node.clone());
                Control::Continue
            })
            .run(&s("A"))
            .unwrap();
        assert_eq!(order, vec!["D", "A"]);

        let mut entered = 0;
        let outcome = g
            .depth_first()
            .eligible(|_| false)
            .on_complete(|_| {
                entered += 1;
                Control::Continue
            })
            .run(&s("A"))
            .unwrap();
        assert_eq!(outcome, DfsOutcome::Finished);
        assert_eq!(entered, 0);
    }

    #[test]
    fn abort_on_complete() {
        let g = LiteralGraph::parse("A>B, A>C, C>D", true).unwrap();
        let mut order = vec![];
        let mut dfs = g.depth_first().on_complete(|r| {
            order.push(r.node.clone());
            if r.node == "B" {
                Control::Abort
            } else {
                Control::Continue
            }
        });
        assert_eq!(dfs.run(&s("A")).unwrap(), DfsOutcome::Aborted);
        assert!(!dfs.is_visited(&s("C")));
        assert_eq!(dfs.run(&s("C")).unwrap(), DfsOutcome::Aborted);
        drop(dfs);
        assert_eq!(order, vec!["B"]);
    }

    #[test]
    fn abort_on_back_edge() {
        let g = LiteralGraph::parse("A>B, B>A, A>C", true).unwrap();
        let mut completed = vec![];
        let outcome = g
            .depth_first()
            .on_back_edge(|_| Control::Abort)
            .on_complete(|r| {
                completed.push(r.node.clone());
                Control::Continue
            })
            .run(&s("A"))
            .unwrap();
        assert_eq!(outcome, DfsOutcome::Aborted);
        assert!(completed.is_empty());
    }

    #[test]
    fn prune_on_complete_skips_siblings() {
        let g = LiteralGraph::parse("A>B, A>C, A>D", true).unwrap();
        let mut order = vec![];
        let outcome = g
            .depth_first()
            .on_complete(|r| {
                order.push(r.node.clone());
                if r.node == "C" {
                    Control::Prune
                } else {
                    Control::Continue
                }
            })
            .run(&s("A"))
            .unwrap();
        assert_eq!(outcome, DfsOutcome::Finished);
        assert_eq!(order, vec!["B", "C", "A"]);
    }

    #[test]
    fn prune_on_back_edge_finishes_node() {
        let g = LiteralGraph::parse("A>B, B>A, B>C", true).unwrap();
        let mut order = vec![];
        g.depth_first()
            .on_back_edge(|_| Control::Prune)
            .on_complete(|r| {
                order.push(r.node.clone());
                Control::Continue
            })
            .run(&s("A"))
            .unwrap();
        assert_eq!(order, vec!["B", "A"]);
    }

    #[test]
    fn runs_share_clock_and_visits() {
        let g = LiteralGraph::parse("A>B, C>B", true).unwrap();
        let mut records = vec![];
        let mut dfs = g.depth_first().on_complete(|r| {
            records.push((r.node.clone(), r.entry, r.exit));
            Control::Continue
        });
        dfs.run(&s("A")).unwrap();
        dfs.run(&s("C")).unwrap();
        dfs.run(&s("B")).unwrap();
        drop(dfs);
        assert_eq!(
            records,
            vec![(s("B"), 1, 2), (s("A"), 0, 3), (s("C"), 4, 5)]
        );
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let mut g = LiteralGraph::new(true);
        for i in 0..100_000 {
            g.connect(&i.to_string(), &(i + 1).to_string(), 1).unwrap();
        }
        let mut completed = 0;
        g.depth_first()
            .on_complete(|_| {
                completed += 1;
                Control::Continue
            })
            .run(&s("0"))
            .unwrap();
        assert_eq!(completed, 100_001);
    }

    #[quickcheck]
    fn intervals_nest(rg: RandomGraph) {
        let g = rg.graph();
        let mut records = vec![];
        let mut dfs = g.depth_first().on_complete(|r| {
            records.push(r.clone());
            Control::Continue
        });
        for v in g.nodes() {
            dfs.run(&v).unwrap();
        }
        drop(dfs);
        assert_eq!(records.len(), g.node_count());

        let by_node: HashMap<_, _> = records.iter().map(|r| (r.node.clone(), r)).collect();
        let mut stamps = vec![];
        for r in records.iter() {
            assert!(r.entry < r.exit);
            stamps.push(r.entry);
            stamps.push(r.exit);
            let mut cur = r;
            while let Some(p) = &cur.parent {
                let anc = by_node[p];
                assert!(anc.entry < r.entry && r.exit < anc.exit);
                cur = anc;
            }
        }
        stamps.sort();
        assert_eq!(stamps, (0..2 * records.len()).collect::<Vec<_>>());

        for a in records.iter() {
            for b in records.iter() {
                let disjoint = a.exit < b.entry || b.exit < a.entry;
                let nested = (a.entry <= b.entry && b.exit <= a.exit)
                    || (b.entry <= a.entry && a.exit <= b.exit);
                assert!(disjoint || nested);
            }
        }
    }
}
