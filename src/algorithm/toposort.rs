use super::{Control, DepthFirstSearch, DfsOutcome};
use crate::graph::*;
use crate::{Error, Result};

/// Topological orders of directed acyclic graphs.
pub trait TopologicalSort
where
    Self: Graph + Sized,
{
    /// Orders all nodes so that every connection goes from an earlier node to a later one.
    ///
    /// Nodes completed by a depth-first traversal, started from each node in
    /// enumeration order, are listed in reversed completion order.
    ///
    /// Fails with [Error::CycleDetected] on the first back-edge,
    /// and with [Error::UnsupportedOperation] on undirected graphs.
    ///
    /// ```rust
    /// use algokit::{algorithm::*, graph::*, Error};
    ///
    /// let g = LiteralGraph::parse("B>C, A>B, A>C", true).unwrap();
    /// assert_eq!(g.toposort().unwrap(), vec!["A", "B", "C"]);
    ///
    /// let g = LiteralGraph::parse("A>B, B>A", true).unwrap();
    /// assert_eq!(g.toposort(), Err(Error::CycleDetected));
    /// ```
    fn toposort(&self) -> Result<Vec<Self::Node>> {
        if !self.is_directed() {
            return Err(Error::unsupported("toposort on an undirected graph"));
        }
        let mut completed = vec![];
        let mut cycle = None;
        {
            let mut dfs = self
                .depth_first()
                .on_back_edge(|c| {
                    cycle = Some(c.clone());
                    Control::Abort
                })
                .on_complete(|rec| {
                    completed.push(rec.node.clone());
                    Control::Continue
                });
            for v in self.nodes() {
                if dfs.run(&v)? == DfsOutcome::Aborted {
                    break;
                }
            }
        }
        if let Some(c) = cycle {
            tracing::debug!(from = ?c.from, to = ?c.to, "cycle detected");
            return Err(Error::CycleDetected);
        }
        completed.reverse();
        Ok(completed)
    }
}

impl<G: Graph> TopologicalSort for G {}
