use super::{Control, DepthFirstSearch, DfsOutcome};
use crate::graph::*;
use std::cell::RefCell;

/// Components of a [Graph].
pub trait ConnectedComponents
where
    Self: Graph + Sized,
{
    /// Splits nodes into components.
    ///
    /// Every node not yet visited, in enumeration order, starts a depth-first
    /// sweep, and the nodes it reaches form a component,
    /// listed in completion order.
    /// Directed connections are followed in their own direction only,
    /// so in directed graphs a component depends on where its sweep started.
    ///
    /// | Complexity |
    /// | ---------- |
    /// | $O(V+E)$   |
    fn connected_components(&self) -> Vec<Vec<Self::Node>> {
        let sweep = RefCell::new(vec![]);
        let mut res = vec![];
        let mut dfs = self.depth_first().on_complete(|rec| {
            sweep.borrow_mut().push(rec.node.clone());
            Control::Continue
        });
        for v in self.nodes() {
            if dfs.is_visited(&v) {
                continue;
            }
            let outcome = dfs.run(&v);
            debug_assert!(
                matches!(outcome, Ok(DfsOutcome::Finished)),
                "sweeps from enumerated nodes never fail or abort"
            );
            res.push(sweep.take());
        }
        tracing::debug!(components = res.len(), "connected components");
        res
    }
}

impl<G: Graph> ConnectedComponents for G {}
