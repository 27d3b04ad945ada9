//! Visualize graphs in the graphviz format.
use crate::graph::*;
use ahash::RandomState;
use std::{collections::HashMap, fmt::Display};

/**
 * Dumps a directed/undirected graph into graphviz format.
 *
 * Nodes are named by their `Display` forms, and connections are labelled with their costs.
 * Connections of undirected graphs are dumped once, although both ends see them.
 *
 * # Examples
 *
 * ```rust
 * use algokit::{algorithm::graphviz::*, graph::*};
 *
 * // for a directed graph
 * let dg = LiteralGraph::parse("A>2>B, A>A, C", true).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     dg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"digraph trial {
 *   "A" ;
 *   "B" ;
 *   "C" ;
 *   "A" -> "B" [label="2"] ;
 *   "A" -> "A" [label="1"] ;
 * }
 * "#
 * );
 *
 * // for an undirected graph
 * let udg = LiteralGraph::parse("A>2>B, B>C", false).unwrap();
 * let trial = {
 *     let mut buf = vec![];
 *     udg.dump_in_graphviz(&mut buf, "trial").unwrap();
 *     String::from_utf8(buf).unwrap()
 * };
 * assert_eq!(
 *     trial,
 *     r#"graph trial {
 *   "A" ;
 *   "B" ;
 *   "C" ;
 *   "A" -- "B" [label="2"] ;
 *   "B" -- "C" [label="1"] ;
 * }
 * "#
 * );
 * ```
 */
pub trait DumpInGraphviz
where
    Self: Graph + Sized,
    Self::Node: Display,
    Self::Cost: Display,
{
    /**
     * Dumps a directed/undirected graph to a `std::io::Write` object in the graphviz format.
     */
    fn dump_in_graphviz<W>(&self, out: &mut W, graph_name: &str) -> std::io::Result<()>
    where
        W: std::io::Write,
    {
        let directed = self.is_directed();
        if directed {
            writeln!(out, "digraph {} {{", graph_name)?;
        } else {
            writeln!(out, "graph {} {{", graph_name)?;
        }
        for v in self.nodes() {
            writeln!(out, "  \"{}\" ;", v)?;
        }
        let dir = if directed { "->" } else { "--" };
        // undirected connections seen from one end, waiting for the other
        let mut pending: HashMap<(Self::Node, Self::Node), usize, RandomState> =
            HashMap::with_hasher(RandomState::new());
        for v in self.nodes() {
            for c in self.connections(&v) {
                if !directed && c.from != c.to {
                    let back = (c.to.clone(), c.from.clone());
                    match pending.get_mut(&back) {
                        Some(n) if *n > 0 => {
                            *n -= 1;
                            continue;
                        }
                        _ => *pending.entry((c.from.clone(), c.to.clone())).or_default() += 1,
                    }
                }
                writeln!(out, "  \"{}\" {} \"{}\" [label=\"{}\"] ;", c.from, dir, c.to, c.cost)?;
            }
        }
        writeln!(out, "}}")?;
        Ok(())
    }
}

impl<G> DumpInGraphviz for G
where
    G: Graph,
    G::Node: Display,
    G::Cost: Display,
{
}
