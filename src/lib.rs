//! Graph algorithms written against a capability-based graph trait.
//!
//! Algorithms in this crate never see how a graph is stored.
//! They only ask it for its nodes, the connections leaving a node,
//! and how to add up and compare costs.
//! Anything implementing [graph::Graph] can be traversed and searched:
//! a graph parsed from literal text, a dense matrix, a maze, a knight's board,
//! a view hiding part of another graph, or a `petgraph` graph.
//!
//! ```rust
//! use algokit::{algorithm::*, graph::*};
//!
//! let g = LiteralGraph::parse("A>1>B, B>1>C, A>3>C", true).unwrap();
//! let path = g.cheapest_path(&"A".to_owned(), &"C".to_owned()).unwrap();
//! assert_eq!(path.nodes, vec!["A", "B", "C"]);
//! assert_eq!(path.cost, 2);
//! ```

pub mod algorithm;
pub mod collections;
mod error;
pub mod graph;

pub use self::error::*;
