//! The graph capability traits and graphs implementing them.
//!
//! # Capabilities instead of storage
//!
//! Algorithms in this crate are written against [Graph] only.
//! A graph tells what its nodes are, which connections leave a node,
//! whether connections are one-way, and how costs are added up and compared.
//! Optionally, it estimates a lower bound of the cost between two nodes
//! (its potential weight), which heuristic-guided searches take advantage of.
//! [ValuedGraph] further lets nodes carry values to be read and written.
//!
//! # Graphs
//!
//! *   [LiteralGraph]: named nodes and integer costs, parsed from text like `A>B, B>3>C`.
//! *   [MatrixGraph]: every cell of a rectangular matrix is a node.
//! *   [MazeGraph]: open cells of a boolean maze.
//! *   [KnightGraph]: squares of a board connected by knight moves.
//! *   [PetgraphGraph]: a read-only view over a `petgraph` graph.
//!
//! # Graph wrappers
//!
//! [SubgraphView] hides nodes and connections of another graph,
//! keeping the underlying graph unchanged.

mod connection;
pub use self::connection::*;
mod id;
pub use self::id::*;
mod r#trait;
pub use self::r#trait::*;
mod graph_debug;
pub use self::graph_debug::*;
pub mod grid;
pub use self::grid::{Cell, Neighborhood};
mod literal;
pub use self::literal::*;
mod matrix;
pub use self::matrix::*;
mod maze;
pub use self::maze::*;
mod knight;
pub use self::knight::*;
mod subgraph;
pub use self::subgraph::*;
mod petgraph_backed;
pub use self::petgraph_backed::*;
