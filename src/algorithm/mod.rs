//! Graph algorithms
//!
//! Every algorithm is an extension trait implemented for all [Graph](crate::graph::Graph)'s
//! (or [ValuedGraph](crate::graph::ValuedGraph)'s),
//! so bringing this module into scope is enough to call them as methods.
mod dfs;
pub use self::dfs::*;
mod bfs;
pub use self::bfs::*;
mod cheapest_path;
pub use self::cheapest_path::*;
mod toposort;
pub use self::toposort::*;
mod components;
pub use self::components::*;
mod bipartite;
pub use self::bipartite::*;
mod flood_fill;
pub use self::flood_fill::*;
mod coloring;
pub use self::coloring::*;
pub mod graphviz;
