//! Containers used as building blocks by the graph algorithms.
mod heap;
pub use self::heap::*;
