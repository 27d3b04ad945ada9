//! Errors reported by collections, graph adapters and algorithms.
use thiserror::Error;

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong in this crate.
///
/// All errors are detected synchronously and returned to the immediate caller.
/// An unreachable goal in a cheapest-path search is *not* an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input handed to an adapter, e.g. unparsable literal text
    /// or a ragged matrix.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A start or goal node that the graph does not contain.
    #[error("invalid node: {0}")]
    InvalidNode(String),

    /// The operation does not apply to this graph, e.g. a topological sort
    /// over an undirected graph or a write into a read-only one.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A cycle makes a topological order impossible.
    #[error("cycle detected")]
    CycleDetected,

    /// The structure was mutated while being enumerated.
    #[error("structure was modified during enumeration")]
    ConcurrentModification,

    /// Peek or pop on an empty structure.
    #[error("structure is empty")]
    EmptyStructure,
}

impl Error {
    pub(crate) fn invalid_node<N: std::fmt::Debug>(node: &N) -> Self {
        Self::InvalidNode(format!("{:?}", node))
    }

    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        Self::UnsupportedOperation(what.into())
    }
}
