//! Error types for graph operations.

use thiserror::Error;

use crate::node::NodeId;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by graph mutation operations.
///
/// Queries never error: looking up a missing key returns `None` and
/// connectivity checks against unknown handles return `false`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Connecting a node to itself is categorically disallowed.
    #[error("cannot connect node {0} to itself")]
    SelfLoop(NodeId),

    /// An edge endpoint is not registered in the graph.
    #[error("node {0} is not registered in this graph")]
    NodeNotFound(NodeId),

    /// Removal was requested for a key that has no registered node.
    #[error("no node registered under key {0}")]
    KeyNotFound(String),
}
