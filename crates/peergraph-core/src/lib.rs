//! # Peergraph Core
//!
//! Generic, in-memory, keyed graph with bounded-depth reachability queries.
//!
//! The structure is a building block, not a graph-algorithms library: nodes
//! carry arbitrary payloads and unidirectional peer references, the
//! container scrubs every inbound edge when a node is removed, and the one
//! query primitive is a breadth-limited connectivity test with an exact
//! hop-count ceiling.
//!
//! ## Design
//!
//! - Nodes are identified by stable [`NodeId`] handles from a monotonic
//!   counter, giving reference-identity semantics without raw pointers:
//!   two nodes with equal payloads are distinct entities.
//! - Edges are caller-managed and one-way. Connecting `a -> b` says nothing
//!   about `b -> a`; callers wanting symmetry connect both directions.
//! - Every public operation restores the no-dangling invariant: no peer set
//!   references an unregistered node, and no node is its own peer.
//! - Single-threaded by design. Callers needing concurrent access wrap the
//!   whole graph in their own lock.
//!
//! ## Quick start
//!
//! ```rust
//! use peergraph_core::Graph;
//!
//! let mut graph = Graph::new();
//! let a = graph.add("a", "first");
//! let b = graph.add("b", "second");
//! let c = graph.add("c", "third");
//!
//! graph.connect(a, b)?;
//! graph.connect(b, c)?;
//!
//! // One hop: direct peers only.
//! assert!(graph.is_connected_within(a, b, 1));
//! assert!(!graph.is_connected_within(a, c, 1));
//! // Two hops reach c through b.
//! assert!(graph.is_connected_within(a, c, 2));
//!
//! // Removal severs all inbound edges to the removed node.
//! graph.remove(&"b")?;
//! assert!(!graph.is_connected_within(a, c, 5));
//! # Ok::<(), peergraph_core::Error>(())
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod graph;
pub mod node;
pub mod traversal;

pub use error::{Error, Result};
pub use graph::Graph;
pub use node::{Node, NodeId};
pub use traversal::{is_connected_within, reachable_within, Adjacency, ReachableNode};
