//! Graph nodes: an owned payload plus a set of peer handles.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::{Error, Result};

/// Stable handle identifying a node within its owning [`Graph`](crate::Graph).
///
/// Ids are allocated from a monotonic counter and never reused, so a handle
/// retained across a removal can never silently alias a newer node: lookups
/// through a stale handle simply miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer behind this handle.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A node in the graph: a payload plus the set of peers this node points at.
///
/// Peer references are unidirectional: `a` holding `b` in its peer set says
/// nothing about `b`'s peer set. Callers wanting full symmetry connect both
/// directions explicitly. A node never holds itself as a peer.
///
/// Nodes are created by [`Graph::add`](crate::Graph::add) and compare by
/// handle identity, not payload equality: two nodes with identical payloads
/// are distinct graph entities with distinct ids.
#[derive(Debug, Clone)]
pub struct Node<V> {
    id: NodeId,
    value: V,
    peers: FxHashSet<NodeId>,
}

impl<V> Node<V> {
    pub(crate) fn new(id: NodeId, value: V) -> Self {
        Self {
            id,
            value,
            peers: FxHashSet::default(),
        }
    }

    /// Returns the handle identifying this node.
    #[must_use]
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns a shared reference to the payload.
    #[must_use]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns a mutable reference to the payload.
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Consumes the node, returning its payload.
    #[must_use]
    pub fn into_value(self) -> V {
        self.value
    }

    /// Returns true when `peer` is directly connected from this node.
    ///
    /// This is the flat depth-1 membership check; deeper reachability goes
    /// through [`is_connected_within`](crate::traversal::is_connected_within).
    #[must_use]
    pub fn has_peer(&self, peer: NodeId) -> bool {
        self.peers.contains(&peer)
    }

    /// Iterates over the peers this node points at, in no particular order.
    pub fn peers(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.peers.iter().copied()
    }

    /// Number of outgoing peer references.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.peers.len()
    }

    /// Adds `peer` to this node's peer set.
    ///
    /// Idempotent: connecting an already-connected peer leaves the set
    /// unchanged. Only this node's peer set is touched; the reverse edge is
    /// the caller's business.
    ///
    /// Crate-private so that every public mutation path goes through
    /// [`Graph::connect`](crate::Graph::connect), which validates that both
    /// endpoints are registered.
    pub(crate) fn connect(&mut self, peer: NodeId) -> Result<()> {
        if peer == self.id {
            return Err(Error::SelfLoop(peer));
        }
        self.peers.insert(peer);
        Ok(())
    }

    /// Removes `peer` from this node's peer set, reporting whether an edge
    /// was actually removed. Disconnecting a non-peer is a no-op.
    pub(crate) fn disconnect(&mut self, peer: NodeId) -> bool {
        self.peers.remove(&peer)
    }
}
