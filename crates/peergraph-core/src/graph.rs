//! Keyed node registry with cascading edge cleanup on removal.

use std::fmt;
use std::hash::Hash;

use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::node::{Node, NodeId};
use crate::traversal;

/// A keyed collection of [`Node`]s.
///
/// The graph owns every node reachable through its key mapping. Peer
/// references are ids into the graph's own population, and every public
/// operation restores the invariant that no peer set references an
/// unregistered node.
///
/// Both internal maps are insertion-ordered, so full-population scans (the
/// removal cleanup, [`iter`](Graph::iter)) are deterministic and
/// test-reproducible.
///
/// # Example
///
/// ```rust
/// use peergraph_core::Graph;
///
/// let mut graph = Graph::new();
/// let alice = graph.add("alice", 30);
/// let bob = graph.add("bob", 25);
///
/// graph.connect(alice, bob)?;
/// assert!(graph.is_connected_within(alice, bob, 1));
/// // Edges are one-way until the caller mirrors them.
/// assert!(!graph.is_connected_within(bob, alice, 1));
///
/// graph.remove(&"bob")?;
/// assert!(graph.get(&"bob").is_none());
/// assert!(!graph.is_connected_within(alice, bob, 1));
/// # Ok::<(), peergraph_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graph<K, V> {
    /// Key registry: which id each key currently names.
    keys: IndexMap<K, NodeId>,
    /// Node arena, keyed by id. Agrees with `keys` at all times.
    nodes: IndexMap<NodeId, Node<V>>,
    /// Next id to hand out. Monotonic, never reused.
    next_id: u64,
}

impl<K, V> Default for Graph<K, V> {
    fn default() -> Self {
        Self {
            keys: IndexMap::new(),
            nodes: IndexMap::new(),
            next_id: 0,
        }
    }
}

impl<K, V> Graph<K, V>
where
    K: Eq + Hash,
{
    /// Creates a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph with pre-allocated capacity for `nodes` nodes.
    #[must_use]
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            keys: IndexMap::with_capacity(nodes),
            nodes: IndexMap::with_capacity(nodes),
            next_id: 0,
        }
    }

    // ── Node registry ──────────────────────────────────────────────────

    /// Creates a new node wrapping `value`, registers it under `key`, and
    /// returns its handle. Always succeeds.
    ///
    /// Re-registering an existing key displaces the old node: the displaced
    /// node is scrubbed from every peer set exactly as [`remove`](Graph::remove)
    /// would, so no dangling reference survives the overwrite. Handles to
    /// the displaced node go permanently stale.
    pub fn add(&mut self, key: K, value: V) -> NodeId {
        if let Some(old_id) = self.keys.get(&key).copied() {
            self.scrub(old_id);
            self.nodes.shift_remove(&old_id);
            debug!(node = %old_id, "key overwrite displaced node");
        }

        let id = NodeId::new(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, Node::new(id, value));
        self.keys.insert(key, id);
        id
    }

    /// Returns the node registered under `key`, if any.
    ///
    /// Absence is a normal outcome, not an error: callers probing for
    /// membership get `None` rather than a failure.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&Node<V>> {
        let id = self.keys.get(key)?;
        self.nodes.get(id)
    }

    /// Returns a mutable reference to the node registered under `key`.
    ///
    /// Only the payload is writable through the returned reference; peer
    /// sets are mutated through [`connect`](Graph::connect) and
    /// [`disconnect`](Graph::disconnect).
    #[must_use]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut Node<V>> {
        let id = *self.keys.get(key)?;
        self.nodes.get_mut(&id)
    }

    /// Returns the handle registered under `key`, if any.
    #[must_use]
    pub fn id_of(&self, key: &K) -> Option<NodeId> {
        self.keys.get(key).copied()
    }

    /// Returns true when a node is registered under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains_key(key)
    }

    /// Looks a node up by handle.
    ///
    /// Returns `None` for handles of removed or displaced nodes.
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node<V>> {
        self.nodes.get(&id)
    }

    /// Looks a node up by handle, mutably.
    #[must_use]
    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut Node<V>> {
        self.nodes.get_mut(&id)
    }

    /// Deletes the node registered under `key` and severs all inbound edges
    /// to it, returning the removed payload.
    ///
    /// Every currently-registered node is scanned in insertion order and
    /// any peer reference to the target is dropped; the scan harmlessly
    /// includes the target itself. The structure keeps no reverse-edge
    /// index, so this is O(population).
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] when `key` has no registered node.
    pub fn remove(&mut self, key: &K) -> Result<V>
    where
        K: fmt::Debug,
    {
        let id = self
            .keys
            .get(key)
            .copied()
            .ok_or_else(|| Error::KeyNotFound(format!("{key:?}")))?;

        let severed = self.scrub(id);
        self.keys.shift_remove(key);
        let node = self
            .nodes
            .shift_remove(&id)
            .ok_or(Error::NodeNotFound(id))?;

        debug!(node = %id, severed, "removed node and severed inbound edges");
        Ok(node.into_value())
    }

    // ── Edges ──────────────────────────────────────────────────────────

    /// Adds `to` to `from`'s peer set.
    ///
    /// Idempotent: connecting an already-connected pair is a no-op. Only
    /// `from`'s peer set is mutated; full bidirectionality requires the
    /// caller to connect both directions.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SelfLoop`] when `from` and `to` are the same node,
    /// and [`Error::NodeNotFound`] when either endpoint is not registered —
    /// a stale handle must not be able to plant a dangling reference.
    pub fn connect(&mut self, from: NodeId, to: NodeId) -> Result<()> {
        if !self.nodes.contains_key(&to) {
            return Err(Error::NodeNotFound(to));
        }
        let node = self.nodes.get_mut(&from).ok_or(Error::NodeNotFound(from))?;
        node.connect(to)
    }

    /// Removes `to` from `from`'s peer set, reporting whether an edge was
    /// actually removed.
    ///
    /// Disconnecting a non-peer, or passing an unregistered handle, is a
    /// no-op rather than an error.
    pub fn disconnect(&mut self, from: NodeId, to: NodeId) -> bool {
        self.nodes
            .get_mut(&from)
            .is_some_and(|node| node.disconnect(to))
    }

    /// Bounded-depth reachability test from `source` to `target`.
    ///
    /// Convenience for [`traversal::is_connected_within`]; see there for
    /// the depth semantics.
    #[must_use]
    pub fn is_connected_within(&self, source: NodeId, target: NodeId, depth: usize) -> bool {
        traversal::is_connected_within(self, source, target, depth)
    }

    // ── Population ─────────────────────────────────────────────────────

    /// Number of registered nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Total number of peer references across all nodes.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(Node::degree).sum()
    }

    /// Returns true when no nodes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over registered keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.keys.keys()
    }

    /// Iterates over `(key, node)` pairs in key insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &Node<V>)> {
        self.keys
            .iter()
            .filter_map(|(key, id)| self.nodes.get(id).map(|node| (key, node)))
    }

    /// Removes all nodes and edges.
    pub fn clear(&mut self) {
        self.keys.clear();
        self.nodes.clear();
    }

    /// Drops every peer-set reference to `target` across the population,
    /// returning how many references were severed. Scan order is the node
    /// insertion order.
    fn scrub(&mut self, target: NodeId) -> usize {
        let mut severed = 0;
        for node in self.nodes.values_mut() {
            if node.disconnect(target) {
                severed += 1;
            }
        }
        severed
    }
}
