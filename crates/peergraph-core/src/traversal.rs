//! Bounded-depth reachability over adjacency views.
//!
//! Traversal is generic over the [`Adjacency`] trait, so any structure that
//! exposes peers by handle gets the same routines without reimplementation.

use std::hash::Hash;

use rustc_hash::FxHashSet;

use crate::graph::Graph;
use crate::node::NodeId;

/// Read-only adjacency view consumed by the traversal routines.
pub trait Adjacency {
    /// Flat membership: is `peer` directly connected from `node`?
    ///
    /// Unregistered handles have no peers.
    fn has_peer(&self, node: NodeId, peer: NodeId) -> bool;

    /// Peers of `node`; empty when the handle is unregistered.
    fn peers_of(&self, node: NodeId) -> Vec<NodeId>;
}

impl<K: Eq + Hash, V> Adjacency for Graph<K, V> {
    fn has_peer(&self, node: NodeId, peer: NodeId) -> bool {
        self.node(node).is_some_and(|n| n.has_peer(peer))
    }

    fn peers_of(&self, node: NodeId) -> Vec<NodeId> {
        self.node(node)
            .map(|n| n.peers().collect())
            .unwrap_or_default()
    }
}

/// A node discovered by [`reachable_within`], tagged with the hop count at
/// which it was first reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReachableNode {
    /// Handle of the reached node.
    pub node: NodeId,
    /// Minimal number of hops from the source (0 for the source itself).
    pub depth: usize,
}

/// Bounded-depth reachability test.
///
/// `depth` is a hop-count ceiling: depth 1 (or 0) degrades to the flat
/// peer-set membership check, depth `d` allows paths of up to `d` hops.
///
/// The expansion is level-synchronous: each round advances the whole
/// frontier by exactly one hop, so the ceiling is exact rather than
/// approximated by a visit budget. Each frontier node is first flat-checked
/// against `target` — a hit at round `r` proves a path of at most `r` hops —
/// and only then, if unseen, its peers are enqueued for the next round.
/// The search ends when the frontier drains or the round budget runs out.
///
/// A node is never flat-connected to itself (self-loops are forbidden), so
/// `source == target` only returns true when an actual cycle of at most
/// `depth` hops leads back to the source.
///
/// Pure query: the verdict is deterministic for a fixed topology and depth.
#[must_use]
pub fn is_connected_within<G: Adjacency>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    depth: usize,
) -> bool {
    if depth <= 1 {
        return graph.has_peer(source, target);
    }

    let mut frontier = vec![source];
    let mut seen = FxHashSet::default();

    for _ in 0..depth {
        let mut next = Vec::new();
        for node in frontier {
            if graph.has_peer(node, target) {
                return true;
            }
            if seen.insert(node) {
                next.extend(graph.peers_of(node));
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    false
}

/// Collects every node reachable from `source` within `depth` hops.
///
/// Entries carry the minimal hop count at which each node was first
/// reached, in discovery order; the source itself leads the result at
/// depth 0. An unregistered source yields only its own depth-0 entry.
#[must_use]
pub fn reachable_within<G: Adjacency>(
    graph: &G,
    source: NodeId,
    depth: usize,
) -> Vec<ReachableNode> {
    let mut results = vec![ReachableNode {
        node: source,
        depth: 0,
    }];
    let mut seen = FxHashSet::default();
    seen.insert(source);

    let mut frontier = vec![source];
    for hop in 1..=depth {
        let mut next = Vec::new();
        for node in frontier {
            for peer in graph.peers_of(node) {
                if seen.insert(peer) {
                    results.push(ReachableNode { node: peer, depth: hop });
                    next.push(peer);
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    results
}
