//! Fuzz target for graph structural invariants.
//!
//! Drives arbitrary operation sequences against a small keyed graph and
//! checks the structural invariants after every step:
//! - no node ever appears in its own peer set
//! - no peer set references an unregistered node
//! - key registry and node population stay in agreement
//!
//! # Running
//!
//! ```bash
//! cd fuzz
//! cargo +nightly fuzz run fuzz_graph_ops
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use peergraph_core::{Graph, NodeId};

#[derive(Debug, Arbitrary)]
enum Op {
    Add { key: u8, value: u8 },
    Remove { key: u8 },
    Connect { from: u8, to: u8 },
    Disconnect { from: u8, to: u8 },
    Query { from: u8, to: u8, depth: u8 },
}

/// Picks from the history of every handle `add` ever returned, so stale
/// handles of removed and displaced nodes get exercised too.
fn pick(handles: &[NodeId], raw: u8) -> Option<NodeId> {
    if handles.is_empty() {
        None
    } else {
        handles.get(usize::from(raw) % handles.len()).copied()
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut graph: Graph<u8, u8> = Graph::new();
    let mut handles: Vec<NodeId> = Vec::new();

    for op in ops {
        match op {
            Op::Add { key, value } => handles.push(graph.add(key % 16, value)),
            Op::Remove { key } => {
                let _ = graph.remove(&(key % 16));
            }
            Op::Connect { from, to } => {
                if let (Some(a), Some(b)) = (pick(&handles, from), pick(&handles, to)) {
                    let _ = graph.connect(a, b);
                }
            }
            Op::Disconnect { from, to } => {
                if let (Some(a), Some(b)) = (pick(&handles, from), pick(&handles, to)) {
                    let _ = graph.disconnect(a, b);
                }
            }
            Op::Query { from, to, depth } => {
                if let (Some(a), Some(b)) = (pick(&handles, from), pick(&handles, to)) {
                    let _ = graph.is_connected_within(a, b, usize::from(depth % 8));
                }
            }
        }

        // Invariants must hold after every public operation.
        let mut seen_nodes = 0;
        for (key, node) in graph.iter() {
            assert!(!node.has_peer(node.id()), "self-loop after {key:?}");
            for peer in node.peers() {
                assert!(graph.node(peer).is_some(), "dangling peer reference");
            }
            assert_eq!(graph.id_of(key), Some(node.id()));
            seen_nodes += 1;
        }
        assert_eq!(seen_nodes, graph.node_count());
    }
});
