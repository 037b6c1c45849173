//! Single-source Dijkstra over a [`RoadNetwork`].
//!
//! # Lazy deletion
//!
//! The frontier is a plain `BinaryHeap` with no decrease-key.  When a
//! cheaper path to a node is found the node is pushed again; the older,
//! dearer entry stays in the heap and is skipped when popped because its
//! cost exceeds the node's best known distance.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rn_core::{Distance, NodeId};

use crate::network::{Label, RoadNetwork};
use crate::{NetworkError, NetworkResult};

// ── DistanceTable ─────────────────────────────────────────────────────────────

/// Shortest distances from one source to every node known when the table
/// was computed.
#[derive(Clone, Debug)]
pub struct DistanceTable {
    source: NodeId,
    /// dist[v] = minimum total weight source → v; `u64::MAX` when unreached.
    dist:   Vec<u64>,
    /// prev[v] = node preceding v on a shortest path; `INVALID` for the
    /// source and unreached nodes.
    prev:   Vec<NodeId>,
}

impl DistanceTable {
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Number of nodes covered (the node count at computation time).
    pub fn len(&self) -> usize {
        self.dist.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dist.is_empty()
    }

    /// Distance from the source to `node`.
    ///
    /// Nodes added to the network after this table was computed are
    /// reported as `Unreachable`; they had no roads at the time.
    pub fn distance(&self, node: NodeId) -> Distance {
        Distance::from(self.dist.get(node.index()).copied().filter(|&d| d != u64::MAX))
    }

    /// Number of nodes with a finite distance (including the source).
    pub fn reachable_count(&self) -> usize {
        self.dist.iter().filter(|&&d| d != u64::MAX).count()
    }

    /// Node sequence of one shortest path from the source to `target`,
    /// both ends included.  `None` if `target` is unreachable.
    pub fn path_to(&self, target: NodeId) -> Option<Vec<NodeId>> {
        if !self.distance(target).is_reachable() {
            return None;
        }
        let mut path = vec![target];
        let mut cur = target;
        while cur != self.source {
            cur = self.prev[cur.index()];
            path.push(cur);
        }
        path.reverse();
        Some(path)
    }
}

// ── Dijkstra ──────────────────────────────────────────────────────────────────

/// Compute the [`DistanceTable`] for `source`.
///
/// O((V + E) log V).
///
/// # Errors
///
/// [`NetworkError::UnknownNode`] if `source` is not an id of `network`.
pub fn dijkstra<N: Label>(network: &RoadNetwork<N>, source: NodeId) -> NetworkResult<DistanceTable> {
    let n = network.node_count();
    if source.index() >= n {
        return Err(NetworkError::UnknownNode(source.to_string()));
    }
    let mut dist = vec![u64::MAX; n];
    let mut prev = vec![NodeId::INVALID; n];

    dist[source.index()] = 0;

    // Min-heap: (cost, node). Reverse makes BinaryHeap (max) behave as min-heap.
    // Secondary key NodeId ensures deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(u64, NodeId)>> = BinaryHeap::new();
    heap.push(Reverse((0, source)));

    while let Some(Reverse((cost, node))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[node.index()] {
            continue;
        }

        for &(neighbor, weight) in network.adjacent(node) {
            let candidate = cost.saturating_add(weight as u64);
            if candidate < dist[neighbor.index()] {
                dist[neighbor.index()] = candidate;
                prev[neighbor.index()] = node;
                heap.push(Reverse((candidate, neighbor)));
            }
        }
    }

    Ok(DistanceTable { source, dist, prev })
}
