//! Road network representation.
//!
//! # Data layout
//!
//! Callers name intersections with any label type `N` (strings in the demo,
//! integers in bulk loaders).  Each label is interned once into a dense
//! [`NodeId`]; everything downstream works on ids:
//!
//! ```text
//! ids:        FxHashMap<N, NodeId>     label → id
//! labels:     Vec<N>                   id → label
//! adjacency:  Vec<Vec<(NodeId, Weight)>>   id → neighbor list
//! ```
//!
//! Roads are undirected but stored in **both** neighbor lists, so Dijkstra
//! only ever scans `adjacency[node]` and never has to infer symmetry.

use std::fmt::Display;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use rn_core::{NodeId, Weight};

use crate::{NetworkError, NetworkResult};

// ── Label ─────────────────────────────────────────────────────────────────────

/// Bound satisfied by every usable intersection label (`&str`, `String`,
/// integers, ...).  `Display` is used to render labels into errors and
/// `Send + Sync` lets distance tables be computed on worker threads.
pub trait Label: Clone + Eq + Hash + Display + Send + Sync {}

impl<T: Clone + Eq + Hash + Display + Send + Sync> Label for T {}

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected, weighted road graph built incrementally.
///
/// Roads may only join intersections that already exist; see
/// [`add_edge`](Self::add_edge).
#[derive(Clone, Debug)]
pub struct RoadNetwork<N> {
    ids:       FxHashMap<N, NodeId>,
    labels:    Vec<N>,
    adjacency: Vec<Vec<(NodeId, Weight)>>,
    /// Number of undirected roads (each occupies two adjacency slots).
    roads:     usize,
}

impl<N: Label> RoadNetwork<N> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Pre-allocate for the expected number of intersections.
    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            ids:       FxHashMap::with_capacity_and_hasher(nodes, Default::default()),
            labels:    Vec::with_capacity(nodes),
            adjacency: Vec::with_capacity(nodes),
            roads:     0,
        }
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Register an intersection and return its id.
    ///
    /// Idempotent: adding a label twice returns the id assigned the first
    /// time and leaves its roads untouched.
    ///
    /// # Errors
    ///
    /// [`NetworkError::TooManyNodes`] once every `u32` id below
    /// `NodeId::INVALID` is taken.
    pub fn add_node(&mut self, label: N) -> NetworkResult<NodeId> {
        if let Some(&id) = self.ids.get(&label) {
            return Ok(id);
        }
        let id = next_node_id(self.labels.len())?;
        self.ids.insert(label.clone(), id);
        self.labels.push(label);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add an undirected road of the given traffic weight between `a` and `b`.
    ///
    /// Appends `(b, weight)` to `a`'s neighbor list and `(a, weight)` to
    /// `b`'s.  Parallel roads and self-loops are kept as given.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidReference`] if either endpoint was never
    /// added.  The graph is left exactly as it was.
    pub fn add_edge(&mut self, a: &N, b: &N, weight: Weight) -> NetworkResult<(NodeId, NodeId)> {
        let missing = |label: &N| NetworkError::InvalidReference {
            from:    a.to_string(),
            to:      b.to_string(),
            missing: label.to_string(),
        };
        let ia = self.node_id(a).ok_or_else(|| missing(a))?;
        let ib = self.node_id(b).ok_or_else(|| missing(b))?;

        self.adjacency[ia.index()].push((ib, weight));
        self.adjacency[ib.index()].push((ia, weight));
        self.roads += 1;
        Ok((ia, ib))
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    #[inline]
    pub fn node_id(&self, label: &N) -> Option<NodeId> {
        self.ids.get(label).copied()
    }

    /// Resolve `label`, reporting [`NetworkError::UnknownNode`] if absent.
    pub fn require(&self, label: &N) -> NetworkResult<NodeId> {
        self.node_id(label)
            .ok_or_else(|| NetworkError::UnknownNode(label.to_string()))
    }

    pub fn contains(&self, label: &N) -> bool {
        self.ids.contains_key(label)
    }

    /// Label of an id handed out by this network.
    ///
    /// # Panics
    /// Panics if `id` did not come from this network.
    #[inline]
    pub fn label(&self, id: NodeId) -> &N {
        &self.labels[id.index()]
    }

    /// All labels in insertion order (i.e. ordered by `NodeId`).
    pub fn nodes(&self) -> &[N] {
        &self.labels
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbor list of `node` as stored: `(neighbor, weight)` pairs in the
    /// order roads were added.
    #[inline]
    pub fn adjacent(&self, node: NodeId) -> &[(NodeId, Weight)] {
        &self.adjacency[node.index()]
    }

    /// Neighbor-list scan by label.
    pub fn neighbors(&self, label: &N) -> NetworkResult<impl Iterator<Item = (&N, Weight)> + '_> {
        let id = self.require(label)?;
        Ok(self
            .adjacent(id)
            .iter()
            .map(|&(to, w)| (self.label(to), w)))
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of undirected roads added.
    pub fn edge_count(&self) -> usize {
        self.roads
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Id for the node added when `len` nodes already exist.
pub(crate) fn next_node_id(len: usize) -> NetworkResult<NodeId> {
    NodeId::try_from(len)
        .ok()
        .filter(|&id| id != NodeId::INVALID)
        .ok_or(NetworkError::TooManyNodes(len))
}

impl<N: Label> Default for RoadNetwork<N> {
    fn default() -> Self {
        Self::new()
    }
}
