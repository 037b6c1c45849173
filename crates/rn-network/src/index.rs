//! Cached shortest-distance queries over a [`RoadNetwork`].
//!
//! # Cache model
//!
//! One [`DistanceTable`] is memoized per distinct source queried.  The first
//! query from a source pays O((V + E) log V) for Dijkstra; later queries
//! from the same source are a hash lookup plus a `Vec` index.
//!
//! A cached table describes the graph as it was when computed.  With
//! [`IndexConfig::invalidate_on_mutation`] (the default) every successful
//! `add_edge` drops the whole cache.  Adding a node never does: a new node
//! has no roads, and tables computed before it existed already report it as
//! unreachable.
//!
//! # Thread safety
//!
//! Queries take `&mut self` because they may populate the cache.  To share
//! an index across threads wrap it in a single `Mutex` (or `RwLock`, taking
//! the write lock for both mutation and cache misses); a road added during
//! an in-flight Dijkstra would otherwise invalidate its neighbor scans.

use log::{debug, trace};
use rustc_hash::FxHashMap;

use rn_core::{Distance, IndexConfig, NodeId, Weight};

use crate::dijkstra::{dijkstra, DistanceTable};
use crate::network::{Label, RoadNetwork};
use crate::NetworkResult;

// ── CacheStats ────────────────────────────────────────────────────────────────

/// Counters describing how queries were served.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Queries answered from an already cached table.
    pub hits:         u64,
    /// Dijkstra runs performed (cache misses, uncached queries, precomputes).
    pub computations: u64,
}

// ── ShortestPathIndex ─────────────────────────────────────────────────────────

/// Road graph plus a per-source cache of shortest-distance tables.
#[derive(Clone, Debug)]
pub struct ShortestPathIndex<N> {
    network: RoadNetwork<N>,
    config:  IndexConfig,
    cache:   FxHashMap<NodeId, DistanceTable>,
    stats:   CacheStats,
}

impl<N: Label> ShortestPathIndex<N> {
    /// Empty index with the default configuration (caching enabled).
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            network: RoadNetwork::with_capacity(config.node_capacity),
            config,
            cache:   FxHashMap::default(),
            stats:   CacheStats::default(),
        }
    }

    /// Wrap an already built network.
    pub fn from_network(network: RoadNetwork<N>, config: IndexConfig) -> Self {
        Self {
            network,
            config,
            cache: FxHashMap::default(),
            stats: CacheStats::default(),
        }
    }

    pub fn network(&self) -> &RoadNetwork<N> {
        &self.network
    }

    pub fn config(&self) -> &IndexConfig {
        &self.config
    }

    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    // ── Graph mutation ────────────────────────────────────────────────────

    /// Register intersection `label`.  Idempotent.
    pub fn add_node(&mut self, label: N) -> NetworkResult<NodeId> {
        self.network.add_node(label)
    }

    /// Add an undirected road between two existing intersections.
    ///
    /// # Errors
    ///
    /// [`NetworkError::InvalidReference`](crate::NetworkError::InvalidReference)
    /// if either endpoint is missing; neither the graph nor the cache is
    /// touched in that case.
    pub fn add_edge(&mut self, a: &N, b: &N, weight: Weight) -> NetworkResult<()> {
        self.network.add_edge(a, b, weight)?;
        if self.config.invalidate_on_mutation && !self.cache.is_empty() {
            debug!(
                "road {a}–{b} added; dropping {} cached distance tables",
                self.cache.len()
            );
            self.cache.clear();
        }
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Minimum total traffic weight from `source` to `target`, or
    /// [`Distance::Unreachable`] if no path exists.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownNode`](crate::NetworkError::UnknownNode) if
    /// either label was never added.  Both are checked before any work.
    pub fn shortest_distance(&mut self, source: &N, target: &N) -> NetworkResult<Distance> {
        let s = self.network.require(source)?;
        let t = self.network.require(target)?;
        self.with_table(s, |table| table.distance(t))
    }

    /// Labels along one shortest path from `source` to `target`, both ends
    /// included.  `Ok(None)` when `target` is unreachable.
    pub fn shortest_path(&mut self, source: &N, target: &N) -> NetworkResult<Option<Vec<N>>> {
        let s = self.network.require(source)?;
        let t = self.network.require(target)?;
        let ids = self.with_table(s, |table| table.path_to(t))?;
        Ok(ids.map(|ids| {
            ids.into_iter()
                .map(|id| self.network.label(id).clone())
                .collect()
        }))
    }

    // ── Cache management ──────────────────────────────────────────────────

    /// Compute and store the distance table for `source`, replacing any
    /// cached one.  Does nothing beyond validating `source` when caching is
    /// disabled.
    pub fn precompute_paths(&mut self, source: &N) -> NetworkResult<()> {
        let s = self.network.require(source)?;
        if !self.config.cache_distance_tables {
            debug!("caching disabled; skipping precompute for {source}");
            return Ok(());
        }
        let table = self.compute(s)?;
        self.cache.insert(s, table);
        Ok(())
    }

    /// Compute tables for every node that has none cached yet.  Returns the
    /// number of tables computed.
    ///
    /// With the `parallel` feature the per-source Dijkstra runs happen on
    /// Rayon's thread pool; each reads the graph immutably.
    pub fn precompute_all(&mut self) -> NetworkResult<usize> {
        if !self.config.cache_distance_tables {
            return Ok(0);
        }
        let pending: Vec<NodeId> = (0..self.network.node_count() as u32)
            .map(NodeId)
            .filter(|id| !self.cache.contains_key(id))
            .collect();

        let network = &self.network;

        #[cfg(not(feature = "parallel"))]
        let tables: Vec<DistanceTable> = pending
            .iter()
            .map(|&s| dijkstra(network, s))
            .collect::<NetworkResult<_>>()?;

        #[cfg(feature = "parallel")]
        let tables: Vec<DistanceTable> = {
            use rayon::prelude::*;
            pending
                .par_iter()
                .map(|&s| dijkstra(network, s))
                .collect::<NetworkResult<_>>()?
        };

        let computed = tables.len();
        self.stats.computations += computed as u64;
        for table in tables {
            self.cache.insert(table.source(), table);
        }
        debug!("precomputed {computed} distance tables");
        Ok(computed)
    }

    /// Drop every cached table.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    pub fn is_cached(&self, source: &N) -> bool {
        self.network
            .node_id(source)
            .is_some_and(|s| self.cache.contains_key(&s))
    }

    /// Labels of all sources with a cached table, in no particular order.
    pub fn cached_sources(&self) -> impl Iterator<Item = &N> + '_ {
        self.cache.keys().map(|&id| self.network.label(id))
    }

    // ── Internals ─────────────────────────────────────────────────────────

    fn compute(&mut self, source: NodeId) -> NetworkResult<DistanceTable> {
        self.stats.computations += 1;
        let table = dijkstra(&self.network, source)?;
        debug!(
            "computed distance table for {} ({} of {} nodes reachable)",
            self.network.label(source),
            table.reachable_count(),
            table.len()
        );
        Ok(table)
    }

    /// Run `f` against the table for `source`, computing (and, if enabled,
    /// caching) it first when needed.
    fn with_table<R>(
        &mut self,
        source: NodeId,
        f: impl FnOnce(&DistanceTable) -> R,
    ) -> NetworkResult<R> {
        if !self.config.cache_distance_tables {
            let table = self.compute(source)?;
            return Ok(f(&table));
        }
        if let Some(table) = self.cache.get(&source) {
            self.stats.hits += 1;
            trace!("distance table cache hit for {}", self.network.label(source));
            return Ok(f(table));
        }
        let table = self.compute(source)?;
        Ok(f(self.cache.entry(source).or_insert(table)))
    }
}

impl<N: Label> Default for ShortestPathIndex<N> {
    fn default() -> Self {
        Self::new()
    }
}
