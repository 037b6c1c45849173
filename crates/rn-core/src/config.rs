//! Runtime configuration for the shortest-path index and the metadata table.
//!
//! Both structs are plain data with `Default` impls.  Applications typically
//! load them from a JSON file (with the `serde` feature) and hand them to
//! `ShortestPathIndex::with_config` / `IntersectionTable::with_config`.

// ── IndexConfig ───────────────────────────────────────────────────────────────

/// Configuration for `ShortestPathIndex`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct IndexConfig {
    /// Memoize one distance table per queried source.  When `false` every
    /// query runs a fresh Dijkstra and nothing is stored.
    pub cache_distance_tables: bool,

    /// Drop every cached table when a road is added.  Disable only for
    /// build-once-then-query workloads where the caller clears the cache
    /// manually.
    pub invalidate_on_mutation: bool,

    /// Expected number of intersections; pre-sizes the adjacency storage.
    pub node_capacity: usize,
}

impl IndexConfig {
    /// Configuration with the distance-table cache switched off.
    pub fn uncached() -> Self {
        Self { cache_distance_tables: false, ..Self::default() }
    }
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            cache_distance_tables:  true,
            invalidate_on_mutation: true,
            node_capacity:          0,
        }
    }
}

// ── LookupConfig ──────────────────────────────────────────────────────────────

/// Configuration for `IntersectionTable`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LookupConfig {
    /// Serve repeated reads from a read-through cache.
    pub read_through_cache: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self { read_through_cache: true }
    }
}
