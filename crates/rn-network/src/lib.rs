//! `rn-network` — road graph, shortest-path tables, and the cached index.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`network`]  | `RoadNetwork<N>` (label-interned adjacency list), `Label` |
//! | [`dijkstra`] | `dijkstra`, `DistanceTable`                             |
//! | [`index`]    | `ShortestPathIndex<N>`, `CacheStats`                    |
//! | [`loader`]   | `load_network_csv`, `load_network_reader`               |
//! | [`error`]    | `NetworkError`, `NetworkResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `ShortestPathIndex::precompute_all` runs on Rayon.      |
//! | `serde`    | Derives `Serialize`/`Deserialize` on `rn-core` types.   |
//!
//! # Example
//!
//! ```
//! use rn_core::Distance;
//! use rn_network::ShortestPathIndex;
//!
//! let mut index = ShortestPathIndex::new();
//! for n in ["A", "B", "C"] {
//!     index.add_node(n).unwrap();
//! }
//! index.add_edge(&"A", &"B", 5).unwrap();
//! index.add_edge(&"B", &"C", 3).unwrap();
//! assert_eq!(index.shortest_distance(&"A", &"C").unwrap(), Distance::Finite(8));
//! ```

pub mod dijkstra;
pub mod error;
pub mod index;
pub mod loader;
pub mod network;


pub use dijkstra::{dijkstra, DistanceTable};
pub use error::{NetworkError, NetworkResult};
pub use index::{CacheStats, ShortestPathIndex};
pub use loader::{load_network_csv, load_network_reader};
pub use network::{Label, RoadNetwork};
