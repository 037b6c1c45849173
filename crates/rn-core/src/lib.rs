//! `rn-core` — foundational types shared by the road network crates.
//!
//! # What lives here
//!
//! | Module         | Contents                                       |
//! |----------------|------------------------------------------------|
//! | [`ids`]        | `NodeId`                                       |
//! | [`distance`]   | `Weight`, `Distance`                           |
//! | [`config`]     | `IndexConfig`, `LookupConfig`                  |
//! | [`error`]      | `RnError`, `RnResult`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids and config types.    |

pub mod config;
pub mod distance;
pub mod error;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{IndexConfig, LookupConfig};
pub use distance::{Distance, Weight};
pub use error::{RnError, RnResult};
pub use ids::NodeId;
