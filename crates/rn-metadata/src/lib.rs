//! `rn-metadata` — per-intersection metadata lookup.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`table`]   | `IntersectionTable<K, V>`, `LookupStats`                 |
//! | [`details`] | `IntersectionDetails`, `SignalStatus`                    |
//! | [`loader`]  | `load_details_csv`, `load_details_reader`                |
//! | [`error`]   | `MetadataError`, `MetadataResult<T>`                     |

pub mod details;
pub mod error;
pub mod loader;
pub mod table;

#[cfg(test)]
mod tests;

pub use details::{IntersectionDetails, SignalStatus};
pub use error::{MetadataError, MetadataResult};
pub use loader::{load_details_csv, load_details_reader};
pub use table::{IntersectionTable, LookupStats};
