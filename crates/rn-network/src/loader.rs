//! CSV road loader.
//!
//! # CSV format
//!
//! One row per undirected road, header required:
//!
//! ```csv
//! from,to,weight
//! A,B,5
//! B,C,3
//! A,C,8
//! ```
//!
//! Intersections are created implicitly the first time a label appears, so
//! a file never trips [`NetworkError::InvalidReference`].  Weights must
//! parse as non-negative integers.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::network::RoadNetwork;
use crate::NetworkError;

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RoadRecord {
    from:   String,
    to:     String,
    weight: u32,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a road network from a CSV file.
pub fn load_network_csv(path: &Path) -> Result<RoadNetwork<String>, NetworkError> {
    let file = std::fs::File::open(path).map_err(NetworkError::Io)?;
    load_network_reader(file)
}

/// Like [`load_network_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded road tables.
pub fn load_network_reader<R: Read>(reader: R) -> Result<RoadNetwork<String>, NetworkError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut network = RoadNetwork::new();

    for (line, result) in csv_reader.deserialize::<RoadRecord>().enumerate() {
        let row = result.map_err(|e| NetworkError::Parse(format!("row {}: {e}", line + 1)))?;
        network.add_node(row.from.clone())?;
        network.add_node(row.to.clone())?;
        network.add_edge(&row.from, &row.to, row.weight)?;
    }

    debug!(
        "loaded road network: {} intersections, {} roads",
        network.node_count(),
        network.edge_count()
    );
    Ok(network)
}
