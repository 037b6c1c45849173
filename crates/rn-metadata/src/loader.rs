//! CSV intersection-details loader.
//!
//! # CSV format
//!
//! ```csv
//! intersection,signal_status,traffic_flow
//! A,green,20
//! B,red,10
//! ```
//!
//! `signal_status` is case-insensitive.  A later row for the same
//! intersection replaces the earlier one.

use std::io::Read;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::{IntersectionDetails, IntersectionTable, MetadataError, MetadataResult};

#[derive(Deserialize)]
struct DetailsRecord {
    intersection:  String,
    signal_status: String,
    traffic_flow:  u32,
}

/// Load intersection details from a CSV file into `table`.
///
/// Returns the number of rows read.
pub fn load_details_csv(
    path: &Path,
    table: &mut IntersectionTable<String, IntersectionDetails>,
) -> MetadataResult<usize> {
    let file = std::fs::File::open(path).map_err(MetadataError::Io)?;
    load_details_reader(file, table)
}

/// Like [`load_details_csv`] but accepts any `Read` source.
pub fn load_details_reader<R: Read>(
    reader: R,
    table: &mut IntersectionTable<String, IntersectionDetails>,
) -> MetadataResult<usize> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = 0;

    for result in csv_reader.deserialize::<DetailsRecord>() {
        let row = result.map_err(|e| MetadataError::Parse(e.to_string()))?;
        let details = IntersectionDetails::new(row.signal_status.parse()?, row.traffic_flow);
        table.put(row.intersection, details);
        rows += 1;
    }

    debug!("loaded details for {rows} intersections");
    Ok(rows)
}
