//! road_demo — walks through the road network crates end to end.
//!
//! Builds the three-intersection triangle (or loads roads from CSV), asks
//! for the A→C distance, stores and reads intersection details, and drains
//! a zone's traffic events.
//!
//! ```text
//! RUST_LOG=debug cargo run -p road_demo -- [config.json|-] [roads.csv]
//! ```

mod config;

use anyhow::{Context, Result};
use log::info;

use rn_events::ZonedEventQueue;
use rn_metadata::{IntersectionDetails, IntersectionTable, SignalStatus};
use rn_network::{load_network_csv, ShortestPathIndex};

use config::DemoConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = DemoConfig::from_args(std::env::args_os()).context("loading demo configuration")?;
    info!("{config:?}");

    // ── Road network ──────────────────────────────────────────────────────
    let mut roads = match &config.roads_csv {
        Some(path) => {
            let network = load_network_csv(path)
                .with_context(|| format!("loading roads {}", path.display()))?;
            ShortestPathIndex::from_network(network, config.index.clone())
        }
        None => {
            let mut index = ShortestPathIndex::with_config(config.index.clone());
            for n in ["A", "B", "C"] {
                index.add_node(n.to_string())?;
            }
            let [a, b, c] = ["A", "B", "C"].map(String::from);
            index.add_edge(&a, &b, 5)?;
            index.add_edge(&b, &c, 3)?;
            index.add_edge(&a, &c, 8)?;
            index
        }
    };

    let (a, c) = ("A".to_string(), "C".to_string());
    roads.precompute_paths(&a)?;
    println!("Shortest path from A to C: {}", roads.shortest_distance(&a, &c)?);
    if let Some(path) = roads.shortest_path(&a, &c)? {
        println!("Route: {}", path.join(" -> "));
    }

    // ── Intersection data ─────────────────────────────────────────────────
    let mut intersections = IntersectionTable::with_config(config.lookup.clone());
    intersections.put("A", IntersectionDetails::new(SignalStatus::Green, 20));
    intersections.put("B", IntersectionDetails::new(SignalStatus::Red, 10));

    for key in ["A", "B", "C"] {
        match intersections.get(&key) {
            Some(details) => println!("Intersection Data ({key}): {details}"),
            None => println!("Intersection Data ({key}): No data available"),
        }
    }

    // ── Traffic events ────────────────────────────────────────────────────
    let mut events = ZonedEventQueue::new();
    events.add("Zone1", 1, "Accident reported at Intersection A");
    events.add("Zone1", 2, "High traffic on Road A-B");

    while let Some((priority, event)) = events.pop_min(&"Zone1") {
        println!("Next Traffic Event in Zone1: ({priority}, {event})");
    }

    info!(
        "distance cache: {:?}, lookup cache: {:?}",
        roads.stats(),
        intersections.stats()
    );
    Ok(())
}
