//! Unit tests for rn-metadata.

use crate::{IntersectionDetails, SignalStatus};

fn green(flow: u32) -> IntersectionDetails {
    IntersectionDetails::new(SignalStatus::Green, flow)
}

fn red(flow: u32) -> IntersectionDetails {
    IntersectionDetails::new(SignalStatus::Red, flow)
}

// ── IntersectionTable ─────────────────────────────────────────────────────────

#[cfg(test)]
mod table {
    use rn_core::LookupConfig;

    use super::*;
    use crate::{IntersectionTable, LookupStats};

    #[test]
    fn missing_key_is_no_data() {
        let mut t: IntersectionTable<&str, IntersectionDetails> = IntersectionTable::new();
        assert_eq!(t.get(&"A"), None);
        assert!(t.is_empty());
    }

    #[test]
    fn put_then_get() {
        let mut t = IntersectionTable::new();
        t.put("A", green(20));
        t.put("B", red(10));
        assert_eq!(t.get(&"A"), Some(green(20)));
        assert_eq!(t.get(&"B"), Some(red(10)));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn repeated_get_hits_cache() {
        let mut t = IntersectionTable::new();
        t.put("A", green(20));
        t.get(&"A");
        t.get(&"A");
        t.get(&"A");
        assert_eq!(t.stats(), LookupStats { hits: 2, misses: 1 });
        assert_eq!(t.cached_len(), 1);
    }

    #[test]
    fn put_after_get_is_visible() {
        let mut t = IntersectionTable::new();
        t.put("A", green(20));
        assert_eq!(t.get(&"A"), Some(green(20)));

        t.put("A", red(35));
        assert_eq!(t.get(&"A"), Some(red(35)));
    }

    #[test]
    fn negative_lookup_is_cached_until_put() {
        let mut t = IntersectionTable::new();
        assert_eq!(t.get(&"C"), None);
        assert_eq!(t.get(&"C"), None);
        assert_eq!(t.stats().hits, 1);

        t.put("C", green(5));
        assert_eq!(t.get(&"C"), Some(green(5)));
    }

    #[test]
    fn every_missed_key_is_remembered_until_cleared() {
        let mut t: IntersectionTable<u32, IntersectionDetails> = IntersectionTable::new();
        for key in 0..50 {
            assert_eq!(t.get(&key), None);
        }
        assert_eq!(t.cached_len(), 50);
        assert!(t.is_empty());

        t.clear_cache();
        assert_eq!(t.cached_len(), 0);
    }

    #[test]
    fn remove_evicts_cache() {
        let mut t = IntersectionTable::new();
        t.put("A", green(20));
        t.get(&"A");
        assert_eq!(t.remove(&"A"), Some(green(20)));
        assert_eq!(t.get(&"A"), None);
        assert!(!t.contains(&"A"));
    }

    #[test]
    fn cache_disabled_never_hits() {
        let mut t = IntersectionTable::with_config(LookupConfig { read_through_cache: false });
        t.put("A", green(20));
        t.get(&"A");
        t.get(&"A");
        assert_eq!(t.stats(), LookupStats { hits: 0, misses: 2 });
        assert_eq!(t.cached_len(), 0);
    }

    #[test]
    fn clear_cache_keeps_data() {
        let mut t = IntersectionTable::new();
        t.put(1u32, green(1));
        t.get(&1);
        t.clear_cache();
        assert_eq!(t.cached_len(), 0);
        assert_eq!(t.get(&1), Some(green(1)));
    }
}

// ── Details & loader ──────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::{Cursor, Write};

    use super::*;
    use crate::{load_details_csv, load_details_reader, IntersectionTable, MetadataError};

    const DETAILS_CSV: &str = "\
intersection,signal_status,traffic_flow\n\
A,green,20\n\
B,red,10\n\
";

    #[test]
    fn signal_status_parsing() {
        assert_eq!("GREEN".parse::<SignalStatus>().unwrap(), SignalStatus::Green);
        assert_eq!(" yellow ".parse::<SignalStatus>().unwrap(), SignalStatus::Yellow);
        assert!("blue".parse::<SignalStatus>().is_err());
    }

    #[test]
    fn details_display() {
        assert_eq!(green(20).to_string(), "signal green / flow 20");
    }

    #[test]
    fn load_rows() {
        let mut t = IntersectionTable::new();
        assert_eq!(load_details_reader(Cursor::new(DETAILS_CSV), &mut t).unwrap(), 2);
        assert_eq!(t.get(&"A".to_string()), Some(green(20)));
        assert_eq!(t.get(&"B".to_string()), Some(red(10)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("intersections.csv");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(DETAILS_CSV.as_bytes())
            .unwrap();

        let mut t = IntersectionTable::new();
        assert_eq!(load_details_csv(&path, &mut t).unwrap(), 2);
        assert_eq!(t.get(&"B".to_string()), Some(red(10)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut t = IntersectionTable::new();
        let err = load_details_csv(&dir.path().join("absent.csv"), &mut t).unwrap_err();
        assert!(matches!(err, MetadataError::Io(_)));
        assert!(t.is_empty());
    }

    #[test]
    fn bad_status_is_rejected() {
        let csv = "intersection,signal_status,traffic_flow\nA,purple,20\n";
        let mut t = IntersectionTable::new();
        let err = load_details_reader(Cursor::new(csv), &mut t).unwrap_err();
        assert!(matches!(err, MetadataError::Parse(_)));
    }
}
