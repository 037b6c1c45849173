//! Demo configuration, optionally read from a JSON file.
//!
//! ```json
//! {
//!   "index":  { "cache_distance_tables": true, "invalidate_on_mutation": true },
//!   "lookup": { "read_through_cache": true },
//!   "roads_csv": "roads.csv"
//! }
//! ```
//!
//! Every field is optional; missing ones take their defaults.
//!
//! Command line: `road_demo [config.json|-] [roads.csv]`.  `-` (or no
//! argument) uses the default configuration; a roads CSV given on the
//! command line overrides `roads_csv` from the file.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use rn_core::{IndexConfig, LookupConfig, RnError, RnResult};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub index:     IndexConfig,
    pub lookup:    LookupConfig,
    /// Road CSV to load instead of the built-in A/B/C triangle.
    pub roads_csv: Option<PathBuf>,
}

impl DemoConfig {
    pub fn load(path: &Path) -> RnResult<Self> {
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| RnError::Config(format!("{}: {e}", path.display())))
    }

    /// Build the configuration from the process arguments (program name
    /// first, as returned by `std::env::args_os`).
    pub fn from_args<I: IntoIterator<Item = OsString>>(args: I) -> RnResult<Self> {
        let mut args = args.into_iter().skip(1);
        let mut config = match args.next() {
            Some(path) if path != "-" => Self::load(Path::new(&path))?,
            _ => Self::default(),
        };
        if let Some(roads) = args.next() {
            config.roads_csv = Some(PathBuf::from(roads));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::ffi::OsString;
    use std::io::Write;
    use std::path::PathBuf;

    use super::DemoConfig;

    fn args(list: &[&str]) -> Vec<OsString> {
        std::iter::once("road_demo")
            .chain(list.iter().copied())
            .map(OsString::from)
            .collect()
    }

    fn write_config(dir: &tempfile::TempDir, json: &str) -> PathBuf {
        let path = dir.path().join("demo.json");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(json.as_bytes())
            .unwrap();
        path
    }

    #[test]
    fn no_arguments_uses_defaults() {
        let config = DemoConfig::from_args(args(&[])).unwrap();
        assert!(config.index.cache_distance_tables);
        assert_eq!(config.roads_csv, None);
    }

    #[test]
    fn dash_skips_config_file_and_takes_roads_csv() {
        let config = DemoConfig::from_args(args(&["-", "roads.csv"])).unwrap();
        assert_eq!(config.roads_csv, Some(PathBuf::from("roads.csv")));
    }

    #[test]
    fn roads_argument_overrides_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r#"{ "index": { "cache_distance_tables": false }, "roads_csv": "from_file.csv" }"#,
        );
        let path = path.to_str().unwrap();

        let config = DemoConfig::from_args(args(&[path])).unwrap();
        assert!(!config.index.cache_distance_tables);
        assert!(config.index.invalidate_on_mutation);
        assert_eq!(config.roads_csv, Some(PathBuf::from("from_file.csv")));

        let config = DemoConfig::from_args(args(&[path, "override.csv"])).unwrap();
        assert_eq!(config.roads_csv, Some(PathBuf::from("override.csv")));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "{ not json");
        assert!(DemoConfig::from_args(args(&[path.to_str().unwrap()])).is_err());
    }
}
