//! The metadata record stored per intersection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{MetadataError, MetadataResult};

/// Current state of an intersection's traffic signal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalStatus {
    Green,
    Yellow,
    Red,
}

impl FromStr for SignalStatus {
    type Err = MetadataError;

    fn from_str(s: &str) -> MetadataResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(SignalStatus::Green),
            "yellow" => Ok(SignalStatus::Yellow),
            "red" => Ok(SignalStatus::Red),
            other => Err(MetadataError::Parse(format!("unknown signal status {other:?}"))),
        }
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SignalStatus::Green => "green",
            SignalStatus::Yellow => "yellow",
            SignalStatus::Red => "red",
        })
    }
}

/// Signal state and observed flow (vehicles per interval) at an intersection.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct IntersectionDetails {
    pub signal_status: SignalStatus,
    pub traffic_flow:  u32,
}

impl IntersectionDetails {
    pub fn new(signal_status: SignalStatus, traffic_flow: u32) -> Self {
        Self { signal_status, traffic_flow }
    }
}

impl fmt::Display for IntersectionDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "signal {} / flow {}", self.signal_status, self.traffic_flow)
    }
}
