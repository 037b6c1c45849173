//! Edge weights and accumulated path distances.
//!
//! # Units
//!
//! A [`Weight`] is the traffic cost of one road.  It is unsigned, so the
//! non-negative precondition Dijkstra relies on holds for every graph that
//! can be constructed.  Path totals accumulate in `u64`, which cannot
//! overflow for any graph addressable by a `u32` node id.

use std::fmt;

/// Traffic weight of a single road.
pub type Weight = u32;

/// Minimum total weight from a source to some node.
///
/// Variant order matters: the derived `Ord` places every `Finite` value
/// below `Unreachable`, so `Unreachable` behaves as infinity in comparisons
/// while staying distinguishable from any real distance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distance {
    Finite(u64),
    Unreachable,
}

impl Distance {
    pub const ZERO: Distance = Distance::Finite(0);

    #[inline]
    pub fn is_reachable(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// The finite value, or `None` when unreachable.
    #[inline]
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Unreachable => None,
        }
    }

    /// Extend this distance by one road.  `Unreachable` stays unreachable.
    #[inline]
    pub fn extend(self, weight: Weight) -> Distance {
        match self {
            Distance::Finite(d) => Distance::Finite(d.saturating_add(weight as u64)),
            Distance::Unreachable => Distance::Unreachable,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(d: Option<u64>) -> Self {
        d.map_or(Distance::Unreachable, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Unreachable => f.write_str("inf"),
        }
    }
}
