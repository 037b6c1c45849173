//! Zone-partitioned event queues.
//!
//! Each geographic zone owns an independent [`EventQueue`]; events in one
//! zone never delay events in another.  Zones are created on first `add`.

use std::hash::Hash;

use log::trace;
use rustc_hash::FxHashMap;

use crate::EventQueue;

/// One [`EventQueue`] per zone key.
#[derive(Clone, Debug)]
pub struct ZonedEventQueue<Z, P, T> {
    zones: FxHashMap<Z, EventQueue<P, T>>,
}

impl<Z, P, T> ZonedEventQueue<Z, P, T>
where
    Z: Eq + Hash,
    P: Ord + Clone,
{
    pub fn new() -> Self {
        Self { zones: FxHashMap::default() }
    }

    /// Queue `payload` at `priority` in `zone`, creating the zone if needed.
    pub fn add(&mut self, zone: Z, priority: P, payload: T) {
        self.zones.entry(zone).or_default().add(priority, payload);
    }

    /// Pop the lowest-priority event of `zone`.
    ///
    /// Returns `None` both for unknown zones and for zones that have been
    /// drained.
    pub fn pop_min(&mut self, zone: &Z) -> Option<(P, T)> {
        let event = self.zones.get_mut(zone)?.pop_min();
        if event.is_none() {
            trace!("pop on empty zone queue");
        }
        event
    }

    /// The lowest queued priority in `zone`.
    pub fn peek_priority(&self, zone: &Z) -> Option<&P> {
        self.zones.get(zone)?.peek_priority()
    }

    /// Events queued in `zone` (0 for unknown zones).
    pub fn zone_len(&self, zone: &Z) -> usize {
        self.zones.get(zone).map_or(0, EventQueue::len)
    }

    /// Events queued across all zones.
    pub fn len(&self) -> usize {
        self.zones.values().map(EventQueue::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.values().all(EventQueue::is_empty)
    }

    /// Every zone that has ever received an event, in no particular order.
    pub fn zones(&self) -> impl Iterator<Item = &Z> + '_ {
        self.zones.keys()
    }
}

impl<Z, P, T> Default for ZonedEventQueue<Z, P, T>
where
    Z: Eq + Hash,
    P: Ord + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}
