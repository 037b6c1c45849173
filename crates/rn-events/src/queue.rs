//! `EventQueue` — min-priority queue of traffic events.
//!
//! Events are bucketed by priority in a `BTreeMap`, so `pop_min` is
//! O(log P) where P is the number of distinct priorities currently queued,
//! and equal-priority events keep their arrival order inside the bucket.

use std::collections::{BTreeMap, VecDeque};

/// A priority queue mapping priority → events, lowest priority value first.
#[derive(Clone, Debug)]
pub struct EventQueue<P, T> {
    inner: BTreeMap<P, VecDeque<T>>,
    /// Cached total event count for O(1) `len()`.
    total: usize,
}

impl<P: Ord, T> EventQueue<P, T> {
    pub fn new() -> Self {
        Self { inner: BTreeMap::new(), total: 0 }
    }

    /// Queue `payload` at `priority`.
    pub fn add(&mut self, priority: P, payload: T) {
        self.inner.entry(priority).or_default().push_back(payload);
        self.total += 1;
    }

    /// Remove and return the event with the lowest priority value, or `None`
    /// if the queue is empty.
    pub fn pop_min(&mut self) -> Option<(P, T)>
    where
        P: Clone,
    {
        let mut bucket = self.inner.first_entry()?;
        let payload = bucket.get_mut().pop_front()?;
        let priority = bucket.key().clone();
        if bucket.get().is_empty() {
            bucket.remove();
        }
        self.total -= 1;
        Some((priority, payload))
    }

    /// The lowest queued priority, or `None` if empty.
    pub fn peek_priority(&self) -> Option<&P> {
        self.inner.keys().next()
    }

    /// Total number of queued events.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct priorities with at least one queued event.
    pub fn priority_count(&self) -> usize {
        self.inner.len()
    }
}

impl<P: Ord, T> Default for EventQueue<P, T> {
    fn default() -> Self {
        Self::new()
    }
}
