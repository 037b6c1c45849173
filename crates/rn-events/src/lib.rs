//! `rn-events` — traffic event queues.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`queue`]  | `EventQueue<P, T>` (`BTreeMap<P, VecDeque<T>>`)            |
//! | [`zoned`]  | `ZonedEventQueue<Z, P, T>` — one `EventQueue` per zone     |
//!
//! # Ordering
//!
//! Events pop in ascending priority value.  Events with equal priority pop
//! in the order they were added; callers should not depend on this beyond
//! "some deterministic order".  Payloads need no `Ord` impl.

pub mod queue;
pub mod zoned;


pub use queue::EventQueue;
pub use zoned::ZonedEventQueue;
