//! Stable priority queue.
//!
//! An ordered container of `(value, priority)` pairs. The sequence is kept
//! sorted by a linear-scan insert that places a new entry before the first
//! strictly-less-preferred one, which makes the ordering stable: equal
//! priorities never reorder. Min/max mode, an optional capacity bound, and
//! an optional priority-inference function are fixed at construction via
//! [`QueueConfig`].

mod config;
mod container;
mod types;

pub use config::{InferFn, QueueConfig};
pub use container::PriorityQueue;
pub use types::{Entry, QueueError, QueueKind};
