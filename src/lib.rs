//! Domain-agnostic stable priority queue.
//!
//! A mutable ordered container of `(value, priority)` pairs supporting
//! insertion, inspection, and removal in priority order:
//!
//! - **Min or max mode**: surface the lowest- or highest-priority entry
//!   first (`max` is the default).
//! - **Stable ordering**: entries with equal priority keep their insertion
//!   order, in both modes.
//! - **Capacity bound**: an optional hard limit on the number of entries.
//! - **Priority inference**: an optional caller-supplied function deriving
//!   a priority from a value, so values can be enqueued without an explicit
//!   priority.
//!
//! The queue is backed by a sorted sequence maintained with a linear-scan
//! insert. This trades asymptotic insertion cost for a trivially stable,
//! fully inspectable ordering: the entries are always a sorted slice, and
//! iteration is just a walk over it. It is a deliberate fit for the small-
//! to-medium queues that dominate dispatching and scheduling workloads; it
//! is not a binary heap and does not try to be one.
//!
//! # Architecture
//!
//! One component: [`queue::PriorityQueue`], configured once at construction
//! via [`queue::QueueConfig`]. All operations are synchronous and
//! single-threaded; sharing a queue across threads requires external
//! mutual exclusion. The crate contains no domain-specific concepts;
//! scheduling, routing, event loops, etc. are all defined by consumers.

pub mod queue;
