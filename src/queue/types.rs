//! Core types: entries, queue modes, and the error taxonomy.

use thiserror::Error;

/// Whether the queue surfaces the highest or lowest priority first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueKind {
    /// Highest priority at the front (the default).
    #[default]
    Max,

    /// Lowest priority at the front.
    Min,
}

/// A stored `(value, priority)` pair.
///
/// The priority is fixed once the entry is created. To change an entry's
/// priority, remove it and enqueue it again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<T> {
    /// The caller's payload.
    pub value: T,

    /// The priority score. Never NaN for entries held by a queue.
    pub priority: f64,
}

impl<T> Entry<T> {
    /// Creates an entry from a value and an explicit priority.
    pub fn new(value: T, priority: f64) -> Self {
        Self { value, priority }
    }
}

/// Failures reported by queue operations.
///
/// All variants are caller-recoverable and leave the queue unchanged;
/// there are no partial insertions or removals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QueueError {
    /// An enqueue supplied no priority and no inference function was
    /// configured at construction.
    #[error("no priority value, or function to infer an entry's priority value, was provided")]
    NoPriorityValue,

    /// The queue is already at its configured capacity bound.
    #[error("the queue has reached its maximum size of {0}")]
    MaxSizeReached(usize),

    /// A dequeue was attempted on an empty queue.
    #[error("the queue is empty")]
    EmptyQueue,

    /// No entry matched the value given to `remove`.
    #[error("no entry matches the given value")]
    NotFound,

    /// The supplied or inferred priority was NaN, which has no defined
    /// position in a sorted sequence.
    #[error("NaN is not a valid priority")]
    NanPriority,
}
