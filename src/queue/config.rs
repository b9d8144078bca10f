//! Queue configuration.

use super::types::QueueKind;

/// A caller-supplied function deriving a priority from a value.
///
/// Used when an enqueue supplies no explicit priority. Must be pure: the
/// queue may call it at most once per insertion and caches nothing.
pub type InferFn<T> = Box<dyn Fn(&T) -> f64 + Send + Sync>;

/// Configuration for a [`PriorityQueue`](super::PriorityQueue).
///
/// Set once at construction and immutable thereafter.
///
/// # Examples
///
/// ```
/// use u_pqueue::queue::{QueueConfig, QueueKind};
///
/// let config = QueueConfig::<String>::default()
///     .with_kind(QueueKind::Min)
///     .with_capacity(64)
///     .with_infer(|s: &String| s.len() as f64);
/// ```
pub struct QueueConfig<T> {
    /// Queue mode. Defaults to [`QueueKind::Max`].
    pub kind: QueueKind,

    /// Maximum number of entries. `None` means unbounded (the default).
    pub capacity: Option<usize>,

    /// Optional priority-inference function. Required only when callers
    /// intend to enqueue values without an explicit priority.
    pub infer: Option<InferFn<T>>,
}

impl<T> Default for QueueConfig<T> {
    fn default() -> Self {
        Self {
            kind: QueueKind::Max,
            capacity: None,
            infer: None,
        }
    }
}

impl<T> QueueConfig<T> {
    /// Sets the queue mode.
    pub fn with_kind(mut self, kind: QueueKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the capacity bound.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Sets the priority-inference function.
    pub fn with_infer<F>(mut self, infer: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        self.infer = Some(Box::new(infer));
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(capacity) = self.capacity {
            if capacity == 0 {
                return Err("capacity must be positive".into());
            }
        }
        Ok(())
    }
}

impl<T> std::fmt::Debug for QueueConfig<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueueConfig")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("infer", &self.infer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}
