//! The priority queue container.

use super::config::{InferFn, QueueConfig};
use super::types::{Entry, QueueError, QueueKind};

/// A stable priority queue over values of type `T`.
///
/// Entries are held in a sequence that is always sorted by priority for the
/// active [`QueueKind`]: front-to-back runs highest-to-lowest in max mode
/// and lowest-to-highest in min mode. Insertion scans for the first entry
/// strictly less preferred than the new one and inserts before it, so
/// equal-priority entries always keep their insertion order.
///
/// All operations are synchronous and run to completion; a failed operation
/// leaves the queue exactly as it was. The queue performs no internal
/// synchronization and assumes a single logical caller at a time.
///
/// # Examples
///
/// ```
/// use u_pqueue::queue::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.enqueue("low", 1.0).unwrap();
/// queue.enqueue("high", 2.0).unwrap();
///
/// assert_eq!(queue.peek(), Some(&"high"));
/// assert_eq!(queue.dequeue().unwrap(), "high");
/// assert_eq!(queue.dequeue().unwrap(), "low");
/// ```
pub struct PriorityQueue<T> {
    entries: Vec<Entry<T>>,
    kind: QueueKind,
    capacity: Option<usize>,
    infer: Option<InferFn<T>>,
}

impl<T> PriorityQueue<T> {
    /// Creates an empty queue with default configuration: max mode,
    /// unbounded, no inference function.
    pub fn new() -> Self {
        Self::with_config(QueueConfig::default())
    }

    /// Creates an empty queue from a configuration.
    ///
    /// # Panics
    ///
    /// Panics if the configuration is invalid (see
    /// [`QueueConfig::validate`]), e.g. a capacity bound of zero.
    pub fn with_config(config: QueueConfig<T>) -> Self {
        config.validate().expect("invalid QueueConfig");

        Self {
            entries: Vec::new(),
            kind: config.kind,
            capacity: config.capacity,
            infer: config.infer,
        }
    }

    /// Creates a queue seeded with pre-built entries.
    ///
    /// Entries are inserted one at a time through the normal insertion
    /// rule, in the order given, so the seeded queue obeys the same
    /// ordering and stability guarantees as one built by repeated
    /// [`enqueue`](Self::enqueue) calls. Seeding more entries than a
    /// configured capacity bound fails with [`QueueError::MaxSizeReached`]
    /// at the first entry that would exceed it; seeds are not truncated
    /// silently.
    pub fn from_entries(
        config: QueueConfig<T>,
        entries: impl IntoIterator<Item = Entry<T>>,
    ) -> Result<Self, QueueError> {
        let mut queue = Self::with_config(config);
        for entry in entries {
            queue.enqueue_entry(entry)?;
        }
        Ok(queue)
    }

    /// Creates a queue seeded with raw values, deriving each priority via
    /// the configured inference function.
    ///
    /// Fails with [`QueueError::NoPriorityValue`] when the configuration
    /// carries no inference function. Capacity handling matches
    /// [`from_entries`](Self::from_entries).
    pub fn from_values(
        config: QueueConfig<T>,
        values: impl IntoIterator<Item = T>,
    ) -> Result<Self, QueueError> {
        let mut queue = Self::with_config(config);
        for value in values {
            queue.enqueue_inferred(value)?;
        }
        Ok(queue)
    }

    /// Returns the queue mode.
    pub fn kind(&self) -> QueueKind {
        self.kind
    }

    /// Returns the capacity bound, if any.
    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Returns the number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The front value (most preferred under the active mode), without
    /// removing it. Returns `None` on an empty queue; peeking is never an
    /// error.
    pub fn peek(&self) -> Option<&T> {
        self.entries.first().map(|entry| &entry.value)
    }

    /// The back value (least preferred), without removing it.
    pub fn peek_end(&self) -> Option<&T> {
        self.entries.last().map(|entry| &entry.value)
    }

    /// Read-only view of the entries in current priority order.
    pub fn entries(&self) -> &[Entry<T>] {
        &self.entries
    }

    /// Iterates over the values in current priority order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.value)
    }

    /// Iterates over the entries in current priority order.
    pub fn iter(&self) -> std::slice::Iter<'_, Entry<T>> {
        self.entries.iter()
    }

    /// Inserts a value with an explicit priority and returns a reference
    /// to the newly created entry.
    ///
    /// Fails with [`QueueError::NanPriority`] for NaN priorities (NaN has
    /// no defined position in a sorted sequence) and
    /// [`QueueError::MaxSizeReached`] when the queue is at its capacity
    /// bound. On failure nothing is inserted.
    pub fn enqueue(&mut self, value: T, priority: f64) -> Result<&Entry<T>, QueueError> {
        self.enqueue_entry(Entry::new(value, priority))
    }

    /// Inserts a value, deriving its priority from the configured
    /// inference function.
    ///
    /// Fails with [`QueueError::NoPriorityValue`] when no inference
    /// function was configured at construction.
    pub fn enqueue_inferred(&mut self, value: T) -> Result<&Entry<T>, QueueError> {
        let priority = match &self.infer {
            Some(infer) => infer(&value),
            None => return Err(QueueError::NoPriorityValue),
        };
        self.enqueue_entry(Entry::new(value, priority))
    }

    /// Inserts a pre-built entry through the same ordering rule as
    /// [`enqueue`](Self::enqueue).
    pub fn enqueue_entry(&mut self, entry: Entry<T>) -> Result<&Entry<T>, QueueError> {
        if entry.priority.is_nan() {
            return Err(QueueError::NanPriority);
        }
        if let Some(capacity) = self.capacity {
            if self.entries.len() >= capacity {
                return Err(QueueError::MaxSizeReached(capacity));
            }
        }

        let index = self.insert_position(entry.priority);
        self.entries.insert(index, entry);
        Ok(&self.entries[index])
    }

    /// Removes and returns the front value.
    pub fn dequeue(&mut self) -> Result<T, QueueError> {
        if self.entries.is_empty() {
            return Err(QueueError::EmptyQueue);
        }
        Ok(self.entries.remove(0).value)
    }

    /// Removes and returns the back value.
    pub fn dequeue_from_end(&mut self) -> Result<T, QueueError> {
        match self.entries.pop() {
            Some(entry) => Ok(entry.value),
            None => Err(QueueError::EmptyQueue),
        }
    }

    /// Removes every entry and returns them in their current priority
    /// order, leaving the queue empty.
    pub fn clear(&mut self) -> Vec<Entry<T>> {
        std::mem::take(&mut self.entries)
    }

    /// Position of the first entry strictly less preferred than the given
    /// priority, or the end of the sequence. Inserting there keeps the
    /// sequence sorted and never displaces an equal-priority entry.
    fn insert_position(&self, priority: f64) -> usize {
        let found = self.entries.iter().position(|entry| match self.kind {
            QueueKind::Max => entry.priority < priority,
            QueueKind::Min => entry.priority > priority,
        });
        found.unwrap_or(self.entries.len())
    }
}

impl<T: PartialEq> PriorityQueue<T> {
    /// Whether any entry's value equals the given value.
    ///
    /// Matching uses `PartialEq`, so structurally-equal values match.
    /// Callers needing identity semantics should key values by a unique id.
    pub fn contains(&self, value: &T) -> bool {
        self.entries.iter().any(|entry| entry.value == *value)
    }

    /// Removes and returns the first entry whose value equals the given
    /// value. All other entries keep their relative order.
    ///
    /// Equality semantics match [`contains`](Self::contains).
    pub fn remove(&mut self, value: &T) -> Result<Entry<T>, QueueError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.value == *value)
            .ok_or(QueueError::NotFound)?;
        Ok(self.entries.remove(index))
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("kind", &self.kind)
            .field("capacity", &self.capacity)
            .field("entries", &self.entries)
            .finish()
    }
}

/// Consuming iteration yields entries in priority order.
impl<T> IntoIterator for PriorityQueue<T> {
    type Item = Entry<T>;
    type IntoIter = std::vec::IntoIter<Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PriorityQueue<T> {
    type Item = &'a Entry<T>;
    type IntoIter = std::slice::Iter<'a, Entry<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
