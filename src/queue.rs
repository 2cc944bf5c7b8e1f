use alloc::collections::VecDeque;
use core::fmt::{self, Debug};

use crate::{
    error::{OverflowError, UnderflowError},
    lock::{LockType, RwLockLike},
    options::{self, Builder, Capacity, QueueOption},
};

/// A first-in first-out queue that is safe to share between threads.
pub trait Queue<T> {
    /// Adds `value` to the back of the queue.
    /// Hands `value` back as an error if the queue is at capacity.
    fn enqueue(&self, value: T) -> Result<(), OverflowError<T>>;

    /// Removes and returns the front item.
    /// Fails if the queue is empty.
    fn dequeue(&self) -> Result<T, UnderflowError>;

    /// Returns a copy of the front item without removing it.
    /// Fails if the queue is empty.
    fn peek(&self) -> Result<T, UnderflowError>
    where
        T: Clone;

    /// Returns the current number of items.
    fn size(&self) -> usize;
}

/// A FIFO queue with an optional capacity limit, guarded by a reader-writer
/// lock.
///
/// Inserts and removals take the lock exclusively, inspection shares it.
/// Nothing blocks on the queue's contents: inserting into a full queue and
/// removing from an empty one fail immediately.
pub struct BoundedQueue<T> {
    /// Fixed at construction, so it lives outside the lock.
    capacity: Capacity,
    /// Front of the deque is the oldest item.
    items: LockType<VecDeque<T>>,
}

impl<T> BoundedQueue<T> {
    /// Creates an empty queue, applying `options` in order.
    ///
    /// Without options the queue is unbounded.
    ///
    /// # Panics
    ///
    /// Panics if an option sets a capacity below
    /// [`UNLIMITED_CAPACITY`](crate::UNLIMITED_CAPACITY).
    pub fn new(options: impl IntoIterator<Item = QueueOption>) -> Self {
        let config = options::configure(options);
        Self {
            capacity: config.capacity,
            items: LockType::new(VecDeque::new()),
        }
    }

    /// Creates an empty queue without a capacity limit.
    pub fn unbounded() -> Self {
        Self::new([])
    }

    /// Starts a [`Builder`] for a queue of `T`.
    pub fn builder() -> Builder<T> {
        Builder::new()
    }

    /// Adds `value` to the back of the queue.
    ///
    /// If the queue already holds as many items as its capacity allows,
    /// nothing is inserted and `value` is returned inside the error.
    pub fn enqueue(&self, value: T) -> Result<(), OverflowError<T>> {
        let mut items = self.items.write();
        if !self.capacity.admits(items.len()) {
            return Err(OverflowError(value));
        }
        items.push_back(value);
        Ok(())
    }

    /// Removes and returns the item that has been queued the longest.
    pub fn dequeue(&self) -> Result<T, UnderflowError> {
        self.items.write().pop_front().ok_or(UnderflowError)
    }

    /// Like [`dequeue`](Self::dequeue), but always yields a value:
    /// `T::default()` when the queue is empty.
    pub fn dequeue_or_default(&self) -> (T, Result<(), UnderflowError>)
    where
        T: Default,
    {
        match self.dequeue() {
            Ok(value) => (value, Ok(())),
            Err(err) => (T::default(), Err(err)),
        }
    }

    /// Returns a clone of the front item, leaving the queue unchanged.
    pub fn peek(&self) -> Result<T, UnderflowError>
    where
        T: Clone,
    {
        self.peek_with(T::clone)
    }

    /// Calls `f` with the front item while holding shared access.
    ///
    /// `f` must not call back into an operation that needs exclusive access
    /// to this queue, or it will deadlock.
    pub fn peek_with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, UnderflowError> {
        self.items.read().front().map(f).ok_or(UnderflowError)
    }

    /// Like [`peek`](Self::peek), but always yields a value:
    /// `T::default()` when the queue is empty.
    pub fn peek_or_default(&self) -> (T, Result<(), UnderflowError>)
    where
        T: Clone + Default,
    {
        match self.peek() {
            Ok(value) => (value, Ok(())),
            Err(err) => (T::default(), Err(err)),
        }
    }

    /// Returns the number of items currently queued.
    /// The value may be stale by the time it is used.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Indicates whether the queue is empty.
    /// The result may be stale.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns the capacity the queue was built with.
    pub fn capacity(&self) -> Capacity {
        self.capacity
    }
}

impl<T> Queue<T> for BoundedQueue<T> {
    fn enqueue(&self, value: T) -> Result<(), OverflowError<T>> {
        BoundedQueue::enqueue(self, value)
    }

    fn dequeue(&self) -> Result<T, UnderflowError> {
        BoundedQueue::dequeue(self)
    }

    fn peek(&self) -> Result<T, UnderflowError>
    where
        T: Clone,
    {
        BoundedQueue::peek(self)
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Default for BoundedQueue<T> {
    fn default() -> Self {
        Self::unbounded()
    }
}

impl<T> Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
