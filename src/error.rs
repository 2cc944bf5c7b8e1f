use core::fmt::{self, Debug};

use thiserror::Error;

/// Returned by [`enqueue`](crate::BoundedQueue::enqueue) when the queue is at
/// capacity.
///
/// The rejected value is handed back unchanged and can be recovered with
/// [`into_inner`](OverflowError::into_inner).
#[derive(Error, Clone, Copy, PartialEq, Eq)]
#[error("queue overflow")]
pub struct OverflowError<T>(pub T);

impl<T> OverflowError<T> {
    /// Returns the value that could not be enqueued.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Debug for OverflowError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad("OverflowError(..)")
    }
}

/// Returned by [`dequeue`](crate::BoundedQueue::dequeue) and
/// [`peek`](crate::BoundedQueue::peek) when the queue is empty.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[error("queue underflow")]
pub struct UnderflowError;

/// Either queue error, without the rejected value.
///
/// Both [`OverflowError`] and [`UnderflowError`] convert into this, so code
/// mixing inserts and removals can propagate with `?`.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueueError {
    #[error("queue overflow")]
    Overflow,
    #[error("queue underflow")]
    Underflow,
}

impl QueueError {
    /// Whether an insert was rejected because the queue was full.
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow)
    }

    /// Whether a removal or peek found the queue empty.
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow)
    }
}

impl<T> From<OverflowError<T>> for QueueError {
    fn from(_: OverflowError<T>) -> Self {
        Self::Overflow
    }
}

impl From<UnderflowError> for QueueError {
    fn from(_: UnderflowError) -> Self {
        Self::Underflow
    }
}
