//! A thread-safe FIFO queue with an optional capacity limit.
//!
//! [`BoundedQueue`] guards its items with a single reader-writer lock:
//! [`enqueue`](BoundedQueue::enqueue) and [`dequeue`](BoundedQueue::dequeue)
//! take it exclusively, [`peek`](BoundedQueue::peek) and
//! [`len`](BoundedQueue::len) share it. No operation ever waits for the queue
//! to fill or drain; a full or empty queue is reported immediately.
//!
//! ```
//! use boundq::{with_capacity, BoundedQueue, QueueError};
//!
//! let q = BoundedQueue::new([with_capacity(2)]);
//! q.enqueue(1).unwrap();
//! q.enqueue(2).unwrap();
//! assert_eq!(q.enqueue(3).unwrap_err().into_inner(), 3);
//!
//! assert_eq!(q.dequeue(), Ok(1));
//! assert_eq!(q.peek(), Ok(2));
//! assert_eq!(q.len(), 1);
//!
//! let err: QueueError = BoundedQueue::<i32>::default().dequeue().unwrap_err().into();
//! assert!(err.is_underflow());
//! ```

#![no_std]

#[cfg(any(feature = "alloc", test))]
extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

mod error;
mod lock;
mod options;
mod queue;

pub use error::*;
pub use options::*;
pub use queue::*;
