use alloc::vec::Vec;
use core::{
    fmt::{self, Debug},
    marker::PhantomData,
};

use crate::BoundedQueue;

/// Capacity sentinel meaning "no limit". This is the default.
pub const UNLIMITED_CAPACITY: isize = -1;

/// The maximum number of items a queue may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Capacity {
    /// At most this many items. `Bounded(0)` rejects every insert.
    Bounded(usize),
    #[default]
    Unlimited,
}

impl Capacity {
    /// Converts a raw capacity, where [`UNLIMITED_CAPACITY`] means unlimited.
    ///
    /// Returns `None` for any value below [`UNLIMITED_CAPACITY`].
    pub const fn try_from_raw(raw: isize) -> Option<Self> {
        if raw >= 0 {
            Some(Self::Bounded(raw as usize))
        } else if raw == UNLIMITED_CAPACITY {
            Some(Self::Unlimited)
        } else {
            None
        }
    }

    /// Converts a raw capacity, where [`UNLIMITED_CAPACITY`] means unlimited.
    ///
    /// # Panics
    ///
    /// Panics if `raw < UNLIMITED_CAPACITY`.
    pub const fn from_raw(raw: isize) -> Self {
        match Self::try_from_raw(raw) {
            Some(capacity) => capacity,
            None => panic!("cannot specify arbitrary negative capacity"),
        }
    }

    /// The limit, or `None` if unlimited.
    pub const fn limit(&self) -> Option<usize> {
        match self {
            Self::Bounded(n) => Some(*n),
            Self::Unlimited => None,
        }
    }

    /// Whether a queue currently holding `len` items can take one more.
    #[inline]
    pub(crate) const fn admits(&self, len: usize) -> bool {
        match self {
            Self::Bounded(n) => len < *n,
            Self::Unlimited => true,
        }
    }
}

/// Settings a queue is built from.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Config {
    pub(crate) capacity: Capacity,
}

/// A single construction setting, applied in order by
/// [`BoundedQueue::new`] and [`Builder::build`].
///
/// Applying the same kind of option twice keeps the last one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueueOption {
    /// Raw capacity, validated when applied. See [`with_capacity`].
    Capacity(isize),
}

impl QueueOption {
    pub(crate) fn apply(self, config: &mut Config) {
        match self {
            Self::Capacity(raw) => config.capacity = Capacity::from_raw(raw),
        }
    }
}

/// Sets the maximum number of items the queue may hold.
///
/// `0` makes a queue that can never hold anything, and
/// [`UNLIMITED_CAPACITY`] removes the limit.
///
/// The value is checked when the queue is built: constructing a queue with a
/// capacity below [`UNLIMITED_CAPACITY`] panics.
///
/// ```should_panic
/// use boundq::{with_capacity, BoundedQueue};
///
/// let _ = BoundedQueue::<u8>::new([with_capacity(-5)]);
/// ```
pub const fn with_capacity(capacity: isize) -> QueueOption {
    QueueOption::Capacity(capacity)
}

pub(crate) fn configure(options: impl IntoIterator<Item = QueueOption>) -> Config {
    let mut config = Config::default();
    for option in options {
        option.apply(&mut config);
    }
    config
}

/// Chained construction of a [`BoundedQueue`].
///
/// Options are recorded and only applied by [`build`](Builder::build), so an
/// invalid capacity panics there.
pub struct Builder<T> {
    options: Vec<QueueOption>,
    _data: PhantomData<fn() -> T>,
}

impl<T> Builder<T> {
    /// Starts with no options, i.e. an unbounded queue.
    pub fn new() -> Self {
        Self {
            options: Vec::new(),
            _data: PhantomData,
        }
    }

    /// Same as adding [`with_capacity`].
    pub fn capacity(self, capacity: isize) -> Self {
        self.option(with_capacity(capacity))
    }

    /// Records `option`, to be applied after those already recorded.
    pub fn option(mut self, option: QueueOption) -> Self {
        self.options.push(option);
        self
    }

    /// Applies the recorded options in order and creates the queue.
    ///
    /// # Panics
    ///
    /// Panics if a recorded capacity is below [`UNLIMITED_CAPACITY`].
    pub fn build(self) -> BoundedQueue<T> {
        BoundedQueue::new(self.options)
    }
}

impl<T> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            options: self.options.clone(),
            _data: PhantomData,
        }
    }
}

impl<T> Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("options", &self.options)
            .finish()
    }
}
