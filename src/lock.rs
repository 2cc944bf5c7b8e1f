use core::ops::{Deref, DerefMut};

use cfg_if::cfg_if;

#[cfg(not(any(feature = "std", feature = "spin-lock")))]
compile_error!("without `std`, the `spin-lock` feature is required");

cfg_if! {
    if #[cfg(feature = "spin-lock")] {
        pub(crate) type LockType<T> = SpinRwLock<T>;
    } else {
        pub(crate) type LockType<T> = StdRwLock<T>;
    }
}

/// A reader-writer lock: any number of readers, or a single writer.
pub(crate) trait RwLockLike<T> {
    type ReadGuard<'a>: Deref<Target = T>
    where
        Self: 'a,
        T: 'a;
    type WriteGuard<'a>: DerefMut<Target = T>
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self;
    /// Shared access, excluding writers until the guard is dropped.
    fn read(&self) -> Self::ReadGuard<'_>;
    /// Exclusive access, excluding readers and writers until the guard is dropped.
    fn write(&self) -> Self::WriteGuard<'_>;
}

#[cfg(feature = "std")]
#[cfg_attr(feature = "spin-lock", allow(dead_code))]
pub(crate) struct StdRwLock<T>(std::sync::RwLock<T>);

#[cfg(feature = "std")]
impl<T> RwLockLike<T> for StdRwLock<T> {
    type ReadGuard<'a>
        = std::sync::RwLockReadGuard<'a, T>
    where
        Self: 'a,
        T: 'a;
    type WriteGuard<'a>
        = std::sync::RwLockWriteGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self {
        Self(std::sync::RwLock::new(value))
    }

    // Every critical section leaves the data consistent, so a panic while
    // the lock was held does not invalidate it.
    fn read(&self) -> Self::ReadGuard<'_> {
        self.0
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> Self::WriteGuard<'_> {
        self.0
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

#[cfg(feature = "spin-lock")]
pub(crate) struct SpinRwLock<T>(spin::RwLock<T>);

#[cfg(feature = "spin-lock")]
impl<T> RwLockLike<T> for SpinRwLock<T> {
    type ReadGuard<'a>
        = spin::RwLockReadGuard<'a, T>
    where
        Self: 'a,
        T: 'a;
    type WriteGuard<'a>
        = spin::RwLockWriteGuard<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn new(value: T) -> Self {
        Self(spin::RwLock::new(value))
    }

    fn read(&self) -> Self::ReadGuard<'_> {
        self.0.read()
    }

    fn write(&self) -> Self::WriteGuard<'_> {
        self.0.write()
    }
}
