// src/services/state_cell.rs
//
// Plain versioned state cell backing every independent input.
// The version bumps on every write so derived values can memoize on it.

use std::sync::{PoisonError, RwLock};

/// A value together with the write count that produced it
#[derive(Debug, Clone)]
pub struct Snapshot<T> {
    pub version: u64,
    pub value: T,
}

#[derive(Debug)]
pub struct StateCell<T> {
    inner: RwLock<Snapshot<T>>,
}

impl<T: Clone> StateCell<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(Snapshot { version: 0, value }),
        }
    }

    pub fn snapshot(&self) -> Snapshot<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn get(&self) -> T {
        self.snapshot().value
    }

    /// Stores `value` and returns the previous one
    pub fn replace(&self, value: T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.version += 1;
        std::mem::replace(&mut guard.value, value)
    }

    /// Mutates the value in place; the lock is released before returning
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        guard.version += 1;
        f(&mut guard.value)
    }
}
