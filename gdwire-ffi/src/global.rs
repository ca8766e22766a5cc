/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ops::{Deref, DerefMut};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Lazily initialized, mutex-guarded global.
///
/// Usable in `static` items thanks to the `const` constructor. The init function runs on first [`lock()`](Self::lock).
/// Registries of this crate are only touched from the main thread during load/unload, so the mutex is uncontended; it exists
/// to make the statics `Sync`.
pub struct Global<T> {
    value: Mutex<Option<T>>,
    init_fn: fn() -> T,
}

impl<T> Global<T> {
    pub const fn new(init_fn: fn() -> T) -> Self {
        Self {
            value: Mutex::new(None),
            init_fn,
        }
    }

    /// `Global<T>` initialized with `T::default()`.
    ///
    /// Inherent instead of `Default` trait, so it can be `const`.
    pub const fn default() -> Self
    where
        T: Default,
    {
        Self::new(T::default)
    }

    /// Locks the global, initializing it if needed.
    ///
    /// A panic while the lock was held does not make the global unusable; registries stay consistent between operations.
    pub fn lock(&self) -> GlobalGuard<'_, T> {
        let mut guard = self.value.lock().unwrap_or_else(PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some((self.init_fn)());
        }

        GlobalGuard { guard }
    }
}

/// Access to the value of a locked [`Global`].
pub struct GlobalGuard<'a, T> {
    guard: MutexGuard<'a, Option<T>>,
}

impl<T> Deref for GlobalGuard<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        match self.guard.as_ref() {
            Some(value) => value,
            None => unreachable!("Global<T> guard without value"),
        }
    }
}

impl<T> DerefMut for GlobalGuard<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        match self.guard.as_mut() {
            Some(value) => value,
            None => unreachable!("Global<T> guard without value"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    static NAMES: Global<BTreeMap<u64, &'static str>> = Global::default();
    static COUNTERS: Global<Vec<u32>> = Global::new(|| vec![10, 20]);

    #[test]
    fn global_map_accumulates() {
        NAMES.lock().insert(3, "Timer");
        NAMES.lock().insert(1, "Object");

        let names = NAMES.lock();
        assert_eq!(names.values().copied().collect::<Vec<_>>(), vec!["Object", "Timer"]);
    }

    #[test]
    fn global_vec_initialized_lazily() {
        COUNTERS.lock().push(30);

        assert_eq!(*COUNTERS.lock(), vec![10, 20, 30]);
    }
}
