/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Borrow guards returned by `Gd::bind()` and `Gd::bind_mut()`.
//!
//! While a guard lives, the instance storage stays borrowed. Engine calls into the same instance that need conflicting
//! access (a `&mut self` virtual during `bind()`, anything during `bind_mut()`) panic instead of aliasing.

use std::cell::{Ref, RefMut};
use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::obj::GodotClass;

/// Shared access to the Rust part of a user object, obtained via [`Gd::bind`][crate::obj::Gd::bind].
pub struct GdRef<'a, T: GodotClass> {
    guard: Ref<'a, T>,
}

impl<'a, T: GodotClass> GdRef<'a, T> {
    pub(crate) fn from_guard(guard: Ref<'a, T>) -> Self {
        Self { guard }
    }
}

impl<T: GodotClass> Deref for GdRef<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T: GodotClass + fmt::Debug> fmt::Debug for GdRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.guard, f)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Exclusive access to the Rust part of a user object, obtained via [`Gd::bind_mut`][crate::obj::Gd::bind_mut].

pub struct GdMut<'a, T: GodotClass> {
    guard: RefMut<'a, T>,
}

impl<'a, T: GodotClass> GdMut<'a, T> {
    pub(crate) fn from_guard(guard: RefMut<'a, T>) -> Self {
        Self { guard }
    }
}

impl<T: GodotClass> Deref for GdMut<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.guard
    }
}

impl<T: GodotClass> DerefMut for GdMut<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.guard
    }
}

impl<T: GodotClass + fmt::Debug> fmt::Debug for GdMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.guard, f)
    }
}
