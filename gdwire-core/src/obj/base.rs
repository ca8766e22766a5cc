/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use crate::obj::{Gd, GodotClass};
use crate::sys;

/// Restricted version of `Gd`, to hold the base instance inside a user's `GodotClass`.
///
/// Dereferences to `Gd<T>`, so engine methods of the base class can be called directly. Cannot be constructed by the user.
pub struct Base<T: GodotClass> {
    // Never dropped, thus acting as weak pointer. A strong reference would form a cycle: the engine object owns the user
    // instance, which would in turn keep the engine object alive.
    obj: ManuallyDrop<Gd<T>>,
}

impl<T: GodotClass> Base<T> {
    /// # Safety
    /// `base_ptr` must point to the live engine object that will own the user instance.
    pub(crate) unsafe fn from_sys(base_ptr: sys::GDExtensionObjectPtr) -> Self {
        assert!(!base_ptr.is_null(), "instance base is null pointer");

        Self {
            obj: ManuallyDrop::new(Gd::from_obj_sys_weak(base_ptr)),
        }
    }

    /// Returns a strong `Gd` to the base object.
    ///
    /// For reference-counted classes, the returned handle holds a reference like every other `Gd`.
    pub fn to_gd(&self) -> Gd<T> {
        (*self.obj).clone()
    }
}

impl<T: GodotClass> Deref for Base<T> {
    type Target = Gd<T>;

    fn deref(&self) -> &Gd<T> {
        &self.obj
    }
}

impl<T: GodotClass> DerefMut for Base<T> {
    fn deref_mut(&mut self) -> &mut Gd<T> {
        &mut self.obj
    }
}

impl<T: GodotClass> fmt::Debug for Base<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Base {{ {:?} }}", *self.obj)
    }
}
