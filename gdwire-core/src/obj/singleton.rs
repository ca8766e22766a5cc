/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_void;
use std::sync::OnceLock;

use crate::obj::{Gd, GodotClass};
use crate::sys;

/// Engine singleton, looked up on first access and cached afterwards.
///
/// Each generated `singleton()` function owns one cache in a `static`.
#[doc(hidden)]
pub struct SingletonCache {
    object_ptr: OnceLock<sys::SyncPtr<c_void>>,
}

impl SingletonCache {
    pub const fn new() -> Self {
        Self {
            object_ptr: OnceLock::new(),
        }
    }

    /// Handle to the singleton of class `T`.
    ///
    /// # Panics
    /// If the engine provides no singleton of that name.
    pub fn get<T: GodotClass>(&self) -> Gd<T> {
        let object_ptr = self.object_ptr.get_or_init(|| {
            let class_name = T::class_name();
            sys::out!("Look up singleton {class_name}");

            let name = class_name.to_string_name();
            // SAFETY: valid StringName for the duration of the call.
            let object_ptr = unsafe { sys::interface_fn!(global_get_singleton)(name.string_sys()) };
            sys::SyncPtr::new(object_ptr)
        });

        // SAFETY: singletons live as long as the engine; the engine keeps ownership.
        let singleton = unsafe { Gd::from_tagged(sys::Tagged::new(object_ptr.get(), sys::PointerTag::Borrowed)) };
        match singleton {
            Some(gd) => gd,
            None => panic!("engine singleton {} is not available", T::class_name()),
        }
    }
}

impl Default for SingletonCache {
    fn default() -> Self {
        Self::new()
    }
}
