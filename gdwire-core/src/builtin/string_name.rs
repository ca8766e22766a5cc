/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;

use crate::builtin::GString;
use crate::sys;

/// Interned engine string, used for class, method and signal names.
#[repr(transparent)]
pub struct StringName {
    opaque: sys::Opaque<8>,
}

impl_builtin_lifecycle!(StringName; default: string_name_construct_default, copy: string_name_construct_copy, destroy: string_name_destroy);

impl StringName {
    pub fn new() -> Self {
        Self::construct_default()
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.sys()
    }

    /// Copies a name the engine passed as `GDExtensionConstStringNamePtr`.
    ///
    /// # Safety
    /// `ptr` must point to a live `StringName`.
    #[doc(hidden)]
    pub unsafe fn clone_from_string_sys(ptr: sys::GDExtensionConstStringNamePtr) -> Self {
        Self::clone_from_arg(ptr)
    }
}

impl Default for StringName {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        let ctor = sys::interface_fn!(string_name_new_with_utf8_chars_and_len);

        // SAFETY: ctor initializes the destination from `s.len()` bytes of `s`.
        unsafe {
            Self::construct_with(|ptr| ctor(ptr, s.as_ptr() as *const c_char, s.len() as sys::GDExtensionInt))
        }
    }
}

impl From<&GString> for StringName {
    fn from(s: &GString) -> Self {
        // SAFETY: the constructor takes a single String argument.
        unsafe {
            Self::construct_with(|ptr| {
                let args = [s.sys()];
                (sys::builtin_lifecycle_api().string_name_from_string)(ptr, args.as_ptr())
            })
        }
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&GString::from(self), f)
    }
}

impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "&\"{self}\"")
    }
}

impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        GString::from(self) == GString::from(other)
    }
}

impl Eq for StringName {}

impl PartialEq<&str> for StringName {
    fn eq(&self, other: &&str) -> bool {
        GString::from(self) == *other
    }
}
