/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::c_char;
use std::fmt;

use crate::builtin::StringName;
use crate::sys;

/// Engine-side string, the `String` type of the class API.
///
/// Storage is owned by the engine; converting to and from Rust strings goes through UTF-8.
#[repr(transparent)]
pub struct GString {
    opaque: sys::Opaque<8>,
}

impl_builtin_lifecycle!(GString; default: string_construct_default, copy: string_construct_copy, destroy: string_destroy);

impl GString {
    /// Empty string.
    pub fn new() -> Self {
        Self::construct_default()
    }

    pub fn is_empty(&self) -> bool {
        self.utf8_len() == 0
    }

    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringPtr {
        self.sys()
    }

    fn utf8_len(&self) -> usize {
        let to_utf8 = sys::interface_fn!(string_to_utf8_chars);

        // SAFETY: a null buffer of length 0 only queries the length.
        let len = unsafe { to_utf8(self.string_sys(), std::ptr::null_mut(), 0) };
        usize::try_from(len).unwrap_or(0)
    }

    fn to_rust_string(&self) -> String {
        let len = self.utf8_len();
        if len == 0 {
            return String::new();
        }

        let to_utf8 = sys::interface_fn!(string_to_utf8_chars);
        let mut buf = vec![0u8; len];

        // SAFETY: buf holds exactly `len` bytes.
        let written = unsafe { to_utf8(self.string_sys(), buf.as_mut_ptr() as *mut c_char, len as i64) };
        buf.truncate(usize::try_from(written).unwrap_or(0));

        String::from_utf8(buf).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        let ctor = sys::interface_fn!(string_new_with_utf8_chars_and_len);

        // SAFETY: ctor initializes the destination from `s.len()` bytes of `s`.
        unsafe {
            Self::construct_with(|ptr| ctor(ptr, s.as_ptr() as *const c_char, s.len() as sys::GDExtensionInt))
        }
    }
}

impl From<String> for GString {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl From<&StringName> for GString {
    fn from(name: &StringName) -> Self {
        // SAFETY: the constructor takes a single StringName argument.
        unsafe {
            Self::construct_with(|ptr| {
                let args = [name.sys()];
                (sys::builtin_lifecycle_api().string_from_string_name)(ptr, args.as_ptr())
            })
        }
    }
}

impl From<&GString> for String {
    fn from(s: &GString) -> Self {
        s.to_rust_string()
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rust_string())
    }
}

impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\"", self.to_rust_string())
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        self.to_rust_string() == other.to_rust_string()
    }
}

impl Eq for GString {}

impl PartialEq<str> for GString {
    fn eq(&self, other: &str) -> bool {
        self.to_rust_string() == other
    }
}

impl PartialEq<&str> for GString {
    fn eq(&self, other: &&str) -> bool {
        self.to_rust_string() == *other
    }
}
