/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Functions and macros that are not very specific to gdwire, but come in handy.

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Trace output, enabled with the `debug-log` feature.
#[cfg(feature = "debug-log")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Trace output, enabled with the `debug-log` feature.
#[cfg(not(feature = "debug-log"))]
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); })
}

/// Fetches a function from the loaded interface table.
///
/// ```ignore
/// let construct = sys::interface_fn!(classdb_construct_object);
/// let obj = construct(class_name.string_sys());
/// ```
#[macro_export]
macro_rules! interface_fn {
    ($name:ident) => {
        $crate::unwrap_interface_fn($crate::get_interface().$name, stringify!($name))
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

/// Unwraps an optional interface function, panicking with its name if the engine did not provide it.
#[doc(hidden)]
#[inline]
pub fn unwrap_interface_fn<F>(f: Option<F>, name: &str) -> F {
    match f {
        Some(f) => f,
        None => panic!("GDExtension interface function `{name}` is not available"),
    }
}

/// If `ptr` is not null, returns `Some(mapper(ptr))`; otherwise `None`.
#[inline]
pub fn ptr_then<T, R, F>(ptr: *mut T, mapper: F) -> Option<R>
where
    F: FnOnce(*mut T) -> R,
{
    if ptr.is_null() {
        None
    } else {
        Some(mapper(ptr))
    }
}

/// Explicitly cast away `const` from a pointer, similar to C++ `const_cast`.
pub fn force_mut_ptr<T>(ptr: *const T) -> *mut T {
    ptr as *mut T
}

/// Returns a C `const char*` for a null-terminated byte string.
#[inline]
pub fn c_str(s: &[u8]) -> *const std::ffi::c_char {
    debug_assert!(!s.is_empty() && s[s.len() - 1] == 0);

    s.as_ptr() as *const std::ffi::c_char
}

/// Pointer that may be stored in statics.
///
/// Engine handles (singletons, class tags) are process-wide and never dereferenced by Rust, so sharing the address across
/// threads is sound; using it is still subject to the engine's threading rules.
#[derive(Debug)]
pub struct SyncPtr<T>(*mut T);

// Not derived: derives would bound `T: Copy` or `T: PartialEq`, excluding e.g. `c_void`.
impl<T> Copy for SyncPtr<T> {}

impl<T> Clone for SyncPtr<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> PartialEq for SyncPtr<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for SyncPtr<T> {}

// SAFETY: see type docs; the pointer is only passed back to the engine.
unsafe impl<T> Send for SyncPtr<T> {}
unsafe impl<T> Sync for SyncPtr<T> {}

impl<T> SyncPtr<T> {
    pub fn new(ptr: *mut T) -> Self {
        Self(ptr)
    }

    pub fn get(self) -> *mut T {
        self.0
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ptr_then_maps_non_null() {
        let mut value = 5;
        assert_eq!(ptr_then(&mut value as *mut i32, |p| unsafe { *p }), Some(5));
        assert_eq!(ptr_then(std::ptr::null_mut::<i32>(), |p| unsafe { *p }), None);
    }

    #[test]
    fn sync_ptr_copies_out_of_shared_reference() {
        let mut value = 0u8;
        let ptr = SyncPtr::new(&mut value as *mut u8 as *mut std::ffi::c_void);

        let shared: &SyncPtr<std::ffi::c_void> = &ptr;
        let copied = shared.get();
        assert_eq!(copied, ptr.get());
        assert_eq!(*shared, ptr.clone());
    }

    #[test]
    #[should_panic(expected = "`object_destroy` is not available")]
    fn missing_interface_fn_panics() {
        let missing: Option<fn()> = None;
        unwrap_interface_fn(missing, "object_destroy");
    }
}
