/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Storage for an engine-managed builtin of `N` bytes, with very restricted operations.
///
/// The contents are only ever read and written by engine constructors/destructors; Rust just provides properly aligned memory.
/// Not `Send`/`Sync`, since the engine types behind it (e.g. `String` with copy-on-write buffers) are not thread-safe.
#[repr(C, align(8))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>,
}

impl<const N: usize> Opaque<N> {
    /// Zeroed storage, ready to be constructed into by the engine.
    pub const fn zeroed() -> Self {
        Self {
            storage: [0; N],
            marker: std::marker::PhantomData,
        }
    }

    pub fn as_ptr(&self) -> *const std::ffi::c_void {
        self.storage.as_ptr() as *const std::ffi::c_void
    }

    pub fn as_mut_ptr(&mut self) -> *mut std::ffi::c_void {
        self.storage.as_mut_ptr() as *mut std::ffi::c_void
    }
}

impl<const N: usize> std::fmt::Debug for Opaque<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque({N} bytes)")
    }
}
