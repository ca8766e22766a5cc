/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Argument/return marshalling for a single ptrcall.
//!
//! A [`CallFrame`] lives on the stack of a generated method shim. Arguments are either copied into one of its inline slots
//! (scalars, vectors, object pointers) or referenced by pointer (engine-managed builtins like `String`, which must stay
//! alive on the caller's side). The argument pointer array handed to the engine is assembled only when the call happens,
//! so the frame may be moved freely while being filled.
//!
//! The layouts written here must match what the engine's method binds read:
//!
//! | schema type        | wire type           |
//! |--------------------|---------------------|
//! | `bool`             | `bool` (1 byte)     |
//! | `int` (any `meta`) | `i64`               |
//! | `float`            | `f64`               |
//! | `enum::*`          | `i64`               |
//! | objects            | `*mut Object`       |
//! | builtins           | pointer to storage  |

use std::mem::{align_of, size_of, MaybeUninit};
use std::ptr;

use crate as sys;

/// Maximum number of arguments a frame holds. Engine methods stay well below this.
pub const MAX_ARGS: usize = 16;

/// Size of one inline slot, in bytes. Large enough for `Color`, `Rect2` and `Vector3`.
pub const SLOT_SIZE: usize = 16;

#[repr(C, align(16))]
#[derive(Copy, Clone)]
struct Slot([MaybeUninit<u8>; SLOT_SIZE]);

impl Slot {
    const EMPTY: Slot = Slot([MaybeUninit::uninit(); SLOT_SIZE]);
}

#[derive(Copy, Clone)]
enum ArgKind {
    Inline,
    Pointer(sys::GDExtensionConstTypePtr),
}

/// Marshalled arguments of one native call.
pub struct CallFrame {
    slots: [Slot; MAX_ARGS],
    kinds: [ArgKind; MAX_ARGS],
    len: usize,
}

impl CallFrame {
    pub fn new() -> Self {
        Self {
            slots: [Slot::EMPTY; MAX_ARGS],
            kinds: [ArgKind::Inline; MAX_ARGS],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies a wire value into the next inline slot.
    ///
    /// # Panics
    /// If the frame is full, or `T` does not fit into a slot.
    pub fn arg<T: Copy>(&mut self, value: T) {
        assert!(
            size_of::<T>() <= SLOT_SIZE && align_of::<T>() <= align_of::<Slot>(),
            "wire type `{}` does not fit into a call frame slot",
            std::any::type_name::<T>()
        );
        let index = self.next_index();

        // SAFETY: size and alignment checked above; the slot is exclusively borrowed.
        unsafe {
            ptr::write(self.slots[index].0.as_mut_ptr() as *mut T, value);
        }
        self.kinds[index] = ArgKind::Inline;
        self.len += 1;
    }

    /// Passes an argument by pointer to storage owned by the caller.
    ///
    /// # Safety
    /// `ptr` must point to a live value of the type the method bind expects, and stay valid until the call returns.
    pub unsafe fn arg_ptr(&mut self, ptr: sys::GDExtensionConstTypePtr) {
        let index = self.next_index();
        self.kinds[index] = ArgKind::Pointer(ptr);
        self.len += 1;
    }

    /// Reads back the inline value at `index`. Mainly useful to inspect frames.
    ///
    /// # Safety
    /// The argument at `index` must have been written with [`arg::<T>()`][Self::arg].
    pub unsafe fn read_inline<T: Copy>(&self, index: usize) -> T {
        assert!(index < self.len, "argument index {index} out of bounds");
        ptr::read(self.slots[index].0.as_ptr() as *const T)
    }

    /// Pointer array as the engine consumes it.
    pub fn arg_ptrs(&self) -> [sys::GDExtensionConstTypePtr; MAX_ARGS] {
        let mut ptrs = [ptr::null(); MAX_ARGS];
        for (i, kind) in self.kinds[..self.len].iter().enumerate() {
            ptrs[i] = match *kind {
                ArgKind::Inline => self.slots[i].0.as_ptr() as sys::GDExtensionConstTypePtr,
                ArgKind::Pointer(ptr) => ptr,
            };
        }
        ptrs
    }

    /// Calls a method that returns nothing.
    ///
    /// # Safety
    /// `method_bind` must belong to the class of `object` (or be static), and the frame must match its signature.
    pub unsafe fn call_void(&self, method_bind: sys::GDExtensionMethodBindPtr, object: sys::GDExtensionObjectPtr) {
        self.ptrcall(method_bind, object, ptr::null_mut());
    }

    /// Calls a method whose return value is a plain wire value (scalar, vector, object pointer).
    ///
    /// # Safety
    /// See [`call_void()`][Self::call_void]; `R` must be the wire type of the method's return value.
    pub unsafe fn call<R: Copy>(&self, method_bind: sys::GDExtensionMethodBindPtr, object: sys::GDExtensionObjectPtr) -> R {
        let mut ret = MaybeUninit::<R>::zeroed();
        self.ptrcall(method_bind, object, ret.as_mut_ptr() as sys::GDExtensionTypePtr);
        ret.assume_init()
    }

    /// Calls a method that writes its return value into caller-provided storage.
    ///
    /// Used for engine-managed builtins, which must be constructed in place (`ret` typically points to a default-constructed
    /// `String` or `StringName`).
    ///
    /// # Safety
    /// See [`call_void()`][Self::call_void]; `ret` must point to initialized storage of the return type.
    pub unsafe fn call_into(
        &self,
        method_bind: sys::GDExtensionMethodBindPtr,
        object: sys::GDExtensionObjectPtr,
        ret: sys::GDExtensionTypePtr,
    ) {
        self.ptrcall(method_bind, object, ret);
    }

    unsafe fn ptrcall(
        &self,
        method_bind: sys::GDExtensionMethodBindPtr,
        object: sys::GDExtensionObjectPtr,
        ret: sys::GDExtensionTypePtr,
    ) {
        let ptrcall = sys::interface_fn!(object_method_bind_ptrcall);
        let args = self.arg_ptrs();

        sys::out!("  ptrcall: {} args, bind {method_bind:?}, object {object:?}", self.len);
        ptrcall(method_bind, object, args.as_ptr(), ret);
    }

    fn next_index(&self) -> usize {
        assert!(self.len < MAX_ARGS, "call frame holds at most {MAX_ARGS} arguments");
        self.len
    }
}

impl Default for CallFrame {
    fn default() -> Self {
        Self::new()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Reading arguments of incoming calls

/// Reads argument `index` of an engine-to-extension call as a plain wire value.
///
/// # Safety
/// `args` must hold at least `index + 1` valid pointers to values of type `T`.
pub unsafe fn read_arg<T: Copy>(args: *const sys::GDExtensionConstTypePtr, index: usize) -> T {
    let arg_ptr = *args.add(index);
    ptr::read(arg_ptr as *const T)
}

/// Writes a plain wire value into the return slot of an engine-to-extension call.
///
/// # Safety
/// `ret` must point to writable storage of type `T`.
pub unsafe fn write_return<T: Copy>(ret: sys::GDExtensionTypePtr, value: T) {
    ptr::write(ret as *mut T, value);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn inline_slots_are_aligned() {
        let mut frame = CallFrame::new();
        frame.arg(7i64);
        frame.arg(true);
        frame.arg(2.5f64);

        let ptrs = frame.arg_ptrs();
        for ptr in &ptrs[..3] {
            assert_eq!(*ptr as usize % 16, 0);
        }
        assert!(ptrs[3].is_null());
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn pointer_args_are_passed_through() {
        let storage = [0u8; 8];
        let mut frame = CallFrame::new();
        frame.arg(1i64);
        unsafe { frame.arg_ptr(storage.as_ptr() as sys::GDExtensionConstTypePtr) };

        let ptrs = frame.arg_ptrs();
        assert_eq!(ptrs[1], storage.as_ptr() as sys::GDExtensionConstTypePtr);
    }

    #[test]
    #[should_panic(expected = "at most 16 arguments")]
    fn overflow_panics() {
        let mut frame = CallFrame::new();
        for i in 0..=MAX_ARGS {
            frame.arg(i as i64);
        }
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn oversized_wire_type_panics() {
        let mut frame = CallFrame::new();
        frame.arg([0f64; 3]);
    }

    #[test]
    fn read_arg_and_write_return() {
        let value = 42.5f64;
        let args = [&value as *const f64 as sys::GDExtensionConstTypePtr];
        let read: f64 = unsafe { read_arg(args.as_ptr(), 0) };
        assert_eq!(read, 42.5);

        let mut ret = 0i64;
        unsafe { write_return(&mut ret as *mut i64 as sys::GDExtensionTypePtr, -3i64) };
        assert_eq!(ret, -3);
    }

    proptest! {
        #[test]
        fn mixed_args_keep_their_bytes(ints in prop::collection::vec(any::<i64>(), 0..6), floats in prop::collection::vec(any::<f64>(), 0..6)) {
            let mut frame = CallFrame::new();
            for &i in &ints {
                frame.arg(i);
            }
            for &f in &floats {
                frame.arg(f);
            }

            let ptrs = frame.arg_ptrs();
            for (index, &i) in ints.iter().enumerate() {
                let read = unsafe { *(ptrs[index] as *const i64) };
                prop_assert_eq!(read, i);
            }
            for (offset, &f) in floats.iter().enumerate() {
                let read = unsafe { frame.read_inline::<f64>(ints.len() + offset) };
                prop_assert_eq!(read.to_bits(), f.to_bits());
            }
        }
    }
}
