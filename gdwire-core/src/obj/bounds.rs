/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Different ways how bounds of a `GodotClass` can be checked.
//!
//! 1. [`Declarer`] tells whether the class is provided by the engine ([`DeclEngine`]) or defined by the user through
//!    `#[derive(GodotClass)]` ([`DeclUser`]).
//!
//! 2. [`Memory`] is the memory strategy of the **static** type: [`MemRefCounted`] for `RefCounted` and derived classes,
//!    [`MemManual`] for everything else. Useful for associated functions such as construction.
//!
//! 3. [`DynMemory`] is the memory strategy of the **dynamic** type. Equal to `Memory`, except for `Object` itself:
//!    a `Gd<Object>` may point to any object, so [`MemDynamic`] decides per instance.
//!
//! ```no_run
//! use gdwire_core::obj::{bounds, Bounds, Gd, GodotClass};
//!
//! // Smart pointer accepting only manually managed classes.
//! struct Owned<T>
//! where
//!     T: GodotClass + Bounds<Memory = bounds::MemManual>,
//! {
//!     inner: Gd<T>,
//! }
//! ```

use private::Sealed;

use crate::obj::{GodotClass, InstanceId};
use crate::sys;

pub(super) mod private {
    pub trait Sealed {}
}

/// Compile-time characteristics of a class; implemented by generated code and `#[derive(GodotClass)]`.
///
/// # Safety
/// The associated types must match the class's position in the engine's class hierarchy.
pub unsafe trait Bounds {
    /// Memory strategy of the static type.
    type Memory: Memory;

    /// Memory strategy of instances; differs from `Memory` only for `Object`.
    type DynMemory: DynMemory;

    /// Whether the class is declared by the engine or the user.
    type Declarer: Declarer;
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Memory

/// Memory strategy of the static type.
pub trait Memory: Sealed {}

/// Memory strategy of the dynamic type.
pub trait DynMemory: Sealed {
    /// Whether the object behind `object_ptr` is reference-counted.
    ///
    /// # Safety
    /// `object_ptr` must point to a live object of a class with this memory strategy.
    #[doc(hidden)]
    unsafe fn is_ref_counted(object_ptr: sys::GDExtensionObjectPtr) -> bool;
}

/// Reference-counted: `RefCounted` and derived classes.
pub struct MemRefCounted {}
impl Sealed for MemRefCounted {}
impl Memory for MemRefCounted {}
impl DynMemory for MemRefCounted {
    unsafe fn is_ref_counted(_object_ptr: sys::GDExtensionObjectPtr) -> bool {
        true
    }
}

/// Manually managed: all other classes. Instances must be freed explicitly, or handed to an owner like the scene tree.
pub struct MemManual {}
impl Sealed for MemManual {}
impl Memory for MemManual {}
impl DynMemory for MemManual {
    unsafe fn is_ref_counted(_object_ptr: sys::GDExtensionObjectPtr) -> bool {
        false
    }
}

/// Determined per instance, for `Object`.
pub struct MemDynamic {}
impl Sealed for MemDynamic {}
impl DynMemory for MemDynamic {
    unsafe fn is_ref_counted(object_ptr: sys::GDExtensionObjectPtr) -> bool {
        InstanceId::of_object(object_ptr).is_some_and(InstanceId::is_ref_counted)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Declarer

/// Who declares the class.
pub trait Declarer: Sealed {
    /// What `Gd<T>` dereferences to: the engine class itself, or the engine base of a user class.
    type DerefTarget<T: GodotClass>: GodotClass;
}

/// Classes provided by the engine.
pub enum DeclEngine {}
impl Sealed for DeclEngine {}
impl Declarer for DeclEngine {
    type DerefTarget<T: GodotClass> = T;
}

/// Classes declared with `#[derive(GodotClass)]`. Access to the Rust struct goes through `Gd::bind()`/`bind_mut()`.
pub enum DeclUser {}
impl Sealed for DeclUser {}
impl Declarer for DeclUser {
    type DerefTarget<T: GodotClass> = T::Base;
}
